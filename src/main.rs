use anyhow::{Context, Result};
use clap::Parser;
use deskcalc::calculator::{Button, CalculatorEngine, copy_to_clipboard, tokenize};
use deskcalc::cli::Cli;
use deskcalc::readout::Readout;
use deskcalc::ui::{render_inline, render_lcd};
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let policy = cli.resolve_policy().context("Failed to load configuration")?;
    let mut engine = CalculatorEngine::with_policy(policy);

    if cli.keys.is_empty() {
        run_stdin(&cli, &mut engine)?;
    } else {
        let buttons = tokenize(&cli.keys.join(" ")).context("Invalid key sequence")?;
        press_all(&cli, &mut engine, &buttons);
        print_readout(&cli, &engine)?;
    }

    if cli.copy {
        let readout = Readout::from_engine(&engine);
        copy_to_clipboard(readout.text_for_clipboard())
            .context("Failed to copy display")?;
        tracing::info!("Copied {} to clipboard", readout.text_for_clipboard());
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "deskcalc=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Read key sequences line by line, printing the panel after each line.
/// A line with an unknown key is reported and skipped as a whole.
fn run_stdin(cli: &Cli, engine: &mut CalculatorEngine) -> Result<()> {
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        match tokenize(&line) {
            Ok(buttons) => {
                press_all(cli, engine, &buttons);
                print_readout(cli, engine)?;
            }
            Err(e) => tracing::warn!("Skipping line: {}", e),
        }
    }
    Ok(())
}

fn press_all(cli: &Cli, engine: &mut CalculatorEngine, buttons: &[Button]) {
    for &button in buttons {
        engine.press_button(button);
        if cli.trace {
            let readout = Readout::from_engine(engine);
            println!(
                "{:>3}  {}",
                button.label(),
                render_inline(&readout, engine.policy().panel_width)
            );
        }
    }
}

fn print_readout(cli: &Cli, engine: &CalculatorEngine) -> Result<()> {
    let readout = Readout::from_engine(engine);
    if cli.json {
        println!("{}", serde_json::to_string(&readout)?);
    } else {
        println!("{}", render_lcd(&readout, engine.policy().panel_width));
    }
    Ok(())
}
