pub mod lcd;

pub use lcd::{render_inline, render_lcd};
