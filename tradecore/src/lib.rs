//! tradecore - shared library for TradeBuilt applications

pub mod animation;
pub mod config;
pub mod dither;
pub mod logging;
pub mod repaint;
pub mod safety;
pub mod sequence;
pub mod theme;
pub mod widgets;

pub use config::{CoreError, Result};
pub use repaint::RepaintController;
pub use sequence::{Sequence, Step};
pub use theme::TradeTheme;
