//! Theme configuration model
//!
//! Data only: the closed key sets used to address fields, the palette and
//! shade ids, and [`ThemeConfig`] itself.

mod keys;
mod maps;
mod palette;
mod theme;

pub use keys::*;
pub use maps::*;
pub use palette::*;
pub use theme::*;
