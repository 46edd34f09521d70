//! Design recommendations built on the color science core
//!
//! Palette suggestions and font color rankings.

pub mod font;
pub mod palette;

pub use font::{FontColorAdvisor, FontSuggestion};
pub use palette::{PaletteAdvisor, Suggestion};
