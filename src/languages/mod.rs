// Language module.
// Display colors and byte-share computation for repository languages.

pub mod breakdown;
pub mod colors;

pub use breakdown::language_breakdown;
pub use colors::{DEFAULT_COLOR, language_color};
