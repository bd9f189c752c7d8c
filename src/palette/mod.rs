mod query;
mod resolver;
mod rows;
mod store;

pub use query::{parse, Query};
pub use resolver::{resolve, Resolution, ResolutionResult, ResolveError};
pub use rows::{project, DisplayRow, ROW_LABEL};
pub use store::{ColorValue, Palette, PaletteStore, DEFAULT_SHADE};
