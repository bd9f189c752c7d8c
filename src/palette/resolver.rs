use thiserror::Error;

use super::query::Query;
use super::store::{ColorValue, Palette, PaletteStore};

/// A successful lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Every shade of a palette
    Full {
        palette_name: &'static str,
        palette: Palette,
    },
    /// One shade of a palette
    Single {
        palette_name: &'static str,
        shade: &'static str,
        color: ColorValue,
    },
}

impl Resolution {
    pub fn palette_name(&self) -> &'static str {
        match *self {
            Resolution::Full { palette_name, .. } | Resolution::Single { palette_name, .. } => {
                palette_name
            }
        }
    }

    /// Color used to accent the result table
    pub fn accent_color(&self) -> Option<ColorValue> {
        match *self {
            Resolution::Full { palette, .. } => palette.default_color(),
            Resolution::Single { color, .. } => Some(color),
        }
    }
}

/// Why a query did not resolve
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    #[error("palette doesn't exist")]
    UnknownPalette,

    #[error("shade doesn't exist")]
    UnknownShade,
}

pub type ResolutionResult = std::result::Result<Resolution, ResolveError>;

/// Resolve a parsed query against the store.
///
/// The palette is always checked first: an unknown palette is reported as
/// `UnknownPalette` whatever the shade text says.
pub fn resolve(query: &Query<'_>, store: &PaletteStore) -> ResolutionResult {
    let (palette_name, palette) = store
        .get(query.palette)
        .ok_or(ResolveError::UnknownPalette)?;

    if query.wants_full_palette() {
        return Ok(Resolution::Full {
            palette_name,
            palette,
        });
    }

    let (shade, color) = palette
        .get(query.shade)
        .ok_or(ResolveError::UnknownShade)?;

    Ok(Resolution::Single {
        palette_name,
        shade,
        color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::query::parse;

    fn resolve_str(raw: &str) -> ResolutionResult {
        resolve(&parse(raw), PaletteStore::dracula())
    }

    #[test]
    fn test_resolve_full_palette() {
        let result = resolve_str("blue").unwrap();
        assert!(matches!(
            result,
            Resolution::Full {
                palette_name: "blue",
                ..
            }
        ));
        assert_eq!(result.accent_color(), Some("#6272a4"));
    }

    #[test]
    fn test_resolve_single_shade() {
        let result = resolve_str("blue,500").unwrap();
        assert_eq!(
            result,
            Resolution::Single {
                palette_name: "blue",
                shade: "500",
                color: "#7886b4",
            }
        );
        assert_eq!(result.accent_color(), Some("#7886b4"));
    }

    #[test]
    fn test_resolve_unknown_palette() {
        assert_eq!(resolve_str("nope"), Err(ResolveError::UnknownPalette));
        assert_eq!(resolve_str(""), Err(ResolveError::UnknownPalette));
    }

    #[test]
    fn test_unknown_palette_wins_over_unknown_shade() {
        assert_eq!(resolve_str("nope,999"), Err(ResolveError::UnknownPalette));
        assert_eq!(resolve_str("nope,500"), Err(ResolveError::UnknownPalette));
    }

    #[test]
    fn test_resolve_unknown_shade() {
        assert_eq!(resolve_str("blue,999"), Err(ResolveError::UnknownShade));
        assert_eq!(resolve_str("blue,default"), Err(ResolveError::UnknownShade));
    }

    #[test]
    fn test_resolve_default_shade() {
        let result = resolve_str("pink,DEFAULT").unwrap();
        assert_eq!(result.accent_color(), Some("#ff79c6"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ResolveError::UnknownPalette.to_string(),
            "palette doesn't exist"
        );
        assert_eq!(ResolveError::UnknownShade.to_string(), "shade doesn't exist");
    }
}
