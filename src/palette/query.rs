/// Structured form of a `palette[,shade]` query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Query<'a> {
    pub palette: &'a str,
    /// Empty when the whole palette is requested
    pub shade: &'a str,
}

impl<'a> Query<'a> {
    pub fn wants_full_palette(&self) -> bool {
        self.shade.is_empty()
    }
}

/// Parse raw input text into a query. Never fails.
///
/// Only the first two comma-separated segments are used; anything after a
/// second comma is ignored. Segments are trimmed of spaces only, so tabs and
/// other whitespace stay part of the name.
pub fn parse(raw: &str) -> Query<'_> {
    match raw.split_once(',') {
        Some((palette, rest)) => {
            let shade = rest.split_once(',').map_or(rest, |(shade, _)| shade);
            Query {
                palette: trim_spaces(palette),
                shade: trim_spaces(shade),
            }
        }
        None => Query {
            palette: trim_spaces(raw),
            shade: "",
        },
    }
}

fn trim_spaces(s: &str) -> &str {
    s.trim_matches(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_palette_only() {
        let query = parse("blue");
        assert_eq!(query.palette, "blue");
        assert_eq!(query.shade, "");
        assert!(query.wants_full_palette());
    }

    #[test]
    fn test_parse_palette_and_shade() {
        let query = parse("blue,500");
        assert_eq!(query, Query { palette: "blue", shade: "500" });
        assert!(!query.wants_full_palette());
    }

    #[test]
    fn test_parse_trims_spaces() {
        assert_eq!(parse("  blue , 500 "), parse("blue,500"));
        assert_eq!(parse("   pink   ").palette, "pink");
    }

    #[test]
    fn test_parse_keeps_tabs() {
        let query = parse("\tblue, 500\t");
        assert_eq!(query.palette, "\tblue");
        assert_eq!(query.shade, "500\t");
    }

    #[test]
    fn test_parse_ignores_extra_segments() {
        assert_eq!(parse("blue,500,junk,more"), parse("blue,500"));
    }

    #[test]
    fn test_parse_trailing_comma() {
        let query = parse("blue,");
        assert_eq!(query.palette, "blue");
        assert!(query.wants_full_palette());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse(""), Query::default());
        assert_eq!(parse("   "), Query::default());
        assert_eq!(parse(","), Query::default());
    }
}
