use super::resolver::{Resolution, ResolutionResult};
use super::store::ColorValue;

/// Label shown in the first column of every row
pub const ROW_LABEL: &str = "color";

/// One display-ready table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRow {
    pub label: &'static str,
    pub shade: &'static str,
    pub color: ColorValue,
}

impl DisplayRow {
    fn new(shade: &'static str, color: ColorValue) -> Self {
        Self {
            label: ROW_LABEL,
            shade,
            color,
        }
    }
}

/// Project a resolution into table rows.
///
/// Rows are ordered by plain string comparison of the shade key, so "100"
/// comes before "50" and "DEFAULT" comes last. Failures project to no rows.
pub fn project(result: &ResolutionResult) -> Vec<DisplayRow> {
    match result {
        Ok(Resolution::Full { palette, .. }) => {
            let mut rows: Vec<DisplayRow> = palette
                .iter()
                .map(|(shade, color)| DisplayRow::new(shade, color))
                .collect();
            rows.sort_unstable_by(|a, b| a.shade.cmp(b.shade));
            rows
        }
        Ok(Resolution::Single { shade, color, .. }) => vec![DisplayRow::new(*shade, *color)],
        Err(_) => Vec::new(),
    }
}
