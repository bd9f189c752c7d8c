use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Cell, Paragraph, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::config::UiConfig;
use crate::controller::RenderModel;
use crate::report::{column_widths, VALUE_HEADER, WEIGHT_HEADER};
use crate::theme::{parse_hex_color, Theme, ThemeColors};

/// Text shown before the input field
const INPUT_PROMPT: &str = "> ";

/// Horizontal padding on each side of a table cell
const CELL_PADDING: usize = 1;

/// Main render function
pub fn render(frame: &mut Frame, model: &RenderModel, theme: &Theme, ui: &UiConfig) {
    let colors = &theme.colors;

    let [prompt_area, _, input_area, _, hint_area, result_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(ui.prompt.as_str()).style(Style::default().fg(colors.prompt)),
        prompt_area,
    );

    render_input(frame, model, colors, ui, input_area);

    frame.render_widget(
        Paragraph::new(ui.hint.as_str()).style(Style::default().fg(colors.text_muted)),
        hint_area,
    );

    if let Some(message) = &model.error_message {
        render_error(frame, message, colors, result_area);
    } else if let Some(label) = model.header_label {
        render_table(frame, model, label, colors, result_area);
    }
}

/// Render the input line and place the cursor
fn render_input(
    frame: &mut Frame,
    model: &RenderModel,
    colors: &ThemeColors,
    ui: &UiConfig,
    area: Rect,
) {
    let width = usize::from(ui.input_width).max(1);
    let (visible, cursor_x) = scroll_input(&model.input_text, model.cursor, width);

    let text = if model.input_text.is_empty() {
        Span::styled(ui.placeholder.as_str(), Style::default().fg(colors.text_muted))
    } else {
        Span::styled(visible, Style::default().fg(colors.text))
    };

    let line = Line::from(vec![
        Span::styled(INPUT_PROMPT, Style::default().fg(colors.prompt)),
        text,
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let x = area.x + (INPUT_PROMPT.len() + cursor_x) as u16;
    if x < area.right() {
        frame.set_cursor_position((x, area.y));
    }
}

/// Window `text` to `width` columns so the cursor stays visible.
/// Returns the visible text and the cursor column within it.
fn scroll_input(text: &str, cursor: usize, width: usize) -> (String, usize) {
    let scroll = (cursor + 1).saturating_sub(width);
    let mut column = 0;
    let mut start = None;
    let mut visible = String::new();

    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if column >= scroll && column + w <= scroll + width {
            start.get_or_insert(column);
            visible.push(c);
        }
        column += w;
    }

    // A wide char cut by the scroll offset is dropped, so the text may start past `scroll`
    let start = start.unwrap_or(scroll).min(cursor);
    (visible, cursor - start)
}

fn render_error(frame: &mut Frame, message: &str, colors: &ThemeColors, area: Rect) {
    let style = Style::default().fg(colors.error);
    let lines = vec![
        Line::styled("---", style),
        Line::styled(message, style),
        Line::styled("---", style),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_table(
    frame: &mut Frame,
    model: &RenderModel,
    label: &str,
    colors: &ThemeColors,
    area: Rect,
) {
    let accent = model
        .accent_color
        .and_then(parse_hex_color)
        .unwrap_or(colors.prompt);

    let widths = column_widths(label, &model.rows).map(|w| w + 2 * CELL_PADDING);

    let header = Row::new([label, WEIGHT_HEADER, VALUE_HEADER].map(padded)).style(
        Style::default()
            .fg(colors.header_text(label))
            .bg(accent)
            .add_modifier(Modifier::BOLD),
    );

    let rows = model.rows.iter().enumerate().map(|(i, row)| {
        Row::new([row.label, row.shade, row.color].map(padded))
            .style(row_style(colors, i))
    });

    let table = Table::new(rows, widths.map(|w| Constraint::Length(w as u16)))
        .header(header)
        .column_spacing(0)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent)),
        );

    // Two border columns/lines around the header and body
    let table_width = widths.iter().sum::<usize>() as u16 + 2;
    let table_height = model.rows.len() as u16 + 3;
    let table_area = Rect {
        width: table_width.min(area.width),
        height: table_height.min(area.height),
        ..area
    };

    frame.render_widget(table, table_area);
}

fn padded(text: &str) -> Cell<'_> {
    let pad = " ".repeat(CELL_PADDING);
    Cell::from(format!("{pad}{text}{pad}"))
}

/// Alternating body row backgrounds. Rows count from zero, so the first
/// body row takes the even-row color.
fn row_style(colors: &ThemeColors, index: usize) -> Style {
    let bg: Color = if index % 2 == 0 {
        colors.row_even_bg
    } else {
        colors.row_odd_bg
    };
    Style::default().fg(colors.row_text).bg(bg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{Controller, Event};
    use crate::palette::PaletteStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn model_for(input: &str) -> RenderModel {
        let mut controller = Controller::new(PaletteStore::dracula());
        controller.handle(Event::CharacterTyped(input.to_string()));
        controller.handle(Event::Submit).unwrap()
    }

    fn draw(model: &RenderModel) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(50, 20)).unwrap();
        terminal
            .draw(|frame| render(frame, model, &Theme::default(), &UiConfig::default()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_scroll_input_fits() {
        assert_eq!(scroll_input("blue", 4, 20), ("blue".to_string(), 4));
    }

    #[test]
    fn test_scroll_input_keeps_cursor_visible() {
        let (visible, cursor) = scroll_input("abcdefghij", 10, 5);
        assert_eq!(visible, "ghij");
        assert_eq!(cursor, 4);

        let (visible, cursor) = scroll_input("abcdefghij", 2, 5);
        assert_eq!(visible, "abcde");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_scroll_input_wide_char_at_offset() {
        // Offset 9 falls inside the fourth char, which is skipped
        let (visible, cursor) = scroll_input("日本語日本語", 12, 4);
        assert_eq!(visible, "語");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_render_placeholder() {
        let model = Controller::new(PaletteStore::dracula()).render_model();
        let lines = draw(&model);
        assert!(lines[0].starts_with("Tell me what dracula color you need:"));
        assert!(lines[2].starts_with("> palette,shade"));
        assert!(lines[4].starts_with("(esc to quit)"));
    }

    #[test]
    fn test_render_error_block() {
        let lines = draw(&model_for("nope"));
        assert!(lines[2].starts_with("> nope"));
        assert!(lines[5].starts_with("---"));
        assert!(lines[6].starts_with("palette doesn't exist"));
        assert!(lines[7].starts_with("---"));
    }

    #[test]
    fn test_render_single_shade_table() {
        let lines = draw(&model_for("blue,500"));
        assert!(lines[5].starts_with('╭'));
        assert!(lines[6].contains(" blue "));
        assert!(lines[6].contains(" weight "));
        assert!(lines[7].contains(" 500 "));
        assert!(lines[7].contains(" #7886b4 "));
        assert!(lines[8].starts_with('╰'));
    }

    #[test]
    fn test_row_style_alternates_from_even() {
        let colors = ThemeColors::default();
        assert_eq!(row_style(&colors, 0).bg, Some(colors.row_even_bg));
        assert_eq!(row_style(&colors, 1).bg, Some(colors.row_odd_bg));
        assert_eq!(row_style(&colors, 2).bg, Some(colors.row_even_bg));
    }

    #[test]
    fn test_render_full_table_order() {
        let lines = draw(&model_for("pink"));
        assert!(lines[7].contains(" 100 "));
        assert!(lines[11].contains(" 50 "));
        assert!(lines[17].contains(" DEFAULT "));
        assert!(lines[17].contains("#ff79c6"));
        assert!(lines[18].starts_with('╰'));
    }
}
