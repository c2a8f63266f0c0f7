/// Section header: title text over a rule of the same length
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::ThemeConfig;
use crate::formatting::format_header;

/// Renders a section header at row `y` of `area`
///
/// Returns the number of lines rendered (height consumed)
pub fn render_section_header(
    text: &str,
    double_line: bool,
    area: Rect,
    y: u16,
    buf: &mut Buffer,
    theme: &ThemeConfig,
) -> u16 {
    if y >= area.bottom() {
        return 0;
    }

    let header = format_header(text, double_line, &theme.box_chars());
    let mut lines_rendered = 0;

    for line in header.lines() {
        if y + lines_rendered >= area.bottom() {
            break;
        }
        buf.set_string(
            area.x,
            y + lines_rendered,
            line,
            Style::default().fg(theme.header_fg),
        );
        lines_rendered += 1;
    }

    lines_rendered
}
