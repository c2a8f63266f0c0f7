/// StatusBar widget - page indicator and key hint at the bottom of the screen
///
/// Two lines: a horizontal rule, then the page description on the left and
/// the quit hint on the right.
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::config::ThemeConfig;
use crate::tui::widgets::RenderableWidget;

pub const QUIT_HINT: &str = "q: quit";

#[derive(Debug)]
pub struct StatusBar {
    /// e.g. "Games 2/3"
    pub page: String,
    pub hint: &'static str,
}

impl StatusBar {
    pub fn new(page: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            hint: QUIT_HINT,
        }
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        let rule = theme.box_chars().horizontal.repeat(area.width as usize);
        buf.set_string(area.x, area.y, &rule, Style::default());

        let y = area.y + 1;
        buf.set_string(area.x + 1, y, &self.page, Style::default());

        // Right aligned with a one column margin; dropped when it would overlap
        let hint_width = self.hint.width() as u16;
        let page_end = 1 + self.page.width() as u16;
        if page_end + hint_width + 2 <= area.width {
            let x = area.x + area.width - hint_width - 1;
            buf.set_string(x, y, self.hint, Style::default());
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_status_bar_layout() {
        let widget = StatusBar::new("Games 2/3");
        let buf = render_widget_with_theme(&widget, 24, 2, &test_theme_ascii());
        assert_buffer(&buf, &["------------------------", " Games 2/3      q: quit "]);
    }

    #[test]
    fn test_hint_dropped_when_narrow() {
        let widget = StatusBar::new("AL Wild Card 7/8");
        let buf = render_widget(&widget, 20, 2);
        assert_eq!(buffer_lines(&buf)[1].trim_end(), " AL Wild Card 7/8");
    }

    #[test]
    fn test_too_short_area_renders_nothing() {
        let widget = StatusBar::new("Games 1/1");
        let buf = render_widget(&widget, 20, 1);
        assert_buffer(&buf, &[""]);
    }
}
