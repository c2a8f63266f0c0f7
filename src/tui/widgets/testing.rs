/// Testing utilities for widget rendering
use ratatui::{buffer::Buffer, layout::Rect};

use super::RenderableWidget;
use crate::config::ThemeConfig;

/// Theme with unicode box characters
pub fn test_theme() -> ThemeConfig {
    ThemeConfig::default()
}

/// Theme with ASCII box characters, for predictable output
pub fn test_theme_ascii() -> ThemeConfig {
    ThemeConfig {
        use_unicode: false,
        ..ThemeConfig::default()
    }
}

/// Render a widget to a fresh buffer with the unicode theme
pub fn render_widget(widget: &impl RenderableWidget, width: u16, height: u16) -> Buffer {
    render_widget_with_theme(widget, width, height, &test_theme())
}

pub fn render_widget_with_theme(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
    theme: &ThemeConfig,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, theme);
    buf
}

/// Text of every line of the buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Assert the buffer matches `expected`, ignoring trailing spaces
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}
