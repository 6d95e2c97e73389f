use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const KEY_HINTS: &str = " ↑↓ select  ⏎ shill  1-7 shill  q quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = format!(" {} ", state.status_line());

    // Pad so the key hints sit at the right edge
    let used = status.width() + KEY_HINTS.width();
    let remaining = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(status, Theme::status_bar()),
        Span::styled(" ".repeat(remaining), Theme::status_bar()),
        Span::styled(KEY_HINTS, Theme::key_hint()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
