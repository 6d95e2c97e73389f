mod coin_list;
mod layout;
mod status_bar;
mod theme;

pub use coin_list::{hit_test, RowHit};

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_header(frame, app_layout.header, state);
    coin_list::render(frame, app_layout.coin_list, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let header = Paragraph::new(Span::styled(state.title.as_str(), theme::Theme::header()))
        .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;

    fn screen(state: &AppState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_renders_every_coin_in_order() {
        let state = AppState::new(&AppConfig::default(), Rect::new(0, 0, 60, 12));
        let lines = screen(&state, 60, 12);

        assert!(lines[0].contains("Shill your coins!"));
        let names = ["Bitcoin", "Ethereum", "Dash", "Bitconnect", "OmiseGo", "Tezos", "Icon"];
        for (i, name) in names.iter().enumerate() {
            let line = &lines[2 + i];
            assert!(line.contains(name), "row {} was {:?}", i, line);
            assert!(line.contains("Click to shill"));
            assert!(line.contains("     0  "));
        }
        assert!(lines[11].contains("Total shills: 0"));
    }

    #[test]
    fn test_redraw_shows_new_count() {
        let mut state = AppState::new(&AppConfig::default(), Rect::new(0, 0, 60, 12));
        state.vote(2).unwrap();
        state.vote(2).unwrap();
        let lines = screen(&state, 60, 12);
        assert!(lines[4].contains("     2  Dash"));
        assert!(lines[2].contains("     0  Bitcoin"));
        assert!(lines[11].contains("Total shills: 2 | Last: Dash"));
    }

    #[test]
    fn test_short_terminal_scrolls_to_selection() {
        let mut state = AppState::new(&AppConfig::default(), Rect::new(0, 0, 60, 7));
        for _ in 0..6 {
            state.select_next();
        }
        // Three inner rows: OmiseGo, Tezos, Icon
        let lines = screen(&state, 60, 7);
        assert!(lines[2].contains("OmiseGo"), "got {:?}", lines[2]);
        assert!(lines[3].contains("Tezos"));
        assert!(lines[4].contains("Icon"));
        assert!(!lines.iter().any(|l| l.contains("Bitcoin")));
    }
}
