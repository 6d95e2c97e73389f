use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::ui::{self, RowHit};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let index = state.selected;
            vote(state, index)
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            vote(state, index)
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }

    let hit = ui::hit_test(
        state.viewport,
        mouse.column,
        mouse.row,
        &state.store,
        state.selected,
    );
    match hit {
        Some(RowHit::Button(index)) => vote(state, index),
        Some(RowHit::Row(index)) => {
            state.select(index);
            vec![]
        }
        None => vec![],
    }
}

/// Apply a vote and request its analytics submission.
fn vote(state: &mut AppState, index: usize) -> Vec<Action> {
    match state.vote(index) {
        Ok(record) => {
            tracing::info!(coin = %record.name, votes = record.votes, "shilled");
            vec![Action::RecordVote {
                coin: record.name.clone(),
            }]
        }
        Err(e) => {
            tracing::warn!(error = %e, "vote ignored");
            vec![]
        }
    }
}
