//! The coin rows: vote count, coin name, and a shill button per row.

use crate::app::state::AppState;
use crate::app::store::VoteStore;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use unicode_width::UnicodeWidthStr;

pub const BUTTON_LABEL: &str = "[ Click to shill ]";

/// Display model for one coin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinRow {
    pub votes: u64,
    pub name: String,
    pub selected: bool,
}

/// Where a mouse click landed inside the coin list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHit {
    Button(usize),
    Row(usize),
}

pub fn coin_rows(store: &VoteStore, selected: usize) -> Vec<CoinRow> {
    store
        .records()
        .iter()
        .enumerate()
        .map(|(index, record)| CoinRow {
            votes: record.votes,
            name: record.name.clone(),
            selected: index == selected,
        })
        .collect()
}

fn list_block() -> Block<'static> {
    Block::default()
        .title(" Coins ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border())
}

fn count_text(votes: u64) -> String {
    format!(" {:>5}  ", votes)
}

/// Column within a row where the button starts. The name always keeps at
/// least one column of gap, so on narrow lists the button is pushed past the
/// right edge.
fn button_offset(count_width: usize, name_width: usize, width: usize) -> usize {
    (count_width + name_width + 1).max(width.saturating_sub(BUTTON_LABEL.width()))
}

/// First visible row when the list is scrolled so `selected` stays on screen.
fn scroll_offset(selected: usize, height: usize) -> usize {
    (selected + 1).saturating_sub(height)
}

fn widest_name(store: &VoteStore) -> usize {
    store.records().iter().map(|r| r.name.width()).max().unwrap_or(0)
}

fn row_line(row: &CoinRow, name_width: usize, width: usize) -> Line<'static> {
    let count = count_text(row.votes);
    let name_pad = name_width.saturating_sub(row.name.width());
    let name = format!("{}{}", row.name, " ".repeat(name_pad));
    let gap = button_offset(count.width(), name_width, width) - count.width() - name_width;

    Line::from(vec![
        Span::styled(count, Theme::vote_count()),
        Span::styled(name, Theme::coin_name()),
        Span::raw(" ".repeat(gap)),
        Span::styled(BUTTON_LABEL, Theme::button()),
    ])
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = list_block();
    let inner = block.inner(area);
    let rows = coin_rows(&state.store, state.selected);
    let name_width = widest_name(&state.store);

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let item = ListItem::new(row_line(row, name_width, inner.width as usize));
            if row.selected {
                item.style(Theme::row_selected())
            } else {
                item
            }
        })
        .collect();

    let mut list_state = ListState::default()
        .with_offset(scroll_offset(state.selected, inner.height as usize))
        .with_selected(Some(state.selected));
    frame.render_stateful_widget(List::new(items).block(block), area, &mut list_state);
}

/// Map a terminal cell to the coin row under it, following the same scroll
/// offset and button placement as [`render`]. A button that is cut off by
/// the list edge is not clickable.
pub fn hit_test(
    viewport: Rect,
    column: u16,
    row: u16,
    store: &VoteStore,
    selected: usize,
) -> Option<RowHit> {
    let area = layout::compute_layout(viewport).coin_list;
    let inner = list_block().inner(area);
    if !inner.contains(Position::new(column, row)) {
        return None;
    }

    let index = scroll_offset(selected, inner.height as usize) + (row - inner.y) as usize;
    let record = store.get(index)?;

    let width = inner.width as usize;
    let start = button_offset(count_text(record.votes).width(), widest_name(store), width);
    let button_visible = start + BUTTON_LABEL.width() <= width;
    if button_visible && (column - inner.x) as usize >= start {
        Some(RowHit::Button(index))
    } else {
        Some(RowHit::Row(index))
    }
}
