use crate::app::store::{CoinRecord, VoteError, VoteStore};
use crate::config::AppConfig;
use ratatui::layout::Rect;

#[derive(Debug)]
pub struct AppState {
    pub store: VoteStore,
    pub selected: usize,
    pub title: String,
    /// Last known terminal area, used to map mouse clicks to rows.
    pub viewport: Rect,
    pub last_vote: Option<String>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: &AppConfig, viewport: Rect) -> Self {
        Self {
            store: VoteStore::new(),
            selected: 0,
            title: config.ui.title.clone(),
            viewport,
            last_vote: None,
            should_quit: false,
            dirty: true,
        }
    }

    /// Replace the store with the snapshot that has one more vote at `index`.
    pub fn vote(&mut self, index: usize) -> Result<&CoinRecord, VoteError> {
        self.store = self.store.increment(index)?;
        self.selected = index;
        self.dirty = true;
        let record = &self.store.records()[index];
        self.last_vote = Some(record.name.clone());
        Ok(record)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.store.len() {
            self.selected += 1;
            self.dirty = true;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.dirty = true;
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.store.len() && index != self.selected {
            self.selected = index;
            self.dirty = true;
        }
    }

    pub fn status_line(&self) -> String {
        let mut s = format!("Total shills: {}", self.store.total_votes());
        if let Some(ref coin) = self.last_vote {
            s.push_str(&format!(" | Last: {}", coin));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(&AppConfig::default(), Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn test_vote_updates_snapshot_and_selection() {
        let mut s = state();
        s.dirty = false;
        let name = s.vote(2).unwrap().name.clone();
        assert_eq!(name, "Dash");
        assert_eq!(s.selected, 2);
        assert!(s.dirty);
        assert_eq!(s.store.get(2).unwrap().votes, 1);
        assert_eq!(s.status_line(), "Total shills: 1 | Last: Dash");
    }

    #[test]
    fn test_failed_vote_leaves_state() {
        let mut s = state();
        s.selected = 4;
        s.dirty = false;
        assert!(s.vote(99).is_err());
        assert_eq!(s.selected, 4);
        assert!(!s.dirty);
        assert_eq!(s.store.total_votes(), 0);
        assert_eq!(s.last_vote, None);
    }

    #[test]
    fn test_selection_bounds() {
        let mut s = state();
        s.select_prev();
        assert_eq!(s.selected, 0);
        for _ in 0..20 {
            s.select_next();
        }
        assert_eq!(s.selected, 6);
        s.select(10);
        assert_eq!(s.selected, 6);
        s.select(3);
        assert_eq!(s.selected, 3);
    }
}
