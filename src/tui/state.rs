//! Shared navigation state for list-backed views.

use super::constants::PAGE_SIZE;

/// Trait for list-based navigation state.
pub trait ListNavigation {
    /// Get the current selection index.
    fn selected(&self) -> usize;

    /// Set the selection index.
    fn set_selected(&mut self, idx: usize);

    /// Get the total number of items.
    fn total(&self) -> usize;

    /// Set the total number of items.
    fn set_total(&mut self, total: usize);

    /// Move selection to the next item.
    fn select_next(&mut self) {
        let total = self.total();
        let selected = self.selected();
        if total > 0 && selected < total.saturating_sub(1) {
            self.set_selected(selected + 1);
        }
    }

    /// Move selection to the previous item.
    fn select_prev(&mut self) {
        let selected = self.selected();
        if selected > 0 {
            self.set_selected(selected - 1);
        }
    }

    /// Ensure selection is within valid bounds.
    fn clamp_selection(&mut self) {
        let total = self.total();
        let selected = self.selected();
        if total == 0 {
            self.set_selected(0);
        } else if selected >= total {
            self.set_selected(total.saturating_sub(1));
        }
    }

    /// Move selection up by a page.
    fn page_up(&mut self) {
        let selected = self.selected();
        self.set_selected(selected.saturating_sub(PAGE_SIZE));
    }

    /// Move selection down by a page.
    fn page_down(&mut self) {
        let total = self.total();
        let selected = self.selected();
        if total > 0 {
            self.set_selected((selected + PAGE_SIZE).min(total.saturating_sub(1)));
        }
    }

    /// Move to the first item.
    fn go_first(&mut self) {
        self.set_selected(0);
    }

    /// Move to the last item.
    fn go_last(&mut self) {
        let total = self.total();
        if total > 0 {
            self.set_selected(total.saturating_sub(1));
        }
    }
}

/// Base state for simple list navigation with a scroll offset.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub selected: usize,
    pub total: usize,
    pub scroll_offset: usize,
}

impl ListState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the selection visible inside a viewport of the given height,
    /// returning the updated scroll offset.
    pub fn scroll_into_view(&mut self, viewport_height: usize) -> usize {
        if viewport_height == 0 {
            return self.scroll_offset;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + viewport_height {
            self.scroll_offset = self.selected + 1 - viewport_height;
        }
        self.scroll_offset
    }
}

impl ListNavigation for ListState {
    fn selected(&self) -> usize {
        self.selected
    }

    fn set_selected(&mut self, idx: usize) {
        self.selected = idx;
    }

    fn total(&self) -> usize {
        self.total
    }

    fn set_total(&mut self, total: usize) {
        self.total = total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_navigation_bounds() {
        let mut state = ListState {
            total: 10,
            ..Default::default()
        };

        state.select_prev();
        assert_eq!(state.selected(), 0);

        state.go_last();
        assert_eq!(state.selected(), 9);
        state.select_next();
        assert_eq!(state.selected(), 9);

        state.go_first();
        state.page_down();
        assert_eq!(state.selected(), 9);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut state = ListState {
            selected: 8,
            total: 10,
            ..Default::default()
        };
        state.set_total(3);
        state.clamp_selection();
        assert_eq!(state.selected(), 2);

        state.set_total(0);
        state.clamp_selection();
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_scroll_into_view() {
        let mut state = ListState {
            selected: 15,
            total: 30,
            scroll_offset: 0,
        };
        assert_eq!(state.scroll_into_view(10), 6);

        state.selected = 2;
        assert_eq!(state.scroll_into_view(10), 2);

        // Already visible: offset unchanged
        state.selected = 5;
        assert_eq!(state.scroll_into_view(10), 2);
    }
}
