//! Multi-select picker state

use crate::state::SelectOption;

/// Cursor and current selection of a multi-select input.
///
/// Options are owned by the surrounding list state; this only tracks what the
/// user highlighted and picked.
#[derive(Debug, Clone)]
pub struct MultiSelect {
    pub label: String,
    pub placeholder: String,
    pub cursor: usize,
    pub selected: Vec<String>,
}

impl MultiSelect {
    pub fn new(label: &str, placeholder: &str) -> Self {
        Self {
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            cursor: 0,
            selected: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, option: &SelectOption) -> bool {
        self.selected.iter().any(|v| v == option.value())
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, option_count: usize) {
        if option_count > 0 && self.cursor < option_count - 1 {
            self.cursor += 1;
        }
    }

    /// Toggle the highlighted option.
    ///
    /// The selection is replaced by a new list rather than edited in place;
    /// picks keep the order in which they were made.
    pub fn toggle(&mut self, options: &[SelectOption]) {
        let Some(option) = options.get(self.cursor) else {
            return;
        };
        let value = option.value();
        let next: Vec<String> = if self.is_selected(option) {
            self.selected
                .iter()
                .filter(|v| v.as_str() != value)
                .cloned()
                .collect()
        } else {
            self.selected
                .iter()
                .cloned()
                .chain(std::iter::once(value.to_string()))
                .collect()
        };
        self.replace_selection(next);
    }

    pub fn replace_selection(&mut self, selected: Vec<String>) {
        self.selected = selected;
    }
}
