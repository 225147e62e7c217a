//! Selectable options fetched from the option API

use serde::{Deserialize, Serialize};

/// Raw list item as returned by `GET country` / `GET city`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiOption {
    pub name: String,
    #[serde(default)]
    pub name_ptbr: Option<String>,
}

/// Which string is recorded when an option is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectValue {
    /// Record the display label (countries)
    Label,
    /// Record the canonical name (cities)
    Canonical,
}

/// A country or city the user can pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub canonical_name: String,
    pub localized_name: Option<String>,
    pub value_kind: SelectValue,
}

impl SelectOption {
    pub fn from_api(option: ApiOption, value_kind: SelectValue) -> Self {
        Self {
            canonical_name: option.name,
            localized_name: option.name_ptbr.filter(|s| !s.is_empty()),
            value_kind,
        }
    }

    /// Label shown in the picker; falls back to the canonical name
    pub fn label(&self) -> &str {
        self.localized_name.as_deref().unwrap_or(&self.canonical_name)
    }

    /// Value stored in the selected list
    pub fn value(&self) -> &str {
        match self.value_kind {
            SelectValue::Label => self.label(),
            SelectValue::Canonical => &self.canonical_name,
        }
    }
}

/// Convert API items into options sorted by display label.
///
/// Ordering is a plain case-sensitive comparison of the labels, so "Zâmbia"
/// sorts after "Brasil" and uppercase sorts before lowercase.
pub fn sorted_options(items: Vec<ApiOption>, value_kind: SelectValue) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = items
        .into_iter()
        .map(|item| SelectOption::from_api(item, value_kind))
        .collect();
    options.sort_by(|a, b| a.label().cmp(b.label()));
    options
}

/// Load state of one remote list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OptionList {
    #[default]
    Loading,
    Loaded(Vec<SelectOption>),
    /// Fetch failed or timed out
    Unavailable(String),
}

impl OptionList {
    pub fn options(&self) -> &[SelectOption] {
        match self {
            OptionList::Loaded(options) => options,
            OptionList::Loading | OptionList::Unavailable(_) => &[],
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, OptionList::Loaded(_))
    }
}

/// The two remote lists the form depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Countries,
    Cities,
}

impl OptionKind {
    pub fn value_kind(self) -> SelectValue {
        match self {
            OptionKind::Countries => SelectValue::Label,
            OptionKind::Cities => SelectValue::Canonical,
        }
    }

    /// Path segment of the list endpoint
    pub fn endpoint(self) -> &'static str {
        match self {
            OptionKind::Countries => "country",
            OptionKind::Cities => "city",
        }
    }
}
