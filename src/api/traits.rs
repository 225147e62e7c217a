//! Trait abstraction for the option API to enable mocking in tests

use crate::state::{ApiOption, OptionKind};
use anyhow::Result;
use async_trait::async_trait;

/// Source of the country and city lists
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OptionProvider: Send + Sync {
    /// Fetch one list, unsorted, as the API returns it
    async fn list_options(&self, kind: OptionKind) -> Result<Vec<ApiOption>>;
}
