//! Option API client module for HTTP communication

mod client;
mod traits;

pub use client::ApiClient;
pub use traits::OptionProvider;

#[cfg(test)]
pub use traits::MockOptionProvider;
