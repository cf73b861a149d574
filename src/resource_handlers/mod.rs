//! Resource definitions for the club website.
//!
//! This module provides factory functions for the two resources the server
//! exposes, plus the table configuration they are stored in.

pub mod events;
pub mod news;

pub use events::events_resource;
pub use news::news_resource;

use crate::error::CrudResult;
use crate::resource::ResourceDefinition;
use std::env;

/// Default table holding news items.
pub const DEFAULT_NEWS_TABLE: &str = "kleingartenverein-news";
/// Default table holding events.
pub const DEFAULT_EVENTS_TABLE: &str = "kleingartenverein-events";

/// Table names of the registered resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceTables {
    pub news: String,
    pub events: String,
}

impl Default for ResourceTables {
    fn default() -> Self {
        Self {
            news: DEFAULT_NEWS_TABLE.to_string(),
            events: DEFAULT_EVENTS_TABLE.to_string(),
        }
    }
}

impl ResourceTables {
    /// Read `NEWS_TABLE` and `EVENTS_TABLE`, falling back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            news: lookup("NEWS_TABLE")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.news),
            events: lookup("EVENTS_TABLE")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.events),
        }
    }
}

/// Build the news and events definitions for the given tables.
pub fn default_resources(tables: &ResourceTables) -> CrudResult<Vec<ResourceDefinition>> {
    Ok(vec![news_resource(&tables.news)?, events_resource(&tables.events)?])
}
