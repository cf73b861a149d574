//! Client-side item types.

use crate::resource::RecordId;
use crate::resource_handlers::events::DEFAULT_EVENT_TIME;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Where a locally added item goes in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Front,
    Back,
}

/// An item shown in a [`ResourceView`](super::ResourceView).
pub trait ViewItem: Clone + Serialize + DeserializeOwned + Send {
    /// Resource name on the server.
    const RESOURCE: &'static str;
    /// Where [`ResourceView::add_local`](super::ResourceView::add_local) puts new items.
    const INSERT_POSITION: InsertPosition;

    fn id(&self) -> &RecordId;

    fn set_id(&mut self, id: RecordId);

    /// Set an editable field; returns `false` for unknown fields.
    fn set_field(&mut self, field: &str, value: &str) -> bool;

    /// Editable fields as a partial record, without `id` and `createdAt`.
    fn to_partial(&self) -> Value;

    /// A fresh item as offered by the "add" action.
    fn template(id: RecordId, today: NaiveDate) -> Self;

    /// Data shown when the server cannot be reached.
    fn placeholder() -> Vec<Self>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventItem {
    pub id: RecordId,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub time: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ViewItem for NewsItem {
    const RESOURCE: &'static str = "news";
    const INSERT_POSITION: InsertPosition = InsertPosition::Front;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "title" => &mut self.title,
            "date" => &mut self.date,
            "content" => &mut self.content,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }

    fn to_partial(&self) -> Value {
        json!({
            "title": self.title,
            "date": self.date,
            "content": self.content,
        })
    }

    fn template(id: RecordId, today: NaiveDate) -> Self {
        Self {
            id,
            title: "Neue Nachricht".to_string(),
            date: today.format("%Y-%m-%d").to_string(),
            content: "Inhalt hier eingeben...".to_string(),
            created_at: None,
        }
    }

    fn placeholder() -> Vec<Self> {
        super::fallback::news_placeholder()
    }
}

impl ViewItem for EventItem {
    const RESOURCE: &'static str = "events";
    const INSERT_POSITION: InsertPosition = InsertPosition::Back;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "title" => &mut self.title,
            "date" => &mut self.date,
            "time" => &mut self.time,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }

    fn to_partial(&self) -> Value {
        json!({
            "title": self.title,
            "date": self.date,
            "time": self.time,
        })
    }

    fn template(id: RecordId, today: NaiveDate) -> Self {
        Self {
            id,
            date: today.format("%d.%m.%Y").to_string(),
            title: "Neuer Termin".to_string(),
            time: DEFAULT_EVENT_TIME.to_string(),
            created_at: None,
        }
    }

    fn placeholder() -> Vec<Self> {
        super::fallback::events_placeholder()
    }
}
