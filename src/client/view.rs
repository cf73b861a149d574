//! In-memory view model over one resource.

use super::error::ClientError;
use super::model::{InsertPosition, ViewItem};
use super::resource_client::ResourceClient;
use crate::resource::RecordId;
use chrono::{Local, NaiveDate};
use log::{debug, warn};
use serde_json::{Map, Value};

/// Where the items of a view came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    /// Nothing loaded yet.
    Pending,
    /// Items reflect the server.
    Live,
    /// The server could not be used; items are placeholder data or
    /// unsynchronized local changes.
    Degraded { reason: String },
}

/// List of items of one resource plus its load status.
///
/// Local mutations apply immediately and are never rolled back. The
/// `*_synced` variants additionally send the change to the server and
/// mark the view degraded when that fails.
#[derive(Debug, Clone)]
pub struct ResourceView<T: ViewItem> {
    client: ResourceClient,
    items: Vec<T>,
    status: ViewStatus,
}

impl<T: ViewItem> ResourceView<T> {
    /// Create an empty, pending view over `client`.
    pub fn new(client: ResourceClient) -> Self {
        Self {
            client,
            items: Vec::new(),
            status: ViewStatus::Pending,
        }
    }

    /// Create a view for `T`'s resource below `base_url`.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self::new(ResourceClient::new(base_url, T::RESOURCE))
    }

    /// Items in display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Whether the items come from the server.
    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    /// Shorthand for a [`ViewStatus::Degraded`] status.
    pub fn is_degraded(&self) -> bool {
        matches!(self.status, ViewStatus::Degraded { .. })
    }

    /// Look up an item by id.
    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Fetch the list. On any failure the placeholder data is shown and the
    /// view is marked degraded.
    pub async fn load(&mut self) -> &ViewStatus {
        match self.client.fetch_all::<T>().await {
            Ok(items) => {
                debug!("Loaded {} {} items", items.len(), T::RESOURCE);
                self.items = items;
                self.status = ViewStatus::Live;
            }
            Err(e) => {
                warn!(
                    "Loading {} failed, showing placeholder data: {}",
                    T::RESOURCE,
                    e
                );
                self.items = T::placeholder();
                self.status = ViewStatus::Degraded {
                    reason: e.to_string(),
                };
            }
        }
        &self.status
    }

    /// Add a new item from the template, dated today.
    pub fn add_local(&mut self) -> &T {
        let today = Local::now().date_naive();
        self.add_local_on(today)
    }

    pub(crate) fn add_local_on(&mut self, today: NaiveDate) -> &T {
        let item = T::template(self.next_local_id(), today);
        self.insert_local(item)
    }

    /// Insert an item at the resource's insert position.
    pub fn insert_local(&mut self, item: T) -> &T {
        match T::INSERT_POSITION {
            InsertPosition::Front => {
                self.items.insert(0, item);
                &self.items[0]
            }
            InsertPosition::Back => {
                self.items.push(item);
                let last = self.items.len() - 1;
                &self.items[last]
            }
        }
    }

    /// Set one field of an item; `false` if the item or field is unknown.
    pub fn update_field_local(&mut self, id: &RecordId, field: &str, value: &str) -> bool {
        self.items
            .iter_mut()
            .find(|item| item.id() == id)
            .is_some_and(|item| item.set_field(field, value))
    }

    /// Remove an item; `false` if it was not present.
    pub fn remove_local(&mut self, id: &RecordId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Add a template item locally, then create it on the server.
    ///
    /// On success the local item is replaced by the server's record, which
    /// carries the server-assigned id.
    pub async fn add_synced(&mut self) -> Result<&T, ClientError> {
        let local_id = self.add_local().id().clone();
        let partial = self
            .get(&local_id)
            .map(|item| item.to_partial())
            .unwrap_or_default();
        match self.client.create::<T>(&partial).await {
            Ok(created) => match self.items.iter().position(|item| item.id() == &local_id) {
                Some(index) => {
                    self.items[index] = created;
                    Ok(&self.items[index])
                }
                None => Ok(self.insert_local(created)),
            },
            Err(e) => Err(self.degrade(e)),
        }
    }

    /// Set a field locally, then send it to the server.
    pub async fn update_synced(
        &mut self,
        id: &RecordId,
        field: &str,
        value: &str,
    ) -> Result<(), ClientError> {
        self.update_field_local(id, field, value);
        let mut partial = Map::new();
        partial.insert(field.to_string(), Value::String(value.to_string()));
        match self.client.update::<Value>(id, &Value::Object(partial)).await {
            Ok(_) => Ok(()),
            Err(e) => Err(self.degrade(e)),
        }
    }

    /// Remove an item locally, then delete it on the server.
    pub async fn remove_synced(&mut self, id: &RecordId) -> Result<(), ClientError> {
        self.remove_local(id);
        match self.client.delete(id).await {
            Ok(()) => Ok(()),
            Err(e) => Err(self.degrade(e)),
        }
    }

    fn degrade(&mut self, error: ClientError) -> ClientError {
        warn!("Syncing {} failed: {}", T::RESOURCE, error);
        self.status = ViewStatus::Degraded {
            reason: error.to_string(),
        };
        error
    }

    /// Numeric ids for local items: the current time in milliseconds, bumped
    /// past any numeric id already in the list.
    fn next_local_id(&self) -> RecordId {
        let now = Local::now().timestamp_millis();
        let highest = self
            .items
            .iter()
            .filter_map(|item| match item.id() {
                RecordId::Number(n) => Some(*n),
                RecordId::Text(_) => None,
            })
            .max()
            .unwrap_or(i64::MIN);
        RecordId::Number(now.max(highest.saturating_add(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{EventItem, NewsItem};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn view<T: ViewItem>(items: Vec<T>) -> ResourceView<T> {
        let mut view = ResourceView::for_base_url("http://127.0.0.1:9");
        for item in items {
            view.insert_local(item);
        }
        view
    }

    #[test]
    fn test_new_view_is_pending() {
        let view: ResourceView<NewsItem> = ResourceView::for_base_url("http://localhost");
        assert_eq!(view.status(), &ViewStatus::Pending);
        assert!(view.items().is_empty());
    }

    #[test]
    fn test_news_prepends_events_append() {
        let mut news = view(NewsItem::placeholder());
        let added = news.add_local_on(today()).id().clone();
        assert_eq!(news.items()[0].id(), &added);
        assert_eq!(news.items()[0].date, "2025-06-01");

        let mut events = view(EventItem::placeholder());
        let added = events.add_local_on(today()).id().clone();
        assert_eq!(events.items().last().unwrap().id(), &added);
        assert_eq!(events.items().len(), 5);
    }

    #[test]
    fn test_local_ids_are_unique() {
        let mut events: ResourceView<EventItem> = view(Vec::new());
        let a = events.add_local_on(today()).id().clone();
        let b = events.add_local_on(today()).id().clone();
        assert_ne!(a, b);
    }

    #[test]
    fn test_update_and_remove_local() {
        let mut events = view(EventItem::placeholder());
        let id = RecordId::Number(3);

        assert!(events.update_field_local(&id, "time", "15:30"));
        assert_eq!(events.get(&id).unwrap().time, "15:30");
        assert!(!events.update_field_local(&id, "content", "x"));
        assert!(!events.update_field_local(&RecordId::Number(99), "time", "1"));

        assert!(events.remove_local(&id));
        assert!(!events.remove_local(&id));
        assert_eq!(events.items().len(), 3);
    }
}
