//! Client side of the resource server.
//!
//! [`ResourceClient`] speaks the four HTTP operations of one resource.
//! [`ResourceView`] holds the items a page shows, falls back to placeholder
//! data when the server cannot be used, and says so through [`ViewStatus`].
//!
//! ```rust,no_run
//! use kleingarten_server::client::{EventItem, ResourceView, ViewStatus};
//!
//! # async fn example() {
//! let mut events: ResourceView<EventItem> = ResourceView::for_base_url("https://verein.example/api");
//! if let ViewStatus::Degraded { reason } = events.load().await {
//!     eprintln!("showing sample events: {}", reason);
//! }
//! events.add_local();
//! # }
//! ```

pub mod error;
pub mod fallback;
pub mod model;
pub mod resource_client;
pub mod view;

pub use error::ClientError;
pub use model::{EventItem, InsertPosition, NewsItem, ViewItem};
pub use resource_client::ResourceClient;
pub use view::{ResourceView, ViewStatus};
