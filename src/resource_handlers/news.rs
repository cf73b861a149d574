//! News resource definition.

use crate::error::CrudResult;
use crate::resource::{DateStyle, ResourceDefinition, ResourceDefinitionBuilder};

/// Create the news resource stored in `table_name`.
///
/// Fields: `title`, `date` (today, `YYYY-MM-DD`), `content`, `createdAt`.
pub fn news_resource(table_name: &str) -> CrudResult<ResourceDefinition> {
    ResourceDefinitionBuilder::new("news", table_name)
        .with_text_field("title")
        .with_date_field("date", DateStyle::Iso)
        .with_text_field("content")
        .with_created_at("createdAt")
        .build()
}
