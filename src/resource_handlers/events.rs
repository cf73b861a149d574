//! Events resource definition.

use crate::error::CrudResult;
use crate::resource::{DateStyle, ResourceDefinition, ResourceDefinitionBuilder};

/// Default start time of a new event.
pub const DEFAULT_EVENT_TIME: &str = "10:00";

/// Create the events resource stored in `table_name`.
///
/// Fields: `title`, `date` (today, `DD.MM.YYYY`), `time` (`10:00`), `createdAt`.
pub fn events_resource(table_name: &str) -> CrudResult<ResourceDefinition> {
    ResourceDefinitionBuilder::new("events", table_name)
        .with_text_field("title")
        .with_date_field("date", DateStyle::German)
        .with_fixed_field("time", DEFAULT_EVENT_TIME)
        .with_created_at("createdAt")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::FieldDefault;

    #[test]
    fn test_events_resource_fields() {
        let events = events_resource("events-table").unwrap();

        assert_eq!(events.name(), "events");
        assert_eq!(
            events.field("time").map(|f| &f.default),
            Some(&FieldDefault::Fixed("10:00".to_string()))
        );
        assert_eq!(
            events.field("date").map(|f| &f.default),
            Some(&FieldDefault::CurrentDate(DateStyle::German))
        );
        assert!(!events.field("createdAt").unwrap().updatable);
    }
}
