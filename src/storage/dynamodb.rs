//! DynamoDB storage backend.
//!
//! One DynamoDB table per resource, partition key `id` (string). Records are
//! converted between `serde_json::Value` and DynamoDB items with
//! `serde_dynamo`.
//!
//! Scans page through the table with `ExclusiveStartKey` until the requested
//! limit is exceeded, so a list never reads more than one page past the
//! ceiling.

use crate::storage::{
    AttributeChanges, KEY_ATTRIBUTE, ScanPage, StorageError, StorageKey, StorageProvider,
};
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue, Select};
use log::{debug, trace};
use serde_json::{Value, json};
use std::collections::HashMap;

type Item = HashMap<String, AttributeValue>;

/// Storage provider backed by DynamoDB tables.
#[derive(Debug, Clone)]
pub struct DynamoDbStorage {
    client: Client,
}

impl DynamoDbStorage {
    /// Create a storage backend from a configured DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a storage backend from the default AWS configuration chain.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config))
    }

    fn key_value(key: &StorageKey) -> AttributeValue {
        AttributeValue::S(key.id().to_string())
    }

    fn to_item(data: &Value) -> Result<Item, StorageError> {
        serde_dynamo::to_item(data)
            .map_err(|e| StorageError::serialization(format!("Failed to encode item: {}", e)))
    }

    fn from_item(item: Item) -> Result<Value, StorageError> {
        serde_dynamo::from_item(item)
            .map_err(|e| StorageError::serialization(format!("Failed to decode item: {}", e)))
    }

    fn sdk_error<E>(operation: &str, error: E) -> StorageError
    where
        E: std::error::Error + 'static,
    {
        StorageError::network(format!(
            "DynamoDB {} failed: {}",
            operation,
            DisplayErrorContext(&error)
        ))
    }

    /// Build a `SET ... REMOVE ...` update expression with placeholder names.
    fn update_expression(
        changes: &AttributeChanges,
    ) -> Result<(String, HashMap<String, String>, HashMap<String, AttributeValue>), StorageError>
    {
        let mut names = HashMap::new();
        let mut values = HashMap::new();
        let mut assignments = Vec::new();
        let mut removals = Vec::new();

        for (index, (name, value)) in changes
            .set
            .iter()
            .filter(|(name, _)| name.as_str() != KEY_ATTRIBUTE)
            .enumerate()
        {
            let name_placeholder = format!("#s{}", index);
            let value_placeholder = format!(":s{}", index);
            let attribute: AttributeValue = serde_dynamo::to_attribute_value(value).map_err(|e| {
                StorageError::serialization(format!("Failed to encode attribute '{}': {}", name, e))
            })?;
            assignments.push(format!("{} = {}", name_placeholder, value_placeholder));
            names.insert(name_placeholder, name.clone());
            values.insert(value_placeholder, attribute);
        }

        for (index, name) in changes
            .remove
            .iter()
            .filter(|name| name.as_str() != KEY_ATTRIBUTE)
            .enumerate()
        {
            let name_placeholder = format!("#r{}", index);
            removals.push(name_placeholder.clone());
            names.insert(name_placeholder, name.clone());
        }

        let mut expression = String::new();
        if !assignments.is_empty() {
            expression.push_str("SET ");
            expression.push_str(&assignments.join(", "));
        }
        if !removals.is_empty() {
            if !expression.is_empty() {
                expression.push(' ');
            }
            expression.push_str("REMOVE ");
            expression.push_str(&removals.join(", "));
        }

        Ok((expression, names, values))
    }
}

impl StorageProvider for DynamoDbStorage {
    type Error = StorageError;

    async fn put(&self, key: StorageKey, data: Value) -> Result<Value, Self::Error> {
        let item = Self::to_item(&data)?;
        self.client
            .put_item()
            .table_name(key.table())
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| Self::sdk_error("PutItem", e))?;

        trace!("Put item {}", key);
        Ok(data)
    }

    async fn get(&self, key: StorageKey) -> Result<Option<Value>, Self::Error> {
        let output = self
            .client
            .get_item()
            .table_name(key.table())
            .key(KEY_ATTRIBUTE, Self::key_value(&key))
            .send()
            .await
            .map_err(|e| Self::sdk_error("GetItem", e))?;

        output.item.map(Self::from_item).transpose()
    }

    async fn update(&self, key: StorageKey, changes: AttributeChanges) -> Result<Value, Self::Error> {
        let (expression, names, values) = Self::update_expression(&changes)?;

        if expression.is_empty() {
            // An empty update expression is rejected by DynamoDB; keep the
            // upsert contract by hand.
            return match self.get(key.clone()).await? {
                Some(existing) => Ok(existing),
                None => self.put(key.clone(), json!({ KEY_ATTRIBUTE: key.id() })).await,
            };
        }

        debug!("UpdateItem {} with '{}'", key, expression);

        let output = self
            .client
            .update_item()
            .table_name(key.table())
            .key(KEY_ATTRIBUTE, Self::key_value(&key))
            .update_expression(expression)
            .set_expression_attribute_names(Some(names))
            .set_expression_attribute_values(if values.is_empty() {
                None
            } else {
                Some(values)
            })
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| Self::sdk_error("UpdateItem", e))?;

        match output.attributes {
            Some(attributes) => Self::from_item(attributes),
            None => Ok(json!({ KEY_ATTRIBUTE: key.id() })),
        }
    }

    async fn delete(&self, key: StorageKey) -> Result<bool, Self::Error> {
        let output = self
            .client
            .delete_item()
            .table_name(key.table())
            .key(KEY_ATTRIBUTE, Self::key_value(&key))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| Self::sdk_error("DeleteItem", e))?;

        Ok(output.attributes.is_some_and(|attributes| !attributes.is_empty()))
    }

    async fn scan(&self, table: &str, limit: usize) -> Result<ScanPage, Self::Error> {
        let mut items = Vec::new();
        let mut start_key: Option<Item> = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(table)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| Self::sdk_error("Scan", e))?;

            for item in output.items.unwrap_or_default() {
                if items.len() == limit {
                    return Ok(ScanPage {
                        items,
                        truncated: true,
                    });
                }
                items.push(Self::from_item(item)?);
            }

            match output.last_evaluated_key {
                Some(next) if !next.is_empty() => start_key = Some(next),
                _ => break,
            }
        }

        Ok(ScanPage {
            items,
            truncated: false,
        })
    }

    async fn count(&self, table: &str) -> Result<usize, Self::Error> {
        let mut total = 0usize;
        let mut start_key: Option<Item> = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(table)
                .select(Select::Count)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| Self::sdk_error("Scan", e))?;

            total += usize::try_from(output.count).unwrap_or(0);

            match output.last_evaluated_key {
                Some(next) if !next.is_empty() => start_key = Some(next),
                _ => break,
            }
        }

        Ok(total)
    }

    async fn clear(&self) -> Result<(), Self::Error> {
        Err(StorageError::configuration(
            "clearing DynamoDB tables is not supported; drop and recreate the tables instead",
        ))
    }
}
