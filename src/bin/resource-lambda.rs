//! Lambda entry point serving the news and events resources from DynamoDB.
//!
//! Environment:
//!
//! * `NEWS_TABLE`, `EVENTS_TABLE` - table names
//! * `MAX_LIST_ITEMS` - list ceiling (default 1000)
//! * `API_PATH_PREFIX` - path prefix stripped before routing, e.g. `/api`
//! * `RUST_LOG` - log filter (default `info`)

use kleingarten_server::http::HttpFrontDoor;
use kleingarten_server::lambda::function_handler;
use kleingarten_server::operation_handler::CrudOperationHandler;
use kleingarten_server::providers::StandardResourceProvider;
use kleingarten_server::resource_handlers::{ResourceTables, default_resources};
use kleingarten_server::storage::DynamoDbStorage;
use kleingarten_server::{CrudServerBuilder, ServerConfig};
use lambda_http::{Error, run, service_fn};
use log::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let tables = ResourceTables::from_env();
    let config = ServerConfig::from_env()?;
    info!(
        "Serving news from '{}' and events from '{}'",
        tables.news, tables.events
    );

    let storage = DynamoDbStorage::from_env().await;
    let server = CrudServerBuilder::new(StandardResourceProvider::new(storage))
        .with_config(config)
        .with_resources(default_resources(&tables)?)
        .build()?;
    let front_door = HttpFrontDoor::new(CrudOperationHandler::new(server));

    run(service_fn(|event| function_handler(&front_door, event))).await
}
