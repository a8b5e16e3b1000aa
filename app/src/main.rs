mod args;
mod config;
mod yaml;

use anyhow::{bail, Result};
use args::{Args, Command};
use cdc::schema::MySqlConnection;
use cdc::{create_table_source, ConnectorFamily, SchemaResolver, TableSchemaCache};
use clap::Parser;
use log::info;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    info!("Loading table source from {}", args.config);
    let config = yaml::load_config(&args.config)?;
    let descriptor = create_table_source(&config.options, config.physical_schema)?;

    match args.command {
        Command::Validate => println!("{:#?}", descriptor),
        Command::Schema { timeout_secs } => {
            if descriptor.connector != ConnectorFamily::MySQL {
                bail!(
                    "schema resolution is only supported for '{}' sources",
                    ConnectorFamily::MySQL
                );
            }

            let connection = Arc::new(MySqlConnection::new(&descriptor));
            let mut cache = TableSchemaCache::new(SchemaResolver::new(connection.clone()));
            if let Some(secs) = timeout_secs {
                cache = cache.with_timeout(Duration::from_secs(secs));
            }

            let result = cache.get_schema(&descriptor.table_id()).await;
            connection.disconnect().await?;

            let schema = result?;
            println!("{}", serde_json::to_string_pretty(schema.as_ref())?);
        }
    }

    Ok(())
}
