use cdc::PhysicalSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Deserialize, Serialize, Debug)]
pub struct AppConfig {
    pub options: HashMap<String, String>,
    #[serde(default)]
    pub physical_schema: PhysicalSchema,
}
