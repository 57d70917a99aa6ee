use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetProgressParams {
    #[schemars(description = "Reference date YYYY-MM-DD. Defaults to today.")]
    pub date: Option<String>,
}
