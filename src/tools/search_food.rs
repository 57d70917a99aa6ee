use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchFoodParams {
    #[schemars(description = "Keyword query over food descriptions and brands")]
    pub query: Option<String>,

    #[schemars(description = "Barcode (GTIN/UPC) for an exact lookup instead of a keyword search")]
    pub barcode: Option<String>,

    #[schemars(description = "Maximum number of results. Defaults from config.")]
    pub limit: Option<usize>,
}
