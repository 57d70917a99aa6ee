use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListMealsParams {
    #[schemars(description = "Calendar date YYYY-MM-DD. Defaults to today.")]
    pub date: Option<String>,
}
