use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteMealParams {
    #[schemars(description = "Id of the meal to delete (from list_meals)")]
    pub id: String,
}
