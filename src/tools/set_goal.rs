use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SetGoalParams {
    #[schemars(description = "Macro key: 'calories', 'protein', 'carbs', or 'fat'")]
    pub key: String,

    #[schemars(description = "Daily target (kcal for calories, grams otherwise). Must be positive.")]
    pub target: f64,

    #[schemars(
        description = "Goal direction: 'under' (stay at or below target) or 'over' (reach at least target). Defaults to 'under' for calories/carbs/fat and 'over' for protein."
    )]
    pub direction: Option<String>,

    #[schemars(description = "Percent grace band beyond the target on the wrong side, 0-100. Defaults to 0.")]
    pub tolerance: Option<f64>,
}
