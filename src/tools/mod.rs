pub mod delete_meal;
pub mod get_progress;
pub mod list_meals;
pub mod log_meal;
pub mod nutrition_stats;
pub mod search_food;
pub mod set_goal;

use delete_meal::DeleteMealParams;
use get_progress::GetProgressParams;
use list_meals::ListMealsParams;
use log_meal::LogMealParams;
use nutrition_stats::NutritionStatsParams;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use rusqlite::Connection;
use search_food::SearchFoodParams;
use set_goal::SetGoalParams;
use std::sync::{Arc, Mutex};

use crate::config::NoshConfig;
use crate::food;
use crate::tracker;
use crate::tracker::types::{Direction, MacroKey, Nutrients};

/// The nosh MCP tool handler. Holds shared state (db connection, config)
/// and exposes all MCP tools via the `#[tool_router]` macro.
#[derive(Clone)]
pub struct NoshTools {
    tool_router: ToolRouter<Self>,
    db: Arc<Mutex<Connection>>,
    config: Arc<NoshConfig>,
}

/// Resolve an optional `YYYY-MM-DD` parameter, defaulting to today.
fn resolve_date(input: Option<&str>) -> Result<chrono::NaiveDate, String> {
    match input {
        Some(s) => tracker::parse_day(s).map_err(|e| e.to_string()),
        None => Ok(tracker::today()),
    }
}

impl NoshTools {
    /// Run a closure against the shared connection off the async runtime.
    async fn with_db<T, F>(&self, f: F) -> Result<T, String>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> anyhow::Result<T> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || {
            let mut conn = db
                .lock()
                .map_err(|e| anyhow::anyhow!("db lock poisoned: {e}"))?;
            f(&mut conn)
        })
        .await
        .map_err(|e| format!("db task failed: {e}"))?
        .map_err(|e| format!("{e:#}"))
    }
}

#[tool_router]
impl NoshTools {
    pub fn new(db: Arc<Mutex<Connection>>, config: Arc<NoshConfig>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            db,
            config,
        }
    }

    /// Log a meal into the ledger.
    #[tool(description = "Log a meal with explicit nutrient values, or from the food database via food_id/barcode scaled by quantity_g. Dates default to today.")]
    async fn log_meal(
        &self,
        Parameters(params): Parameters<LogMealParams>,
    ) -> Result<String, String> {
        let day = resolve_date(params.date.as_deref())?;

        if params.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }

        let explicit = Nutrients {
            calories: params.calories,
            protein: params.protein,
            carbs: params.carbs,
            fat: params.fat,
        };
        let from_food_db = params.food_id.is_some() || params.barcode.is_some();
        if from_food_db && !explicit.is_empty() {
            return Err("provide either explicit nutrient values or a food reference, not both".into());
        }
        if let Some(qty) = params.quantity_g {
            if !from_food_db {
                return Err("quantity_g requires food_id or barcode".into());
            }
            if qty <= 0.0 {
                return Err("quantity_g must be positive".into());
            }
        }

        tracing::info!(name = %params.name, day = %day, from_food_db, "log_meal called");

        let name = params.name;
        let food_id = params.food_id;
        let barcode = params.barcode;
        let quantity = params.quantity_g.unwrap_or(100.0);

        let meal = self
            .with_db(move |conn| {
                let nutrients = if from_food_db {
                    let found = match (food_id, barcode.as_deref()) {
                        (Some(id), _) => food::search::food_by_id(conn, id)?,
                        (None, Some(code)) => food::search::food_by_barcode(conn, code)?,
                        (None, None) => anyhow::bail!("food reference missing"),
                    };
                    let food = found.ok_or_else(|| anyhow::anyhow!("food not found"))?;
                    food.nutrients_for_quantity(quantity)
                } else {
                    explicit
                };
                tracker::log::log_meal(conn, &name, &nutrients, day)
            })
            .await?;

        tracing::info!(id = %meal.id, "meal logged");
        serde_json::to_string(&meal).map_err(|e| format!("serialization failed: {e}"))
    }

    /// List meals logged for a day.
    #[tool(description = "List the meals logged for a date (defaults to today), with their nutrient values and ids.")]
    async fn list_meals(
        &self,
        Parameters(params): Parameters<ListMealsParams>,
    ) -> Result<String, String> {
        let day = resolve_date(params.date.as_deref())?;
        tracing::info!(day = %day, "list_meals called");

        let meals = self
            .with_db(move |conn| tracker::log::meals_for_day(conn, day))
            .await?;

        serde_json::to_string(&serde_json::json!({
            "date": day.format("%Y-%m-%d").to_string(),
            "mealCount": meals.len(),
            "meals": meals,
        }))
        .map_err(|e| format!("serialization failed: {e}"))
    }

    /// Delete a logged meal.
    #[tool(description = "Delete a logged meal by id. Ids come from list_meals.")]
    async fn delete_meal(
        &self,
        Parameters(params): Parameters<DeleteMealParams>,
    ) -> Result<String, String> {
        tracing::info!(id = %params.id, "delete_meal called");

        let id = params.id;
        let deleted_id = self
            .with_db(move |conn| {
                tracker::log::delete_meal(conn, &id)?;
                Ok(id)
            })
            .await?;

        serde_json::to_string(&serde_json::json!({ "deleted": deleted_id }))
            .map_err(|e| format!("serialization failed: {e}"))
    }

    /// Search the food database.
    #[tool(description = "Search the food database by keyword, or look up a barcode (GTIN/UPC) exactly. Nutrient values are per 100 g.")]
    async fn search_food(
        &self,
        Parameters(params): Parameters<SearchFoodParams>,
    ) -> Result<String, String> {
        let limit = params.limit.unwrap_or(self.config.food.search_limit);

        let foods = match (params.query, params.barcode) {
            (_, Some(code)) => {
                tracing::info!(barcode = %code, "search_food called");
                self.with_db(move |conn| {
                    Ok(food::search::food_by_barcode(conn, &code)?
                        .into_iter()
                        .collect::<Vec<_>>())
                })
                .await?
            }
            (Some(query), None) => {
                tracing::info!(query = %query, limit, "search_food called");
                self.with_db(move |conn| food::search::search_foods(conn, &query, limit))
                    .await?
            }
            (None, None) => return Err("provide a query or a barcode".into()),
        };

        serde_json::to_string(&serde_json::json!({
            "total": foods.len(),
            "results": foods,
        }))
        .map_err(|e| format!("serialization failed: {e}"))
    }

    /// Set a daily macro goal.
    #[tool(description = "Set a daily goal for one macro (calories/protein/carbs/fat): target, direction (under/over), and an optional tolerance grace band in percent.")]
    async fn set_goal(
        &self,
        Parameters(params): Parameters<SetGoalParams>,
    ) -> Result<String, String> {
        let key: MacroKey = params.key.parse().map_err(|e: String| e)?;
        let direction = match &params.direction {
            Some(s) => s.parse::<Direction>().map_err(|e: String| e)?,
            // protein is the one macro people aim to reach, not cap
            None => match key {
                MacroKey::Protein => Direction::Over,
                _ => Direction::Under,
            },
        };
        let tolerance = params.tolerance.unwrap_or(0.0);
        let target = params.target;

        tracing::info!(key = %key, target, direction = %direction, tolerance, "set_goal called");

        let goal = self
            .with_db(move |conn| tracker::goals::set_goal(conn, key, target, direction, tolerance))
            .await?;

        serde_json::to_string(&goal).map_err(|e| format!("serialization failed: {e}"))
    }

    /// Get the progress report: today's zones, streaks, and weekly average.
    #[tool(description = "Get goal progress for a date (defaults to today): per-macro actuals vs goals with zone classification, current/best streaks per goal and across all goals, and the trailing 7-day average.")]
    async fn get_progress(
        &self,
        Parameters(params): Parameters<GetProgressParams>,
    ) -> Result<String, String> {
        let reference = resolve_date(params.date.as_deref())?;
        tracing::info!(date = %reference, "get_progress called");

        let report = self
            .with_db(move |conn| tracker::report::build_report(conn, reference))
            .await?;

        serde_json::to_string(&report).map_err(|e| format!("serialization failed: {e}"))
    }

    /// Get statistics about the tracker database.
    #[tool(description = "Get tracker statistics: meal and day counts, date range, goals configured, food database size.")]
    async fn nutrition_stats(
        &self,
        Parameters(_params): Parameters<NutritionStatsParams>,
    ) -> Result<String, String> {
        tracing::info!("nutrition_stats called");

        let db_path = self.config.resolved_db_path();
        let stats = self
            .with_db(move |conn| tracker::stats::tracker_stats(conn, Some(&db_path)))
            .await?;

        serde_json::to_string(&stats).map_err(|e| format!("serialization failed: {e}"))
    }
}

#[tool_handler]
impl ServerHandler for NoshTools {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            instructions: Some(
                "nosh is a personal nutrition tracker. Use log_meal to record food, \
                 search_food to find nutrition data, set_goal to configure daily macro \
                 targets, and get_progress for zones, streaks, and weekly averages."
                    .into(),
            ),
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
