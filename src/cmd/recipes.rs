use anyhow::Result;
use serde_json::{Value, json};
use std::future::Future;

use healthplanner::error::HealthError;
use healthplanner::models::config::Config;
use healthplanner::models::meal::Meal;
use healthplanner::output::human;
use healthplanner::recipes::{CancelToken, MealDbClient, RecipeError};

use super::{Ctx, emit};

/// Run one request on a current-thread runtime; Ctrl-C cancels it.
fn block_on<T, F>(task: impl FnOnce(MealDbClient, CancelToken) -> F) -> Result<T>
where
    F: Future<Output = Result<T, RecipeError>>,
{
    let config = Config::load()?;
    let client = MealDbClient::from_config(&config.recipes);
    let cancel = CancelToken::new();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let on_interrupt = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                on_interrupt.cancel();
            }
        });
        task(client, cancel)
            .await
            .map_err(|e| anyhow::Error::from(HealthError::from(e)))
    })
}

fn meal_json(meal: &Meal) -> Value {
    json!({
        "id": meal.id,
        "name": meal.name,
        "category": meal.category,
        "area": meal.area,
        "thumbnail": meal.thumbnail,
        "youtube": meal.youtube,
        "instructions": meal.instructions,
        "ingredients": meal.ingredients(),
    })
}

pub fn run(ctx: &Ctx, count: Option<u32>, category: Option<&str>) -> Result<()> {
    let count = match count {
        Some(n) => n,
        None => Config::load()?.recipes.default_count,
    };
    let category = category.map(str::to_string);
    let meals = block_on(|client, cancel| async move {
        client
            .random_meals(count, category.as_deref(), &cancel)
            .await
    })?;

    let items: Vec<Value> = meals.iter().map(meal_json).collect();
    emit("recipes", ctx.human, json!({ "meals": items }), || {
        if meals.is_empty() {
            "No meals found.".to_string()
        } else {
            meals
                .iter()
                .map(human::format_meal)
                .collect::<Vec<_>>()
                .join("\n\n")
        }
    })
}

pub fn run_categories(ctx: &Ctx) -> Result<()> {
    let categories =
        block_on(|client, cancel| async move { client.list_categories(&cancel).await })?;

    emit(
        "recipes",
        ctx.human,
        json!({ "categories": categories }),
        || categories.join("\n"),
    )
}
