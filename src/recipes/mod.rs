//! Client for TheMealDB's public, key-less JSON API.

mod cancel;

pub use cancel::CancelToken;

use rand::Rng;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::config::Recipes;
use crate::models::meal::{
    CategoriesEnvelope, Ingredient, Meal, MealStub, MealsEnvelope,
};

pub const MEALDB_BASE: &str = "https://www.themealdb.com/api/json/v1/1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Outcome of a failed request. Nothing here is retried.
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("request cancelled")]
    Cancelled,
    #[error("network not ok: {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("unexpected response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl MealDbClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn from_config(cfg: &Recipes) -> Self {
        Self::new(&cfg.base_url, Duration::from_secs(cfg.timeout_secs))
    }

    /// GET `{base}/{path}` and decode the JSON body, bounded by the client
    /// timeout and the caller's cancel token.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        cancel: &CancelToken,
    ) -> Result<T, RecipeError> {
        if cancel.is_cancelled() {
            return Err(RecipeError::Cancelled);
        }
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, ?query, "mealdb request");

        let request = async {
            let resp = self
                .http
                .get(&url)
                .query(query)
                .send()
                .await
                .map_err(RecipeError::Network)?;
            let status = resp.status();
            if !status.is_success() {
                return Err(RecipeError::Status(status.as_u16()));
            }
            resp.json::<T>()
                .await
                .map_err(|e| RecipeError::Decode(e.to_string()))
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(RecipeError::Cancelled),
            outcome = tokio::time::timeout(self.timeout, request) => match outcome {
                Ok(result) => result,
                Err(_) => Err(RecipeError::Timeout(self.timeout)),
            },
        }
    }

    /// One random meal, or `None` when the API returns no meals.
    pub async fn random_meal(&self, cancel: &CancelToken) -> Result<Option<Meal>, RecipeError> {
        let body: MealsEnvelope<Meal> = self.fetch_json("random.php", &[], cancel).await?;
        Ok(body.meals.and_then(|m| m.into_iter().next()))
    }

    /// Full record for a meal id.
    pub async fn lookup_meal(
        &self,
        id: &str,
        cancel: &CancelToken,
    ) -> Result<Option<Meal>, RecipeError> {
        let body: MealsEnvelope<Meal> =
            self.fetch_json("lookup.php", &[("i", id)], cancel).await?;
        Ok(body.meals.and_then(|m| m.into_iter().next()))
    }

    /// Names of all meal categories.
    pub async fn list_categories(&self, cancel: &CancelToken) -> Result<Vec<String>, RecipeError> {
        let body: CategoriesEnvelope = self.fetch_json("categories.php", &[], cancel).await?;
        Ok(body
            .categories
            .unwrap_or_default()
            .into_iter()
            .map(|c| c.name)
            .collect())
    }

    /// `count` meals, drawn from `category` when one is given.
    ///
    /// If the category request fails, falls back once to plain random
    /// fetches. A category with no meals yields an empty list.
    pub async fn random_meals(
        &self,
        count: u32,
        category: Option<&str>,
        cancel: &CancelToken,
    ) -> Result<Vec<Meal>, RecipeError> {
        if let Some(category) = category.map(str::trim).filter(|c| !c.is_empty()) {
            match self.meals_in_category(count, category, cancel).await {
                Ok(meals) => return Ok(meals),
                Err(RecipeError::Cancelled) => return Err(RecipeError::Cancelled),
                Err(e) => warn!(error = %e, category, "category fetch failed, falling back to random"),
            }
        }

        let mut meals = Vec::new();
        for _ in 0..count {
            if let Some(meal) = self.random_meal(cancel).await? {
                meals.push(meal);
            }
        }
        Ok(meals)
    }

    async fn meals_in_category(
        &self,
        count: u32,
        category: &str,
        cancel: &CancelToken,
    ) -> Result<Vec<Meal>, RecipeError> {
        let list: MealsEnvelope<MealStub> = self
            .fetch_json("filter.php", &[("c", category)], cancel)
            .await?;
        let stubs = list.meals.unwrap_or_default();
        if stubs.is_empty() {
            return Ok(Vec::new());
        }

        let mut meals = Vec::new();
        for _ in 0..count {
            let pick = rand::thread_rng().gen_range(0..stubs.len());
            let stub = &stubs[pick];
            debug!(id = %stub.id, name = %stub.name, "picked meal from category");
            if let Some(meal) = self.lookup_meal(&stub.id, cancel).await? {
                meals.push(meal);
            }
        }
        Ok(meals)
    }
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new(MEALDB_BASE, DEFAULT_TIMEOUT)
    }
}

/// Ingredient list of an optional meal; empty when there is no meal.
pub fn extract_ingredients(meal: Option<&Meal>) -> Vec<Ingredient> {
    meal.map(Meal::ingredients).unwrap_or_default()
}
