use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Number of ingredient/measure slots TheMealDB exposes per meal.
pub const INGREDIENT_SLOTS: usize = 20;

/// A full meal record as returned by `random.php` / `lookup.php`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    /// Remaining raw fields, including the numbered `strIngredientN` and
    /// `strMeasureN` slots.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl Meal {
    fn slot(&self, prefix: &str, n: usize) -> Option<&str> {
        self.fields
            .get(&format!("{}{}", prefix, n))
            .and_then(Value::as_str)
    }

    /// Non-blank ingredients paired with their (possibly empty) measures.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|n| {
                let ingredient = self.slot("strIngredient", n)?.trim();
                if ingredient.is_empty() {
                    return None;
                }
                let measure = self.slot("strMeasure", n).unwrap_or("").trim();
                Some(Ingredient {
                    ingredient: ingredient.to_string(),
                    measure: measure.to_string(),
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub ingredient: String,
    pub measure: String,
}

/// Abbreviated entry from `filter.php`.
#[derive(Debug, Clone, Deserialize)]
pub struct MealStub {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesEnvelope {
    pub categories: Option<Vec<CategoryEntry>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryEntry {
    #[serde(rename = "strCategory")]
    pub name: String,
}
