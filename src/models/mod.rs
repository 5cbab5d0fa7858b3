pub mod config;
pub mod document;
pub mod meal;

pub use document::HealthDocument;
pub use meal::Meal;
