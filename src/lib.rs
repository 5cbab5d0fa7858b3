pub mod core;
pub mod db;
pub mod error;
pub mod models;
pub mod output;
pub mod recipes;
pub mod telemetry;
