pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod session;

pub use catalog::Catalog;
pub use config::{EngineConfig, NutritionMode, PricingMode};
pub use error::{GainflowError, Result};
pub use models::{Flavor, Ingredient, NutritionTotals, PriceBreakdown};
pub use session::{Notice, Session};
