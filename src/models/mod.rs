mod flavor;
mod ingredient;
mod nutrition;
mod order;

pub use flavor::Flavor;
pub use ingredient::{Category, Ingredient};
pub use nutrition::{MacroSplit, NutritionTotals};
pub use order::{OrderReceipt, PriceBreakdown};
