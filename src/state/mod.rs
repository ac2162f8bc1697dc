mod catalog;
mod persistence;

pub use catalog::FoodCatalog;
pub use persistence::{load_day, load_foods, load_profile, save_day};
