pub mod food;
pub mod macros;
pub mod portion;
pub mod profile;
pub mod slot;

pub use food::FoodItem;
pub use macros::MacroVector;
pub use portion::{format_multiplier, PortionResult};
pub use profile::{Exclusions, Profile};
pub use slot::{DayLog, ExtraIntake, MealSlot};
