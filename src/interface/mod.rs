pub mod prompts;
pub mod render;

pub use prompts::{prompt_amount, prompt_food_choice, prompt_next_pick, prompt_yes_no};
pub use render::{
    describe_target, display_portions, display_recommendations, display_target,
};
