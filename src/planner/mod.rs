pub mod allocation;
pub mod calculations;
pub mod combination;
pub mod constants;
pub mod filter;
pub mod portion;
pub mod preview;
pub mod ranking;
pub mod recommend;

pub use allocation::{
    allocate_target, consumed_before, remaining_budget, remaining_slot_count, SlotShares,
    SlotTarget,
};
pub use calculations::{OptimizerConfig, PenaltyShape};
pub use combination::{optimize_combination, rank_candidates, Combination, JointPlan};
pub use constants::*;
pub use filter::filter_catalog;
pub use portion::{is_ladder_value, optimize_portion, snap_multiplier};
pub use preview::{budget_after, preview_selection};
pub use ranking::{largest_deficit, rank_remaining, Macronutrient, RankedFood};
pub use recommend::{compute_recommendations, RecommendationSet};
