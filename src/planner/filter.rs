use crate::models::{Exclusions, FoodItem};

/// Drop every catalog entry matching an allergy or dislike.
///
/// Catalog order is preserved. An empty result is valid and means there is
/// nothing to recommend.
pub fn filter_catalog<'a>(catalog: &[&'a FoodItem], exclusions: &Exclusions) -> Vec<&'a FoodItem> {
    let needles = exclusions.needles();
    if needles.is_empty() {
        return catalog.to_vec();
    }

    catalog
        .iter()
        .copied()
        .filter(|food| {
            let name = food.name.to_lowercase();
            !needles.iter().any(|n| name.contains(n.as_str()))
        })
        .collect()
}
