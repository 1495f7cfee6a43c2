use rand::Rng;
use rand::seq::SliceRandom;

use crate::game::board::{NUM_CATEGORIES, NUM_CLUES_PER_CATEGORY};
use crate::game::error::{GameError, Result};
use crate::provider::CategorySummary;

/// A category qualifies only if a distinct clue could back every displayed
/// row, i.e. it has strictly more clues than rows.
pub fn qualifies(summary: &CategorySummary) -> bool {
    summary.clues_count > NUM_CLUES_PER_CATEGORY
}

/// Pick `NUM_CATEGORIES` distinct qualifying categories from the pool,
/// without replacement. The returned order is the board's column order.
pub fn sample_categories(
    pool: &[CategorySummary],
    rng: &mut impl Rng,
) -> Result<Vec<CategorySummary>> {
    let qualifying: Vec<&CategorySummary> = pool.iter().filter(|c| qualifies(c)).collect();

    if qualifying.len() < NUM_CATEGORIES {
        return Err(GameError::InsufficientCategories {
            found: qualifying.len(),
            needed: NUM_CATEGORIES,
        });
    }

    Ok(qualifying
        .choose_multiple(rng, NUM_CATEGORIES)
        .map(|c| (*c).clone())
        .collect())
}
