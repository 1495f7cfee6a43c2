use rand::Rng;

use crate::game::board::{Category, Clue, NUM_CLUES_PER_CATEGORY};
use crate::game::error::{GameError, Result};
use crate::game::sampler;
use crate::provider::TriviaProvider;

/// Fetch the category pool, sample six categories, then fetch each one's
/// clues sequentially in column order. Any failure aborts the whole attempt
/// so the caller never sees a partial set.
pub fn load_categories(
    provider: &dyn TriviaProvider,
    pool_size: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Category>> {
    let pool = provider.fetch_pool(pool_size)?;
    let picks = sampler::sample_categories(&pool, rng)?;

    let mut categories = Vec::with_capacity(picks.len());
    for pick in &picks {
        let data = provider.fetch_category(pick.id)?;
        if data.clues.len() <= NUM_CLUES_PER_CATEGORY {
            // The pool summary promised more clues than the category payload
            // actually carries.
            return Err(GameError::MalformedResponse(format!(
                "category {} has {} clues, expected more than {}",
                pick.id,
                data.clues.len(),
                NUM_CLUES_PER_CATEGORY
            )));
        }
        categories.push(Category {
            title: data.title,
            clues: data
                .clues
                .into_iter()
                .map(|c| Clue::new(c.question, c.answer))
                .collect(),
        });
    }

    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::NUM_CATEGORIES;
    use crate::provider::{CategoryData, CategorySummary, ClueData};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::cell::RefCell;

    /// In-memory provider that can be told to fail the nth category fetch.
    struct FixtureProvider {
        pool: Vec<CategorySummary>,
        fail_fetch_at: Option<usize>,
        fetched: RefCell<Vec<u64>>,
    }

    impl FixtureProvider {
        fn with_pool(size: usize, clues_count: usize) -> Self {
            Self {
                pool: (0..size as u64)
                    .map(|id| CategorySummary {
                        id,
                        title: format!("cat-{id}"),
                        clues_count,
                    })
                    .collect(),
                fail_fetch_at: None,
                fetched: RefCell::new(Vec::new()),
            }
        }
    }

    impl TriviaProvider for FixtureProvider {
        fn fetch_pool(&self, _count: usize) -> Result<Vec<CategorySummary>> {
            Ok(self.pool.clone())
        }

        fn fetch_category(&self, id: u64) -> Result<CategoryData> {
            let call = self.fetched.borrow().len();
            if self.fail_fetch_at == Some(call) {
                return Err(GameError::ProviderUnavailable("connection reset".into()));
            }
            self.fetched.borrow_mut().push(id);
            let clues_count = self
                .pool
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.clues_count)
                .unwrap_or(0);
            Ok(CategoryData {
                id,
                title: format!("cat-{id}"),
                clues: (0..clues_count)
                    .map(|j| ClueData {
                        question: format!("q{id}-{j}"),
                        answer: format!("a{id}-{j}"),
                    })
                    .collect(),
            })
        }
    }

    #[test]
    fn test_loads_six_categories_each_fetched_once() {
        let provider = FixtureProvider::with_pool(6, 5);
        let mut rng = SmallRng::seed_from_u64(9);
        let categories = load_categories(&provider, 100, &mut rng).unwrap();
        assert_eq!(categories.len(), NUM_CATEGORIES);
        assert!(categories.iter().all(|c| c.clues.len() == 5));

        let mut fetched = provider.fetched.borrow().clone();
        fetched.sort_unstable();
        assert_eq!(fetched, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_fetch_order_matches_sampled_column_order() {
        let provider = FixtureProvider::with_pool(20, 4);
        let mut sample_rng = SmallRng::seed_from_u64(11);
        let picks = sampler::sample_categories(&provider.pool, &mut sample_rng).unwrap();

        let mut rng = SmallRng::seed_from_u64(11);
        let categories = load_categories(&provider, 100, &mut rng).unwrap();

        let titles: Vec<&str> = categories.iter().map(|c| c.title.as_str()).collect();
        let expected: Vec<String> = picks.iter().map(|p| format!("cat-{}", p.id)).collect();
        assert_eq!(titles, expected);
        assert_eq!(
            *provider.fetched.borrow(),
            picks.iter().map(|p| p.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_insufficient_pool_fetches_nothing() {
        let provider = FixtureProvider::with_pool(4, 5);
        let mut rng = SmallRng::seed_from_u64(2);
        let err = load_categories(&provider, 100, &mut rng).unwrap_err();
        assert!(matches!(err, GameError::InsufficientCategories { found: 4, .. }));
        assert!(provider.fetched.borrow().is_empty());
    }

    #[test]
    fn test_mid_sequence_failure_discards_earlier_fetches() {
        let mut provider = FixtureProvider::with_pool(10, 5);
        provider.fail_fetch_at = Some(1);
        let mut rng = SmallRng::seed_from_u64(4);
        let err = load_categories(&provider, 100, &mut rng).unwrap_err();
        assert!(matches!(err, GameError::ProviderUnavailable(_)));
        // The first fetch succeeded but its category never escapes.
        assert_eq!(provider.fetched.borrow().len(), 1);
    }

    #[test]
    fn test_short_clue_payload_is_malformed() {
        // Pool claims 5 clues; make fetch_category return only 2 by lying in
        // the summary the fixture reads from.
        struct ShortClues;
        impl TriviaProvider for ShortClues {
            fn fetch_pool(&self, _count: usize) -> Result<Vec<CategorySummary>> {
                Ok((0..6)
                    .map(|id| CategorySummary {
                        id,
                        title: format!("cat-{id}"),
                        clues_count: 5,
                    })
                    .collect())
            }
            fn fetch_category(&self, id: u64) -> Result<CategoryData> {
                Ok(CategoryData {
                    id,
                    title: format!("cat-{id}"),
                    clues: vec![
                        ClueData {
                            question: "q".into(),
                            answer: "a".into(),
                        },
                        ClueData {
                            question: "q".into(),
                            answer: "a".into(),
                        },
                    ],
                })
            }
        }

        let mut rng = SmallRng::seed_from_u64(5);
        let err = load_categories(&ShortClues, 100, &mut rng).unwrap_err();
        assert!(matches!(err, GameError::MalformedResponse(_)));
    }
}
