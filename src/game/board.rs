use rand::Rng;

pub const NUM_CATEGORIES: usize = 6;
pub const NUM_CLUES_PER_CATEGORY: usize = 2;

/// How much of a clue is currently shown. States only advance, never regress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealState {
    Hidden,
    Question,
    Answer,
}

#[derive(Clone, Debug)]
pub struct Clue {
    pub question: String,
    pub answer: String,
    pub reveal: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            reveal: RevealState::Hidden,
        }
    }
}

/// One fetched category: title plus its full clue list. Only two clues per
/// category are displayed, but the rest are kept as fetched.
#[derive(Clone, Debug)]
pub struct Category {
    pub title: String,
    pub clues: Vec<Clue>,
}

/// Outcome of a reveal request on a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealResult {
    Question(String),
    Answer(String),
    /// Cell was already at `Answer`.
    NoOp,
}

pub struct Board {
    categories: Vec<Category>,
    /// Displayed clue index per (column, row), fixed at build time.
    displayed: [[usize; NUM_CLUES_PER_CATEGORY]; NUM_CATEGORIES],
    answered: usize,
}

impl Board {
    /// Build a board from exactly `NUM_CATEGORIES` categories, picking one
    /// random displayed clue per row. Picks are independent per row, so a
    /// category may show the same clue twice; the sampler's clue-count
    /// threshold makes that unlikely.
    pub fn build(categories: Vec<Category>, rng: &mut impl Rng) -> Self {
        debug_assert_eq!(categories.len(), NUM_CATEGORIES);

        let mut displayed = [[0usize; NUM_CLUES_PER_CATEGORY]; NUM_CATEGORIES];
        for (col, category) in categories.iter().enumerate() {
            for row in 0..NUM_CLUES_PER_CATEGORY {
                displayed[col][row] = rng.gen_range(0..category.clues.len());
            }
        }

        Self {
            categories,
            displayed,
            answered: 0,
        }
    }

    pub fn title(&self, col: usize) -> &str {
        &self.categories[col].title
    }

    fn clue(&self, col: usize, row: usize) -> &Clue {
        &self.categories[col].clues[self.displayed[col][row]]
    }

    pub fn reveal_state(&self, col: usize, row: usize) -> RevealState {
        self.clue(col, row).reveal
    }

    /// Text for a cell as currently revealed.
    pub fn cell_text(&self, col: usize, row: usize) -> String {
        let clue = self.clue(col, row);
        match clue.reveal {
            RevealState::Hidden => "?".to_string(),
            RevealState::Question => format!("Clue: {}", clue.question),
            RevealState::Answer => format!("Answer: {}", clue.answer),
        }
    }

    /// Advance a cell one step: hidden shows the question, question shows
    /// the answer, answered cells ignore further reveals.
    pub fn reveal_next(&mut self, col: usize, row: usize) -> RevealResult {
        let idx = self.displayed[col][row];
        let clue = &mut self.categories[col].clues[idx];
        match clue.reveal {
            RevealState::Hidden => {
                clue.reveal = RevealState::Question;
                RevealResult::Question(clue.question.clone())
            }
            RevealState::Question => {
                clue.reveal = RevealState::Answer;
                self.answered += 1;
                RevealResult::Answer(clue.answer.clone())
            }
            RevealState::Answer => RevealResult::NoOp,
        }
    }

    pub fn answered_count(&self) -> usize {
        self.answered
    }

    pub fn is_complete(&self) -> bool {
        self.answered == NUM_CATEGORIES * NUM_CLUES_PER_CATEGORY
    }
}
