use crate::{
    crossword::Puzzle,
    dictionary::{Dictionary, WordId},
    parse::VariableId,
};
use std::{collections::BTreeMap, fmt, time::Duration};
use thiserror::Error;

pub mod arc_consistency;
pub mod backtracking;
pub mod domain;

/// Binary overlap constraint: do `word_x` and `word_y` agree when letter
/// `index_x` of the first sits on the same cell as letter `index_y` of the
/// second?
pub type BinaryConstraint =
    fn(word_x: &[char], word_y: &[char], index_x: usize, index_y: usize) -> bool;

/// The crossword constraint: both words carry the same letter on the shared cell.
pub fn letters_agree(word_x: &[char], word_y: &[char], index_x: usize, index_y: usize) -> bool {
    match (word_x.get(index_x), word_y.get(index_y)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SolveError {
    #[error("Search abandoned after {elapsed:?}, deadline was {deadline:?}")]
    DeadlineExceeded {
        elapsed: Duration,
        deadline: Duration,
    },
}

#[derive(Clone, Copy)]
pub struct SolverOptions {
    /// Give up once a solve has been running this long.
    pub deadline: Option<Duration>,
    pub constraint: BinaryConstraint,
}

impl Default for SolverOptions {
    fn default() -> SolverOptions {
        SolverOptions {
            deadline: None,
            constraint: letters_agree,
        }
    }
}

impl fmt::Debug for SolverOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolverOptions")
            .field("deadline", &self.deadline)
            .finish_non_exhaustive()
    }
}

impl SolverOptions {
    pub fn with_deadline(mut self, deadline: Duration) -> SolverOptions {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_constraint(mut self, constraint: BinaryConstraint) -> SolverOptions {
        self.constraint = constraint;
        self
    }
}

/// Counters for a single solve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Search nodes visited.
    pub states: usize,
    /// Candidates tried and undone.
    pub backtracks: usize,
    pub propagations: usize,
    pub propagation_failures: usize,
    pub total_time: Duration,
}

/// A complete fill: one word per variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    words: BTreeMap<VariableId, String>,
}

impl Assignment {
    pub fn get(&self, variable: VariableId) -> Option<&str> {
        self.words.get(&variable).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &str)> {
        self.words.iter().map(|(id, word)| (*id, word.as_str()))
    }

    /// Letters of this assignment laid out on the puzzle's grid. Cells no
    /// assigned word covers are `None`.
    pub fn letter_grid<P: Puzzle>(&self, puzzle: &P) -> Vec<Vec<Option<char>>> {
        let mut letters = vec![vec![None; puzzle.width()]; puzzle.height()];
        for (id, word) in &self.words {
            for (&(row, col), c) in puzzle.variable(*id).cells().iter().zip(word.chars()) {
                letters[row][col] = Some(c);
            }
        }
        letters
    }
}

/// The assignment under construction during search, indexed by variable.
#[derive(Debug, Clone)]
pub(crate) struct PartialAssignment {
    words: Vec<Option<WordId>>,
    assigned: usize,
}

impl PartialAssignment {
    pub(crate) fn new(variable_count: usize) -> PartialAssignment {
        PartialAssignment {
            words: vec![None; variable_count],
            assigned: 0,
        }
    }

    pub(crate) fn get(&self, variable: VariableId) -> Option<WordId> {
        self.words[variable]
    }

    pub(crate) fn is_assigned(&self, variable: VariableId) -> bool {
        self.words[variable].is_some()
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.assigned == self.words.len()
    }

    pub(crate) fn assign(&mut self, variable: VariableId, word: WordId) {
        if self.words[variable].replace(word).is_none() {
            self.assigned += 1;
        }
    }

    pub(crate) fn unassign(&mut self, variable: VariableId) {
        if self.words[variable].take().is_some() {
            self.assigned -= 1;
        }
    }

    pub(crate) fn assigned(&self) -> impl Iterator<Item = (VariableId, WordId)> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter_map(|(variable, word)| word.map(|word| (variable, word)))
    }

    pub(crate) fn to_assignment(&self, dictionary: &Dictionary) -> Assignment {
        Assignment {
            words: self
                .assigned()
                .map(|(variable, word)| (variable, dictionary.word(word).to_owned()))
                .collect(),
        }
    }
}
