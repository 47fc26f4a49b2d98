//! Fill crossword grids from a word list.
//!
//! Each word slot is a variable whose domain starts out as the whole
//! dictionary. Domains are first cut down to words of the right length, then
//! to words that fit their crossings (AC-3), and a backtracking search picks
//! words one slot at a time, re-running AC-3 after every choice.
//!
//! ```
//! use xwords_csp::{solve, Crossword, Dictionary};
//!
//! let crossword = Crossword::new("___\n#_#\n#_#\n#_#").unwrap();
//! let dictionary = Dictionary::new(["cat", "ante", "tide"]);
//!
//! let assignment = solve(&crossword, &dictionary).unwrap();
//! assert_eq!(assignment.get(0), Some("CAT"));
//! assert_eq!(assignment.get(1), Some("ANTE"));
//! ```

pub mod crossword;
pub mod dictionary;
pub mod fill;
pub(crate) mod order;
pub mod parse;

pub use crossword::{Crossword, CrosswordError, Direction, Puzzle};
pub use dictionary::{Dictionary, WordId};
pub use fill::{
    backtracking::Solver, letters_agree, Assignment, BinaryConstraint, SolveError, SolverOptions,
    Statistics,
};
pub use parse::{Cell, Variable, VariableId};

pub(crate) use rustc_hash::FxHashMap;

/// Run extra self-checks after every propagation. Enable with
/// `--features check_invariants` when debugging the solver.
pub const CHECK_INVARIANTS: bool = cfg!(feature = "check_invariants");

/// Fill `puzzle` from `dictionary`. `None` means no fill exists.
pub fn solve<P: Puzzle>(puzzle: &P, dictionary: &Dictionary) -> Option<Assignment> {
    // without a deadline the search always runs to completion
    Solver::new(puzzle, dictionary).solve().ok().flatten()
}
