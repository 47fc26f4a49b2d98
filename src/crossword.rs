use crate::parse::{parse_variables, Cell, Variable, VariableId};
use crate::FxHashMap;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Direction {
    Across,
    Down,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CrosswordError {
    #[error("Structure has no rows")]
    Empty,

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unexpected character {found:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, found: char },

    #[error("Variable {variable} leaves the {height}x{width} grid")]
    CellOutOfBounds {
        variable: VariableId,
        height: usize,
        width: usize,
    },

    #[error("Variables {first} and {second} share more than one cell")]
    MultipleOverlaps { first: VariableId, second: VariableId },
}

/// What the solver needs to know about a puzzle.
///
/// Variable ids are indices into [`Puzzle::variables`].
pub trait Puzzle {
    fn variables(&self) -> &[Variable];

    /// Variables sharing a cell with `variable`, in ascending id order. Never
    /// contains `variable` itself.
    fn neighbors(&self, variable: VariableId) -> &[VariableId];

    /// Letter positions of the shared cell, as `(index_in_first, index_in_second)`.
    fn overlap(&self, first: VariableId, second: VariableId) -> Option<(usize, usize)>;

    fn height(&self) -> usize;

    fn width(&self) -> usize;

    fn variable(&self, variable: VariableId) -> &Variable {
        &self.variables()[variable]
    }

    fn variable_count(&self) -> usize {
        self.variables().len()
    }
}

/// A crossword grid along with its word slots and their crossings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossword {
    pub(crate) open: Vec<bool>,
    pub(crate) width: usize,
    pub(crate) height: usize,
    variables: Vec<Variable>,
    neighbors: Vec<Vec<VariableId>>,
    overlaps: FxHashMap<(VariableId, VariableId), (usize, usize)>,
}

impl Crossword {
    /// Parse a grid structure. `_` or a space marks an open cell, `#` or `*` a
    /// blocked one. Blank lines before and after the grid are ignored.
    pub fn new(structure: &str) -> Result<Crossword, CrosswordError> {
        let rows: Vec<&str> = structure
            .trim_matches(|c| c == '\n' || c == '\r')
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();

        let width = match rows.first() {
            Some(row) if !row.is_empty() => row.chars().count(),
            _ => return Err(CrosswordError::Empty),
        };
        let height = rows.len();

        let mut open = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(CrosswordError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, c) in line.chars().enumerate() {
                match c {
                    '_' | ' ' => open.push(true),
                    '#' | '*' => open.push(false),
                    found => return Err(CrosswordError::InvalidCell { row, col, found }),
                }
            }
        }

        let variables = parse_variables(&open, width, height);
        Crossword::build(open, width, height, variables)
    }

    /// Build a crossword from explicit slots. Cells covered by a slot are open,
    /// everything else is blocked.
    pub fn from_variables(
        height: usize,
        width: usize,
        variables: Vec<Variable>,
    ) -> Result<Crossword, CrosswordError> {
        let mut open = vec![false; width * height];
        for (id, variable) in variables.iter().enumerate() {
            for &(row, col) in variable.cells() {
                if row >= height || col >= width {
                    return Err(CrosswordError::CellOutOfBounds {
                        variable: id,
                        height,
                        width,
                    });
                }
                open[row * width + col] = true;
            }
        }
        Crossword::build(open, width, height, variables)
    }

    fn build(
        open: Vec<bool>,
        width: usize,
        height: usize,
        variables: Vec<Variable>,
    ) -> Result<Crossword, CrosswordError> {
        // which slots cover each cell
        let mut covering: FxHashMap<Cell, Vec<VariableId>> = FxHashMap::default();
        for (id, variable) in variables.iter().enumerate() {
            for &cell in variable.cells() {
                covering.entry(cell).or_default().push(id);
            }
        }

        let mut neighbors = vec![Vec::new(); variables.len()];
        let mut overlaps = FxHashMap::default();
        for (&cell, ids) in &covering {
            for &first in ids {
                for &second in ids {
                    if first == second {
                        continue;
                    }
                    if overlaps.contains_key(&(first, second)) {
                        return Err(CrosswordError::MultipleOverlaps { first, second });
                    }
                    let first_index = variables[first].index_of(cell);
                    let second_index = variables[second].index_of(cell);
                    if let (Some(i), Some(j)) = (first_index, second_index) {
                        overlaps.insert((first, second), (i, j));
                        neighbors[first].push(second);
                    }
                }
            }
        }
        for list in &mut neighbors {
            list.sort_unstable();
        }

        Ok(Crossword {
            open,
            width,
            height,
            variables,
            neighbors,
            overlaps,
        })
    }

    pub fn is_open(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.open[row * self.width + col]
    }
}

impl Puzzle for Crossword {
    fn variables(&self) -> &[Variable] {
        &self.variables
    }

    fn neighbors(&self, variable: VariableId) -> &[VariableId] {
        &self.neighbors[variable]
    }

    fn overlap(&self, first: VariableId, second: VariableId) -> Option<(usize, usize)> {
        self.overlaps.get(&(first, second)).copied()
    }

    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }
}
