use crate::crossword::Direction;

/// Index of a variable in its puzzle's variable list.
pub type VariableId = usize;

/// A grid coordinate, `(row, col)`.
pub type Cell = (usize, usize);

/// One word slot in the grid.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Variable {
    pub(crate) start_row: usize,
    pub(crate) start_col: usize,
    pub(crate) length: usize,
    pub(crate) direction: Direction,
    pub(crate) cells: Vec<Cell>,
}

impl Variable {
    pub fn new(
        start_row: usize,
        start_col: usize,
        direction: Direction,
        length: usize,
    ) -> Variable {
        let cells = (0..length)
            .map(|index| match direction {
                Direction::Across => (start_row, start_col + index),
                Direction::Down => (start_row + index, start_col),
            })
            .collect();

        Variable {
            start_row,
            start_col,
            length,
            direction,
            cells,
        }
    }

    pub fn start_row(&self) -> usize {
        self.start_row
    }

    pub fn start_col(&self) -> usize {
        self.start_col
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cells in letter order: `cells()[k]` holds the `k`-th letter.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Position of `cell` within this slot, if the slot covers it.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.cells.iter().position(|c| *c == cell)
    }
}

/// Scan an open/blocked cell mask for word slots.
///
/// Every maximal run of at least two open cells becomes a variable. Across
/// slots come first, row by row, followed by down slots, column by column.
pub(crate) fn parse_variables(open: &[bool], width: usize, height: usize) -> Vec<Variable> {
    let mut result = vec![];

    for row in 0..height {
        let mut start_col = None;
        for col in 0..width {
            if open[row * width + col] {
                // found an open cell; is it the first of a run?
                if start_col.is_none() {
                    start_col = Some(col);
                }
            } else if let Some(start) = start_col.take() {
                push_run(&mut result, row, start, Direction::Across, col - start);
            }
        }
        // have to process end of row
        if let Some(start) = start_col {
            push_run(&mut result, row, start, Direction::Across, width - start);
        }
    }

    for col in 0..width {
        let mut start_row = None;
        for row in 0..height {
            if open[row * width + col] {
                if start_row.is_none() {
                    start_row = Some(row);
                }
            } else if let Some(start) = start_row.take() {
                push_run(&mut result, start, col, Direction::Down, row - start);
            }
        }
        if let Some(start) = start_row {
            push_run(&mut result, start, col, Direction::Down, height - start);
        }
    }

    result
}

fn push_run(
    result: &mut Vec<Variable>,
    start_row: usize,
    start_col: usize,
    direction: Direction,
    length: usize,
) {
    // single cells are not words
    if length > 1 {
        result.push(Variable::new(start_row, start_col, direction, length));
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_variables, Variable};
    use crate::crossword::Direction;

    fn mask(rows: &[&str]) -> (Vec<bool>, usize, usize) {
        let width = rows[0].len();
        let open = rows
            .iter()
            .flat_map(|row| row.chars().map(|c| c != '#'))
            .collect();
        (open, width, rows.len())
    }

    #[test]
    fn variable_cells_follow_direction() {
        let across = Variable::new(1, 2, Direction::Across, 3);
        assert_eq!(across.cells(), &[(1, 2), (1, 3), (1, 4)]);

        let down = Variable::new(1, 2, Direction::Down, 3);
        assert_eq!(down.cells(), &[(1, 2), (2, 2), (3, 2)]);
        assert_eq!(down.index_of((3, 2)), Some(2));
        assert_eq!(down.index_of((1, 3)), None);
    }

    #[test]
    fn parse_variables_works() {
        let (open, width, height) = mask(&["___", "___", "___"]);
        let result = parse_variables(&open, width, height);

        assert_eq!(result.len(), 6);
        assert_eq!(result[0], Variable::new(0, 0, Direction::Across, 3));
        assert_eq!(result[1], Variable::new(1, 0, Direction::Across, 3));
        assert_eq!(result[2], Variable::new(2, 0, Direction::Across, 3));
        assert_eq!(result[3], Variable::new(0, 0, Direction::Down, 3));
        assert_eq!(result[5], Variable::new(0, 2, Direction::Down, 3));
    }

    #[test]
    fn parse_variables_skips_single_cells() {
        let (open, width, height) = mask(&["___", "#_#", "#_#", "#_#"]);
        let result = parse_variables(&open, width, height);

        assert_eq!(
            result,
            vec![
                Variable::new(0, 0, Direction::Across, 3),
                Variable::new(0, 1, Direction::Down, 4),
            ]
        );
    }

    #[test]
    fn parse_variables_splits_runs_on_blocks() {
        let (open, width, height) = mask(&["__#___", "______", "___#__"]);
        let result = parse_variables(&open, width, height);

        let across: Vec<_> = result
            .iter()
            .filter(|v| v.direction() == Direction::Across)
            .collect();
        assert_eq!(across.len(), 5);
        assert_eq!(*across[0], Variable::new(0, 0, Direction::Across, 2));
        assert_eq!(*across[1], Variable::new(0, 3, Direction::Across, 3));
        assert_eq!(*across[2], Variable::new(1, 0, Direction::Across, 6));
        assert_eq!(*across[4], Variable::new(2, 4, Direction::Across, 2));

        let down: Vec<_> = result
            .iter()
            .filter(|v| v.direction() == Direction::Down)
            .collect();
        // column 2 is cut at row 0, column 3 at row 2
        assert!(down.contains(&&Variable::new(1, 2, Direction::Down, 2)));
        assert!(down.contains(&&Variable::new(0, 3, Direction::Down, 2)));
        assert_eq!(down.len(), 6);
    }
}
