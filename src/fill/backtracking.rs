use super::{
    arc_consistency::ArcConsistency, domain::DomainStore, Assignment, PartialAssignment,
    SolveError, SolverOptions, Statistics,
};
use crate::{
    crossword::Puzzle, dictionary::Dictionary, order::Heuristics, parse::VariableId,
    CHECK_INVARIANTS,
};
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::time::Instant;

/// Backtracking search over a puzzle, maintaining arc consistency after
/// every tentative assignment.
pub struct Solver<'a, P: Puzzle> {
    puzzle: &'a P,
    dictionary: &'a Dictionary,
    options: SolverOptions,
    domains: DomainStore,
    statistics: Statistics,
}

impl<'a, P: Puzzle> Solver<'a, P> {
    pub fn new(puzzle: &'a P, dictionary: &'a Dictionary) -> Solver<'a, P> {
        Solver::with_options(puzzle, dictionary, SolverOptions::default())
    }

    pub fn with_options(
        puzzle: &'a P,
        dictionary: &'a Dictionary,
        options: SolverOptions,
    ) -> Solver<'a, P> {
        Solver {
            puzzle,
            dictionary,
            options,
            domains: DomainStore::new(puzzle, dictionary),
            statistics: Statistics::default(),
        }
    }

    pub fn domains(&self) -> &DomainStore {
        &self.domains
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    fn propagator(&self) -> ArcConsistency<'a, P> {
        ArcConsistency::new(self.puzzle, self.dictionary, self.options.constraint)
    }

    fn heuristics(&self) -> Heuristics<'a, P> {
        Heuristics::new(self.puzzle, self.dictionary, self.options.constraint)
    }

    /// Enforce node and arc consistency, then search. `Ok(None)` means the
    /// puzzle has no fill from this dictionary.
    pub fn solve(&mut self) -> Result<Option<Assignment>, SolveError> {
        let start = Instant::now();
        self.statistics = Statistics::default();

        info!(
            "Solving {} variables with {} words",
            self.puzzle.variable_count(),
            self.dictionary.len()
        );

        self.domains = DomainStore::new(self.puzzle, self.dictionary);
        self.domains.enforce_node_consistency(self.puzzle, self.dictionary);

        let mut assignment = PartialAssignment::new(self.puzzle.variable_count());
        let searched = if self.has_candidates() && self.propagate(None) {
            self.backtrack(&mut assignment, start)
        } else {
            Ok(false)
        };

        self.statistics.total_time = start.elapsed();
        let found = match searched {
            Ok(found) => found,
            Err(error) => {
                info!(
                    "Stopped after {} states and {} backtracks: {error}",
                    self.statistics.states, self.statistics.backtracks
                );
                return Err(error);
            }
        };
        info!(
            "{} after {} states and {} backtracks in {:?}",
            if found { "Filled" } else { "No solution" },
            self.statistics.states,
            self.statistics.backtracks,
            self.statistics.total_time
        );

        Ok(found.then(|| assignment.to_assignment(self.dictionary)))
    }

    /// AC-3 never looks at an empty domain on a slot without crossings.
    fn has_candidates(&self) -> bool {
        match (0..self.puzzle.variable_count()).find(|&variable| self.domains.is_empty(variable)) {
            Some(variable) => {
                debug!(
                    "No {}-letter words for variable {variable}",
                    self.puzzle.variable(variable).length()
                );
                false
            }
            None => true,
        }
    }

    /// AC-3 from `into`'s neighbors, or over the whole puzzle when `into`
    /// is `None`.
    fn propagate(&mut self, into: Option<VariableId>) -> bool {
        let propagator = self.propagator();
        let arcs = into.map(|variable| propagator.arcs_into(variable));

        self.statistics.propagations += 1;
        let consistent = propagator.ac3(&mut self.domains, arcs);
        if !consistent {
            self.statistics.propagation_failures += 1;
        }

        if CHECK_INVARIANTS {
            assert!(
                self.domains.is_node_consistent(self.puzzle, self.dictionary),
                "Propagation broke node consistency"
            );
            assert!(
                !consistent || propagator.is_arc_consistent(&self.domains),
                "AC-3 finished without reaching arc consistency"
            );
        }

        consistent
    }

    fn check_deadline(&self, start: Instant) -> Result<(), SolveError> {
        match self.options.deadline {
            Some(deadline) if start.elapsed() >= deadline => Err(SolveError::DeadlineExceeded {
                elapsed: start.elapsed(),
                deadline,
            }),
            _ => Ok(()),
        }
    }

    /// Every assigned word has its slot's length, no word is used twice and
    /// crossing words agree.
    pub(crate) fn consistent(&self, assignment: &PartialAssignment) -> bool {
        let mut used = FxHashSet::default();

        for (variable, word) in assignment.assigned() {
            if self.dictionary.word_len(word) != self.puzzle.variable(variable).length() {
                return false;
            }
            if !used.insert(word) {
                return false;
            }
            for &neighbor in self.puzzle.neighbors(variable) {
                let (Some(other), Some((index, neighbor_index))) = (
                    assignment.get(neighbor),
                    self.puzzle.overlap(variable, neighbor),
                ) else {
                    continue;
                };
                if !(self.options.constraint)(
                    self.dictionary.letters(word),
                    self.dictionary.letters(other),
                    index,
                    neighbor_index,
                ) {
                    return false;
                }
            }
        }

        true
    }

    /// Extend `assignment` to a complete one. On failure the assignment and
    /// the domains are left as they were on entry.
    pub(crate) fn backtrack(
        &mut self,
        assignment: &mut PartialAssignment,
        start: Instant,
    ) -> Result<bool, SolveError> {
        self.statistics.states += 1;
        self.check_deadline(start)?;

        let heuristics = self.heuristics();
        let Some(variable) = heuristics.select_unassigned_variable(&self.domains, assignment)
        else {
            return Ok(true);
        };
        debug_assert!(
            !self.domains.is_empty(variable),
            "Selected variable {variable} with an empty domain"
        );

        let snapshot = self.domains.snapshot();
        for word in heuristics.order_domain_values(&self.domains, assignment, variable) {
            debug_assert!(snapshot.contains(variable, word));
            assignment.assign(variable, word);

            if self.consistent(assignment) {
                self.domains.collapse(variable, word);
                if self.propagate(Some(variable)) && self.backtrack(assignment, start)? {
                    return Ok(true);
                }
            }

            assignment.unassign(variable);
            self.domains.restore(&snapshot);
            self.statistics.backtracks += 1;
        }

        debug!(
            "Exhausted {} candidates for variable {variable}",
            self.domains.len(variable)
        );
        Ok(false)
    }
}
