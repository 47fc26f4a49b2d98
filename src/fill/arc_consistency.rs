//! AC-3 over the crossing constraints of a puzzle.
//!
//! An arc `(x, y)` is consistent when every word left for `x` has at least one
//! word left for `y` that agrees with it on their shared cell. Revising an arc
//! drops the unsupported words from `x`; whenever that happens, every arc
//! pointing at `x` has to be checked again.

use super::{domain::DomainStore, BinaryConstraint};
use crate::{
    crossword::Puzzle,
    dictionary::{Dictionary, WordId},
    parse::VariableId,
};
use log::{debug, trace};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// An ordered pair of neighboring variables: `x` is made consistent with `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arc {
    pub x: VariableId,
    pub y: VariableId,
}

impl Arc {
    pub fn new(x: VariableId, y: VariableId) -> Arc {
        Arc { x, y }
    }
}

pub struct ArcConsistency<'a, P: Puzzle> {
    puzzle: &'a P,
    dictionary: &'a Dictionary,
    constraint: BinaryConstraint,
}

impl<'a, P: Puzzle> ArcConsistency<'a, P> {
    pub fn new(
        puzzle: &'a P,
        dictionary: &'a Dictionary,
        constraint: BinaryConstraint,
    ) -> ArcConsistency<'a, P> {
        ArcConsistency {
            puzzle,
            dictionary,
            constraint,
        }
    }

    /// Every ordered pair of neighbors in the puzzle.
    pub fn all_arcs(&self) -> Vec<Arc> {
        (0..self.puzzle.variable_count())
            .flat_map(|x| self.puzzle.neighbors(x).iter().map(move |&y| Arc::new(x, y)))
            .collect()
    }

    /// Arcs from each neighbor of `variable` back to it.
    pub fn arcs_into(&self, variable: VariableId) -> Vec<Arc> {
        self.puzzle
            .neighbors(variable)
            .iter()
            .map(|&neighbor| Arc::new(neighbor, variable))
            .collect()
    }

    fn supported(
        &self,
        domains: &DomainStore,
        word_x: WordId,
        y: VariableId,
        (index_x, index_y): (usize, usize),
    ) -> bool {
        let letters_x = self.dictionary.letters(word_x);
        domains.domain(y).iter().any(|&word_y| {
            (self.constraint)(letters_x, self.dictionary.letters(word_y), index_x, index_y)
        })
    }

    /// Make `x` arc consistent with `y`. Returns whether any word was removed
    /// from the domain of `x`.
    pub fn revise(&self, domains: &mut DomainStore, x: VariableId, y: VariableId) -> bool {
        let Some(overlap) = self.puzzle.overlap(x, y) else {
            return false;
        };

        let unsupported: Vec<WordId> = domains
            .domain(x)
            .iter()
            .copied()
            .filter(|&word_x| !self.supported(domains, word_x, y, overlap))
            .collect();

        for word in &unsupported {
            domains.remove(x, *word);
        }

        if !unsupported.is_empty() {
            trace!(
                "revise({x}, {y}) removed {} words, {} left",
                unsupported.len(),
                domains.len(x)
            );
        }
        !unsupported.is_empty()
    }

    /// Run AC-3 from `arcs`, or from every arc in the puzzle when `arcs` is
    /// `None`. Returns `false` as soon as a domain is wiped out.
    pub fn ac3(&self, domains: &mut DomainStore, arcs: Option<Vec<Arc>>) -> bool {
        let initial = arcs.unwrap_or_else(|| self.all_arcs());

        let mut queued: FxHashSet<Arc> = FxHashSet::default();
        let mut queue: VecDeque<Arc> = VecDeque::with_capacity(initial.len());
        for arc in initial {
            if queued.insert(arc) {
                queue.push_back(arc);
            }
        }

        while let Some(Arc { x, y }) = queue.pop_front() {
            queued.remove(&Arc::new(x, y));

            if !self.revise(domains, x, y) {
                continue;
            }
            if domains.is_empty(x) {
                debug!("Domain of variable {x} wiped out while revising against {y}");
                return false;
            }
            for &z in self.puzzle.neighbors(x) {
                if z == y {
                    continue;
                }
                let arc = Arc::new(z, x);
                if queued.insert(arc) {
                    queue.push_back(arc);
                }
            }
        }

        true
    }

    /// Does every word of every non-empty domain have a partner in each
    /// non-empty neighboring domain?
    pub fn is_arc_consistent(&self, domains: &DomainStore) -> bool {
        self.all_arcs().into_iter().all(|Arc { x, y }| {
            if domains.is_empty(x) || domains.is_empty(y) {
                return true;
            }
            let Some(overlap) = self.puzzle.overlap(x, y) else {
                return true;
            };
            domains
                .domain(x)
                .iter()
                .all(|&word_x| self.supported(domains, word_x, y, overlap))
        })
    }
}
