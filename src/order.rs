use crate::{
    crossword::Puzzle,
    dictionary::{Dictionary, WordId},
    fill::{domain::DomainStore, BinaryConstraint, PartialAssignment},
    parse::VariableId,
};
use core::cmp::Ordering;

/// How urgently a variable should be filled next. Greater is more urgent.
#[derive(Eq, PartialEq, Debug)]
pub(crate) struct VariableScore {
    remaining_values: usize,
    degree: usize,
    id: VariableId,
}

impl PartialOrd for VariableScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VariableScore {
    fn cmp(&self, other: &Self) -> Ordering {
        // fewer remaining values wins
        if self.remaining_values != other.remaining_values {
            return other.remaining_values.cmp(&self.remaining_values);
        }
        // more neighbors wins
        if self.degree != other.degree {
            return self.degree.cmp(&other.degree);
        }
        // lower id wins, so ties resolve the same way every run
        other.id.cmp(&self.id)
    }
}

/// Candidate word ranked by how much it would prune. Smaller is tried first.
#[derive(Eq, PartialEq, Debug)]
pub(crate) struct ValueScore<'d> {
    eliminated: usize,
    word: &'d str,
    id: WordId,
}

impl PartialOrd for ValueScore<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ValueScore<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.eliminated
            .cmp(&other.eliminated)
            .then_with(|| self.word.cmp(other.word))
    }
}

/// Variable and value ordering for the backtracking search.
pub(crate) struct Heuristics<'a, P: Puzzle> {
    puzzle: &'a P,
    dictionary: &'a Dictionary,
    constraint: BinaryConstraint,
}

impl<'a, P: Puzzle> Heuristics<'a, P> {
    pub(crate) fn new(
        puzzle: &'a P,
        dictionary: &'a Dictionary,
        constraint: BinaryConstraint,
    ) -> Heuristics<'a, P> {
        Heuristics {
            puzzle,
            dictionary,
            constraint,
        }
    }

    pub(crate) fn score_variable(&self, domains: &DomainStore, id: VariableId) -> VariableScore {
        VariableScore {
            remaining_values: domains.len(id),
            degree: self.puzzle.neighbors(id).len(),
            id,
        }
    }

    /// Minimum remaining values, then maximum degree. `None` once every
    /// variable is assigned.
    pub(crate) fn select_unassigned_variable(
        &self,
        domains: &DomainStore,
        assignment: &PartialAssignment,
    ) -> Option<VariableId> {
        (0..self.puzzle.variable_count())
            .filter(|variable| !assignment.is_assigned(*variable))
            .map(|variable| self.score_variable(domains, variable))
            .max()
            .map(|score| score.id)
    }

    /// How many words `word` would rule out of the domains of the unassigned
    /// neighbors of `variable`.
    pub(crate) fn score_value(
        &self,
        domains: &DomainStore,
        assignment: &PartialAssignment,
        variable: VariableId,
        word: WordId,
    ) -> ValueScore<'a> {
        let letters = self.dictionary.letters(word);
        let mut eliminated = 0;

        for &neighbor in self.puzzle.neighbors(variable) {
            if assignment.is_assigned(neighbor) {
                continue;
            }
            let Some((index, neighbor_index)) = self.puzzle.overlap(variable, neighbor) else {
                continue;
            };
            eliminated += domains
                .domain(neighbor)
                .iter()
                .filter(|&&other| {
                    !(self.constraint)(
                        letters,
                        self.dictionary.letters(other),
                        index,
                        neighbor_index,
                    )
                })
                .count();
        }

        ValueScore {
            eliminated,
            word: self.dictionary.word(word),
            id: word,
        }
    }

    /// The domain of `variable`, least constraining value first.
    pub(crate) fn order_domain_values(
        &self,
        domains: &DomainStore,
        assignment: &PartialAssignment,
        variable: VariableId,
    ) -> Vec<WordId> {
        let mut scores: Vec<ValueScore> = domains
            .domain(variable)
            .iter()
            .map(|&word| self.score_value(domains, assignment, variable, word))
            .collect();
        scores.sort_unstable();
        scores.into_iter().map(|score| score.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Heuristics, ValueScore, VariableScore};
    use crate::{
        crossword::Crossword,
        dictionary::Dictionary,
        fill::{domain::DomainStore, letters_agree, PartialAssignment},
    };
    use std::cmp::Ordering;

    fn domains(crossword: &Crossword, dictionary: &Dictionary) -> DomainStore {
        let mut store = DomainStore::new(crossword, dictionary);
        store.enforce_node_consistency(crossword, dictionary);
        store
    }

    #[test]
    fn variable_score_ord_works() {
        assert_eq!(
            VariableScore {
                remaining_values: 2,
                degree: 0,
                id: 4
            }
            .cmp(&VariableScore {
                remaining_values: 3,
                degree: 9,
                id: 0
            }),
            Ordering::Greater
        );

        assert_eq!(
            VariableScore {
                remaining_values: 3,
                degree: 1,
                id: 0
            }
            .cmp(&VariableScore {
                remaining_values: 3,
                degree: 2,
                id: 1
            }),
            Ordering::Less
        );

        assert_eq!(
            VariableScore {
                remaining_values: 3,
                degree: 2,
                id: 0
            }
            .cmp(&VariableScore {
                remaining_values: 3,
                degree: 2,
                id: 1
            }),
            Ordering::Greater
        );
    }

    #[test]
    fn value_score_ord_works() {
        let few = ValueScore {
            eliminated: 1,
            word: "ZAP",
            id: 0,
        };
        let many = ValueScore {
            eliminated: 2,
            word: "STY",
            id: 1,
        };
        assert_eq!(few.cmp(&many), Ordering::Less);

        let tied = ValueScore {
            eliminated: 1,
            word: "CAT",
            id: 2,
        };
        assert_eq!(few.cmp(&tied), Ordering::Greater);
    }

    #[test]
    fn select_prefers_small_domains_then_degree() {
        let crossword = Crossword::new("_##\n___\n_##\n___").unwrap();
        let dictionary = Dictionary::new(["abc", "bcd", "mbny", "qazx"]);
        let mut store = domains(&crossword, &dictionary);
        let heuristics = Heuristics::new(&crossword, &dictionary, letters_agree);
        let mut assignment = PartialAssignment::new(3);

        // every domain has two words; the down slot crosses both others
        assert_eq!(heuristics.select_unassigned_variable(&store, &assignment), Some(2));

        store.remove(1, dictionary.id_of("abc").unwrap());
        assert_eq!(heuristics.select_unassigned_variable(&store, &assignment), Some(1));

        store.collapse(2, dictionary.id_of("qazx").unwrap());
        assignment.assign(2, dictionary.id_of("qazx").unwrap());
        assignment.assign(1, dictionary.id_of("bcd").unwrap());
        assert_eq!(heuristics.select_unassigned_variable(&store, &assignment), Some(0));

        assignment.assign(0, dictionary.id_of("abc").unwrap());
        assert_eq!(heuristics.select_unassigned_variable(&store, &assignment), None);
    }

    #[test]
    fn ties_resolve_to_lowest_id() {
        let crossword = Crossword::new("___\n###\n___").unwrap();
        let dictionary = Dictionary::new(["cat", "dog"]);
        let store = domains(&crossword, &dictionary);
        let heuristics = Heuristics::new(&crossword, &dictionary, letters_agree);

        let assignment = PartialAssignment::new(2);
        assert_eq!(heuristics.select_unassigned_variable(&store, &assignment), Some(0));
    }

    #[test]
    fn order_puts_least_constraining_first() {
        let crossword = Crossword::new("___\n#_#\n#_#\n#_#").unwrap();
        let dictionary = Dictionary::new(["sty", "zap", "ante", "axle", "tide"]);
        let store = domains(&crossword, &dictionary);
        let heuristics = Heuristics::new(&crossword, &dictionary, letters_agree);
        let mut assignment = PartialAssignment::new(2);

        let sty = dictionary.id_of("sty").unwrap();
        let zap = dictionary.id_of("zap").unwrap();

        // ZAP only rules out TIDE, STY rules out ANTE and AXLE
        assert_eq!(heuristics.score_value(&store, &assignment, 0, zap).eliminated, 1);
        assert_eq!(heuristics.order_domain_values(&store, &assignment, 0), vec![zap, sty]);

        // assigned neighbors don't count
        assignment.assign(1, dictionary.id_of("tide").unwrap());
        assert_eq!(heuristics.order_domain_values(&store, &assignment, 0), vec![sty, zap]);
    }
}
