use crate::{
    crossword::Puzzle,
    dictionary::{Dictionary, WordId},
    parse::VariableId,
};
use rustc_hash::FxHashSet;

pub type Domain = FxHashSet<WordId>;

/// Candidate words for every variable of a puzzle, indexed by variable id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DomainStore {
    domains: Vec<Domain>,
}

/// A copy of every domain, taken before a tentative assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainSnapshot {
    domains: Vec<Domain>,
}

impl DomainSnapshot {
    pub fn contains(&self, variable: VariableId, word: WordId) -> bool {
        self.domains[variable].contains(&word)
    }
}

impl DomainStore {
    /// One domain per variable, each holding the whole dictionary.
    pub fn new<P: Puzzle>(puzzle: &P, dictionary: &Dictionary) -> DomainStore {
        let all_words: Domain = dictionary.ids().collect();
        DomainStore {
            domains: vec![all_words; puzzle.variable_count()],
        }
    }

    /// Drop every word whose length differs from its variable's length.
    pub fn enforce_node_consistency<P: Puzzle>(&mut self, puzzle: &P, dictionary: &Dictionary) {
        for (variable, domain) in puzzle.variables().iter().zip(self.domains.iter_mut()) {
            domain.retain(|word| dictionary.word_len(*word) == variable.length());
        }
    }

    pub fn is_node_consistent<P: Puzzle>(&self, puzzle: &P, dictionary: &Dictionary) -> bool {
        puzzle
            .variables()
            .iter()
            .zip(self.domains.iter())
            .all(|(variable, domain)| {
                domain
                    .iter()
                    .all(|word| dictionary.word_len(*word) == variable.length())
            })
    }

    pub fn domain(&self, variable: VariableId) -> &Domain {
        &self.domains[variable]
    }

    pub fn len(&self, variable: VariableId) -> usize {
        self.domains[variable].len()
    }

    pub fn is_empty(&self, variable: VariableId) -> bool {
        self.domains[variable].is_empty()
    }

    pub fn contains(&self, variable: VariableId, word: WordId) -> bool {
        self.domains[variable].contains(&word)
    }

    pub fn remove(&mut self, variable: VariableId, word: WordId) -> bool {
        self.domains[variable].remove(&word)
    }

    pub fn retain<F: FnMut(&WordId) -> bool>(&mut self, variable: VariableId, keep: F) {
        self.domains[variable].retain(keep);
    }

    /// Reduce a domain to the single chosen word.
    pub fn collapse(&mut self, variable: VariableId, word: WordId) {
        let domain = &mut self.domains[variable];
        domain.clear();
        domain.insert(word);
    }

    pub fn snapshot(&self) -> DomainSnapshot {
        DomainSnapshot {
            domains: self.domains.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: &DomainSnapshot) {
        self.domains.clone_from(&snapshot.domains);
    }

    /// Words left for `variable`, sorted.
    pub fn words<'d>(&self, variable: VariableId, dictionary: &'d Dictionary) -> Vec<&'d str> {
        let mut words: Vec<&str> = self.domains[variable]
            .iter()
            .map(|word| dictionary.word(*word))
            .collect();
        words.sort_unstable();
        words
    }
}
