/// Index of a word in its [`Dictionary`].
pub type WordId = usize;

/// The word list a puzzle is filled from.
///
/// Words are trimmed, upper-cased, deduplicated and sorted, so a `WordId`
/// is stable for a given input set regardless of input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
    letters: Vec<Vec<char>>,
}

impl Dictionary {
    pub fn new<I, S>(words: I) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();
        words.sort_unstable();
        words.dedup();

        let letters = words.iter().map(|word| word.chars().collect()).collect();

        Dictionary { words, letters }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, id: WordId) -> &str {
        &self.words[id]
    }

    pub fn letters(&self, id: WordId) -> &[char] {
        &self.letters[id]
    }

    /// Length in letters, not bytes.
    pub fn word_len(&self, id: WordId) -> usize {
        self.letters[id].len()
    }

    pub fn id_of(&self, word: &str) -> Option<WordId> {
        let word = word.trim().to_uppercase();
        self.words.binary_search(&word).ok()
    }

    pub fn ids(&self) -> impl Iterator<Item = WordId> {
        0..self.words.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WordId, &str)> {
        self.words.iter().map(String::as_str).enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::Dictionary;

    #[test]
    fn normalizes_words() {
        let dictionary = Dictionary::new(vec!["dog", " Cat", "", "DOG", "ate\r", "  "]);

        assert_eq!(dictionary.len(), 3);
        let words: Vec<&str> = dictionary.iter().map(|(_, word)| word).collect();
        assert_eq!(words, vec!["ATE", "CAT", "DOG"]);
    }

    #[test]
    fn looks_up_words() {
        let dictionary = Dictionary::new(["bass", "bats", "bess", "be"]);

        let id = dictionary.id_of("bats").unwrap();
        assert_eq!(dictionary.word(id), "BATS");
        assert_eq!(dictionary.letters(id), &['B', 'A', 'T', 'S']);
        assert_eq!(dictionary.word_len(id), 4);
        assert_eq!(dictionary.id_of("bat"), None);
        assert!(Dictionary::default().is_empty());
    }

    #[test]
    fn counts_letters_not_bytes() {
        let dictionary = Dictionary::new(["été"]);
        assert_eq!(dictionary.word_len(0), 3);
        assert_eq!(dictionary.letters(0)[0], 'É');
    }
}
