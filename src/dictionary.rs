/// Words spellable with the `abcde` alphabet.
pub const WORDS: &[&str] = &[
    "a", "ab", "ad", "add", "added",
    "bad", "bed", "bedded",
    "cab", "cede", "ceded",
    "dab", "dabbed", "dad", "dead", "deed",
    "ebb", "ebbed",
];

/// Read-only set of known words.
///
/// Small enough that a linear scan beats hashing.
#[derive(Clone, Copy, Debug)]
pub struct Dictionary {
    words: &'static [&'static str],
}

impl Default for Dictionary {
    #[inline]
    fn default() -> Self {
        Self::new(WORDS)
    }
}

impl Dictionary {
    #[inline]
    pub const fn new(words: &'static [&'static str]) -> Self {
        Self { words }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|known| *known == word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn membership() {
        let dictionary = Dictionary::default();
        assert!(dictionary.contains("dead"));
        assert!(dictionary.contains("a"));
        assert!(!dictionary.contains("zzz"));
        assert!(!dictionary.contains(""));
        assert!(!dictionary.contains("Dead"));
        assert_eq!(dictionary.len(), 18);
        assert!(!dictionary.is_empty());
        assert!(Dictionary::new(&[]).is_empty());
    }

    #[test]
    fn every_word_uses_source_alphabet() {
        for word in WORDS {
            assert!(word.bytes().all(|b| b"abcde".contains(&b)), "{word}");
        }
    }
}
