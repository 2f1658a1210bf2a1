use std::fmt;
use std::ops::Deref;
use crate::queue::Queue;

/// Characters accumulated between two boundary characters.
///
/// Immutable once built. May be empty - two boundaries in a row give an empty word.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(Box<str>);

impl Word {
    #[inline]
    pub fn new(text: impl Into<Box<str>>) -> Self {
        Self(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Word {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for Word {
    #[inline]
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Word {
    #[inline]
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Queue entry.
///
/// [Message::Terminate] is a separate variant, so no tokenized word
/// can ever be mistaken for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    Word(Word),
    Terminate,
}

impl Message {
    #[inline]
    pub fn is_terminate(&self) -> bool {
        matches!(self, Message::Terminate)
    }
}

impl From<Word> for Message {
    #[inline]
    fn from(word: Word) -> Self {
        Message::Word(word)
    }
}

impl Queue<Message> {
    /// Push one [Message::Terminate] per consumer, waking all of them.
    ///
    /// Every parked consumer must see a marker eventually - waking just
    /// one would leave the others parked forever.
    #[inline]
    pub fn push_termination_burst(&self, consumers: usize) -> usize {
        self.push_burst(std::iter::repeat(Message::Terminate).take(consumers))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn terminate_never_equals_a_word() {
        for text in ["", "END", "Terminate", "ab"] {
            let msg = Message::from(Word::from(text));
            assert_ne!(msg, Message::Terminate);
            assert!(!msg.is_terminate());
        }
        assert!(Message::Terminate.is_terminate());
    }

    #[test]
    fn termination_burst_goes_after_words() {
        let queue = Queue::new();
        queue.push(Message::from(Word::from("ab")));
        assert_eq!(queue.push_termination_burst(2), 2);
        assert_eq!(queue.len(), 3);

        assert_eq!(queue.pop_blocking(), Message::Word("ab".into()));
        assert!(queue.pop_blocking().is_terminate());
        assert!(queue.pop_blocking().is_terminate());
        assert!(queue.is_empty());
    }

    #[test]
    fn word_derefs_to_str() {
        let word = Word::from(String::from("dead"));
        assert_eq!(&*word, "dead");
        assert_eq!(word.len(), 4);
        assert_eq!(word.to_string(), "dead");
    }
}
