//! Consumer side.

use branch_hints::unlikely;
use crate::dictionary::Dictionary;
use crate::message::{Message, Word};
use crate::queue::Queue;

/// What a worker popped before its termination marker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkerReport {
    /// In pop order.
    pub words: Vec<Word>,
    /// Subset of `words` found in the dictionary.
    pub detected: Vec<Word>,
}

pub struct Worker<'q> {
    queue: &'q Queue<Message>,
    dictionary: Dictionary,
}

impl<'q> Worker<'q> {
    pub fn new(queue: &'q Queue<Message>, dictionary: Dictionary) -> Self {
        if dictionary.is_empty() {
            tracing::warn!("empty dictionary, nothing will be detected");
        } else {
            tracing::debug!(words = dictionary.len(), "dictionary loaded");
        }
        Self { queue, dictionary }
    }

    /// Returns `true` if `word` is a dictionary word.
    pub fn process(&self, word: &Word) -> bool {
        let hit = self.dictionary.contains(word);
        if hit {
            tracing::info!("detected word: {word}");
        }
        hit
    }

    /// Pop until a [Message::Terminate] shows up. Never pushes.
    pub fn run(self) -> WorkerReport {
        let mut report = WorkerReport::default();
        loop {
            let word = match self.queue.pop_blocking() {
                Message::Word(word) => word,
                Message::Terminate => break,
            };
            if unlikely(self.process(&word)) {
                report.detected.push(word.clone());
            }
            report.words.push(word);
        }
        tracing::info!(popped = report.words.len(), "ended");
        report
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn detects_dictionary_words_only() {
        let queue = Queue::new();
        for word in ["dead", "zzz", "", "ebbed"] {
            queue.push(Message::Word(word.into()));
        }
        queue.push_termination_burst(1);

        let report = Worker::new(&queue, Dictionary::default()).run();
        assert_eq!(report.words, ["dead", "zzz", "", "ebbed"].map(Word::from));
        assert_eq!(report.detected, ["dead", "ebbed"].map(Word::from));
        assert!(queue.is_empty());
    }

    #[test]
    fn empty_dictionary_detects_nothing() {
        let queue = Queue::new();
        queue.push(Message::Word("dead".into()));
        queue.push_termination_burst(1);

        let report = Worker::new(&queue, Dictionary::new(&[])).run();
        assert_eq!(report.words, vec![Word::from("dead")]);
        assert!(report.detected.is_empty());
    }

    #[test]
    fn stops_at_first_marker() {
        let queue = Queue::new();
        queue.push(Message::Word("a".into()));
        queue.push_termination_burst(2);
        queue.push(Message::Word("late".into()));

        let report = Worker::new(&queue, Dictionary::default()).run();
        assert_eq!(report.words, vec![Word::from("a")]);
        // Second marker and everything after it is left for others.
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn blocks_until_marker_arrives() {
        let queue = Queue::new();
        let report = std::thread::scope(|s| {
            let worker = s.spawn(|| Worker::new(&queue, Dictionary::default()).run());
            std::thread::sleep(std::time::Duration::from_millis(10));
            queue.push(Message::Word("dead".into()));
            queue.push_termination_burst(1);
            worker.join().unwrap()
        });
        assert_eq!(report.detected, vec![Word::from("dead")]);
    }
}
