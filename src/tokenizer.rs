//! Producer side.
//!
//! Reads a [ByteSource] until end-of-stream, splitting on [BOUNDARY].
//! Each finished word is pushed as soon as it is seen, waking one consumer.
//! End-of-stream flushes the last word and pushes one [Message::Terminate]
//! per consumer in a single burst.
//!
//! Only one tokenizer may feed a queue: termination markers are counted per
//! producer, and a second producer would hand out markers while the first
//! one is still pushing words.

use crate::config::BOUNDARY;
use crate::message::{Message, Word};
use crate::queue::Queue;
use crate::source::ByteSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Accumulating,
    Done,
}

/// What the tokenizer pushed, in push order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenizerReport {
    pub words: Vec<Word>,
    pub markers: usize,
}

pub struct Tokenizer<'q, S> {
    source: S,
    queue: &'q Queue<Message>,
    consumers: usize,
    accumulator: String,
    /// At least one byte was read.
    started: bool,
    state: State,
    report: TokenizerReport,
}

impl<'q, S: ByteSource> Tokenizer<'q, S> {
    pub fn new(source: S, queue: &'q Queue<Message>, consumers: usize) -> Self {
        Self {
            source,
            queue,
            consumers,
            accumulator: String::new(),
            started: false,
            state: State::Accumulating,
            report: Default::default(),
        }
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// Feed one read result. `None` is end-of-stream.
    ///
    /// No-op once [State::Done] is reached.
    pub fn feed(&mut self, byte: Option<u8>) -> State {
        if self.state == State::Done {
            return State::Done;
        }
        if byte.is_some() {
            self.started = true;
        }
        match byte {
            Some(BOUNDARY) => {
                // Empty words between consecutive boundaries are real words too.
                let word = Word::from(std::mem::take(&mut self.accumulator));
                self.push(word);
            }
            Some(byte) => self.accumulator.push(char::from(byte)),
            None => {
                // A stream ending on a boundary still has an empty last word.
                // Only a stream with no bytes at all has none.
                if self.started {
                    let word = Word::from(std::mem::take(&mut self.accumulator));
                    self.push(word);
                }
                self.report.markers = self.queue.push_termination_burst(self.consumers);
                tracing::info!(markers = self.report.markers, "pushed termination markers");
                self.state = State::Done;
            }
        }
        self.state
    }

    #[inline]
    fn push(&mut self, word: Word) {
        self.report.words.push(word.clone());
        tracing::info!("pushed {word:?}");
        self.queue.push(Message::Word(word));
    }

    /// Drain the source. Returns once the termination burst is pushed.
    pub fn run(mut self) -> TokenizerReport {
        while self.state == State::Accumulating {
            let byte = self.source.read_byte();
            self.feed(byte);
        }
        tracing::info!("ended");
        self.report
    }
}

#[cfg(test)]
mod test {
    use itertools::assert_equal;
    use crate::source::ScriptedSource;
    use super::*;

    fn drain(queue: &Queue<Message>) -> Vec<Message> {
        std::iter::from_fn(|| queue.try_pop()).collect()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::from(*w)).collect()
    }

    #[test]
    fn splits_on_boundary() {
        let queue = Queue::new();
        let report = Tokenizer::new(ScriptedSource::new("ab cd ab"), &queue, 2).run();

        assert_eq!(report.words, words(&["ab", "cd", "ab"]));
        assert_eq!(report.markers, 2);

        let expected = words(&["ab", "cd", "ab"]).into_iter()
            .map(Message::Word)
            .chain([Message::Terminate, Message::Terminate]);
        assert_equal(drain(&queue), expected);
    }

    #[test]
    fn empty_stream_pushes_only_markers() {
        let queue = Queue::new();
        let report = Tokenizer::new(ScriptedSource::new(""), &queue, 2).run();

        assert!(report.words.is_empty());
        assert_eq!(report.markers, 2);
        assert_equal(drain(&queue), [Message::Terminate, Message::Terminate]);
    }

    #[test]
    fn keeps_empty_words_between_boundaries() {
        let queue = Queue::new();
        let report = Tokenizer::new(ScriptedSource::new("  a  b "), &queue, 1).run();
        assert_eq!(report.words, words(&["", "", "a", "", "b", ""]));
        assert_eq!(queue.len(), 7);
    }

    #[test]
    fn trailing_boundary_gives_empty_last_word() {
        let queue = Queue::new();
        let report = Tokenizer::new(ScriptedSource::new("ab "), &queue, 2).run();

        let split: Vec<Word> = "ab ".split(' ').map(Word::from).collect();
        assert_eq!(report.words, split);
        assert_eq!(report.words, words(&["ab", ""]));
        assert_eq!(queue.len(), 2 + 2);

        let queue = Queue::new();
        let report = Tokenizer::new(ScriptedSource::new(" "), &queue, 1).run();
        assert_eq!(report.words, words(&["", ""]));
    }

    #[test]
    fn state_machine() {
        let queue = Queue::new();
        let mut tokenizer = Tokenizer::new(ScriptedSource::new(""), &queue, 3);
        assert_eq!(tokenizer.state(), State::Accumulating);

        assert_eq!(tokenizer.feed(Some(b'a')), State::Accumulating);
        assert!(queue.is_empty());
        assert_eq!(tokenizer.feed(Some(b' ')), State::Accumulating);
        assert_eq!(queue.len(), 1);
        assert_eq!(tokenizer.feed(Some(b'b')), State::Accumulating);
        assert_eq!(tokenizer.feed(None), State::Done);
        assert_eq!(queue.len(), 2 + 3);

        // Nothing more is pushed once done.
        assert_eq!(tokenizer.feed(Some(b'c')), State::Done);
        assert_eq!(tokenizer.feed(None), State::Done);
        assert_eq!(queue.len(), 5);
    }
}
