//! Byte streams the producer reads from.

use std::time::Duration;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use crate::config::SourceConfig;

/// Pull-based byte stream.
///
/// A call may block for an arbitrary (bounded) time. Once `None` is
/// returned, every later call returns `None` too.
pub trait ByteSource {
    fn read_byte(&mut self) -> Option<u8>;

    /// [Iterator] over the remaining bytes.
    #[inline]
    fn bytes(self) -> Bytes<Self>
    where
        Self: Sized
    {
        Bytes { source: self }
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn read_byte(&mut self) -> Option<u8> {
        (**self).read_byte()
    }
}

/// Constructed by [ByteSource::bytes()].
pub struct Bytes<S> {
    source: S,
}

impl<S: ByteSource> Iterator for Bytes<S> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        self.source.read_byte()
    }
}

/// Random bytes from a fixed alphabet, with a random pause before each one.
pub struct RandomSource {
    rng: StdRng,
    alphabet: &'static [u8],
    max_delay: Duration,
    remaining: usize,
}

impl RandomSource {
    pub fn new(config: &SourceConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            alphabet: config.alphabet,
            max_delay: config.max_delay,
            remaining: config.len,
        }
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl ByteSource for RandomSource {
    fn read_byte(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        if !self.max_delay.is_zero() {
            let delay = self.rng.gen_range(Duration::ZERO..self.max_delay);
            std::thread::sleep(delay);
        }

        let byte = self.alphabet.choose(&mut self.rng).copied();
        if byte.is_none() {
            self.remaining = 0;
        }
        byte
    }
}

/// Replays a fixed byte string.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    script: Vec<u8>,
    position: usize,
    delay: Duration,
}

impl ScriptedSource {
    pub fn new(script: impl Into<Vec<u8>>) -> Self {
        Self {
            script: script.into(),
            position: 0,
            delay: Duration::ZERO,
        }
    }

    /// Sleep `delay` before every successful read.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl ByteSource for ScriptedSource {
    fn read_byte(&mut self) -> Option<u8> {
        let byte = *self.script.get(self.position)?;
        self.position += 1;
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        Some(byte)
    }
}
