//! Parameters of the simulated byte stream.
//!
//! ```
//! # use std::time::Duration;
//! let config = hopper::SourceConfig::builder()
//!     .len(16)
//!     .max_delay(Duration::ZERO)
//!     .seed(7)
//!     .build();
//! assert_eq!(config.len, 16);
//! ```

use std::time::Duration;

/// Byte that separates words.
pub const BOUNDARY: u8 = b' ';

/// Bytes [RandomSource] draws from.
///
/// [RandomSource]: crate::source::RandomSource
pub const ALPHABET: &[u8] = b" abcde";

#[derive(Clone, Debug)]
pub struct SourceConfig {
    /// Number of bytes read before end-of-stream.
    pub len: usize,
    /// Each read sleeps a uniformly random duration in `[0, max_delay)`.
    pub max_delay: Duration,
    pub alphabet: &'static [u8],
    /// Fixed RNG seed. Entropy-seeded when `None`.
    pub seed: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            len: 1 << 6,
            max_delay: Duration::from_millis(100),
            alphabet: ALPHABET,
            seed: None,
        }
    }
}

impl SourceConfig {
    pub fn builder() -> SourceConfigBuilder {
        SourceConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct SourceConfigBuilder {
    config: SourceConfig,
}

impl SourceConfigBuilder {
    pub fn len(mut self, len: usize) -> Self {
        self.config.len = len;
        self
    }

    /// Zero disables sleeping.
    pub fn max_delay(mut self, max_delay: Duration) -> Self {
        self.config.max_delay = max_delay;
        self
    }

    /// Empty alphabet makes the source end immediately.
    pub fn alphabet(mut self, alphabet: &'static [u8]) -> Self {
        self.config.alphabet = alphabet;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn build(self) -> SourceConfig {
        self.config
    }
}
