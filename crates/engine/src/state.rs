// crates/engine/src/state.rs
use count_stream_shared_kernel::{ByteCount, LineCount, WordCount};

use crate::tracker::{self, Transition, WordState};

/// Mutable accumulator owned by a single run.
///
/// `bytes` grows by one per consumed byte, `lines` only on `\n`, and `words`
/// only when the tracker moves from outside a word to inside one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisState {
    bytes: ByteCount,
    lines: LineCount,
    words: WordCount,
    word_state: WordState,
}

impl AnalysisState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts for one byte.
    pub fn consume(&mut self, byte: u8) {
        self.bytes.increment();
        if byte == b'\n' {
            self.lines.increment();
        }
        let (next, transition) = tracker::transition(self.word_state, byte);
        self.word_state = next;
        if transition == Transition::NewWord {
            self.words.increment();
        }
    }

    pub const fn bytes(&self) -> ByteCount {
        self.bytes
    }

    pub const fn lines(&self) -> LineCount {
        self.lines
    }

    pub const fn words(&self) -> WordCount {
        self.words
    }

    pub const fn in_word(&self) -> bool {
        self.word_state.is_in_word()
    }
}
