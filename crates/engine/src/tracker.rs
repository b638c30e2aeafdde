// crates/engine/src/tracker.rs
//! Word-boundary state machine.
//!
//! Boundary bytes are exactly space, tab and newline. Every other byte,
//! carriage return and form feed included, is part of a word.

/// Position of the tracker relative to a word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WordState {
    #[default]
    NotInWord,
    InWord,
}

impl WordState {
    #[inline]
    pub const fn is_in_word(self) -> bool {
        matches!(self, Self::InWord)
    }
}

/// What a single byte did to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The byte is a boundary; the tracker is now outside a word.
    Boundary,
    /// The byte opened a new word.
    NewWord,
    /// The byte extended the current word.
    Continuation,
}

#[inline]
pub const fn is_boundary(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n')
}

/// Computes the next state for `byte`.
#[inline]
pub const fn transition(state: WordState, byte: u8) -> (WordState, Transition) {
    if is_boundary(byte) {
        (WordState::NotInWord, Transition::Boundary)
    } else if state.is_in_word() {
        (WordState::InWord, Transition::Continuation)
    } else {
        (WordState::InWord, Transition::NewWord)
    }
}
