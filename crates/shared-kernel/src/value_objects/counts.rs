// crates/shared-kernel/src/value_objects/counts.rs
use serde::{Deserialize, Serialize};

/// Defines a `u64`-backed counter newtype.
///
/// Counters are 64 bits wide so that inputs larger than 4 GiB keep exact
/// totals; there is no overflow emulation.
macro_rules! count_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            #[inline]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn value(self) -> u64 {
                self.0
            }

            /// Adds one to the counter.
            #[inline]
            pub fn increment(&mut self) {
                self.0 += 1;
            }
        }

        impl PartialEq<u64> for $name {
            fn eq(&self, other: &u64) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for u64 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

count_newtype!(
    /// Number of bytes consumed from a stream, newline bytes included.
    ByteCount
);

count_newtype!(
    /// Number of newline (`\n`) bytes seen.
    LineCount
);

count_newtype!(
    /// Number of maximal runs of non-boundary bytes.
    WordCount
);
