//! Error taxonomy for primitives that can fail.
//!
//! Search and comparison primitives never fail: "not found" is a sentinel
//! result, not an error. Only the DP engines (edit distance, alignment) and
//! the sequence argsort, which accept caller-supplied scratch buffers and
//! (for edit distance) caller-supplied bounds, can report a failure.

use core::fmt;

/// Failure modes shared by the edit-distance, alignment and argsort engines.
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The caller-supplied scratch buffer is smaller than the primitive
    /// requires. The primitive performed no work.
    #[cfg_attr(feature = "std", error("scratch buffer too small: need at least {needed} bytes, got {got}"))]
    InsufficientScratch {
        /// Minimum scratch length the primitive needs, in elements.
        needed: usize,
        /// Scratch length the caller actually supplied.
        got: usize,
    },
    /// A UTF-8 primitive was given a byte range that is not well-formed
    /// UTF-8. No codepoint is invented; the caller decides how to proceed.
    #[cfg_attr(feature = "std", error("input is not valid UTF-8 at byte offset {offset}"))]
    MalformedUtf8 {
        /// Byte offset of the first invalid sequence.
        offset: usize,
    },
    /// A null pointer was paired with a nonzero length, or a sequence of
    /// `N > 0` byte ranges was missing its offsets array.
    #[cfg_attr(feature = "std", error("invalid argument: {reason}"))]
    InvalidArgument {
        /// Human-readable description of which argument was invalid.
        reason: &'static str,
    },
}

#[cfg(not(feature = "std"))]
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InsufficientScratch { needed, got } => write!(
                f,
                "scratch buffer too small: need at least {} bytes, got {}",
                needed, got
            ),
            Error::MalformedUtf8 { offset } => {
                write!(f, "input is not valid UTF-8 at byte offset {}", offset)
            }
            Error::InvalidArgument { reason } => {
                write!(f, "invalid argument: {}", reason)
            }
        }
    }
}

/// Outcome of a bounded edit-distance computation.
///
/// When a caller supplies an upper bound and the true distance exceeds it,
/// the engine returns the bound rather than continuing to compute an exact
/// value it knows the caller isn't interested in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Bounded<T> {
    /// The exact value, which is `<=` the supplied bound.
    Exact(T),
    /// The true value exceeds the supplied bound; this is the bound itself.
    Exceeded(T),
}

impl<T: Copy> Bounded<T> {
    /// Returns the value regardless of whether it's exact or the bound.
    pub fn into_inner(self) -> T {
        match self {
            Bounded::Exact(v) | Bounded::Exceeded(v) => v,
        }
    }

    /// True if the bound was exceeded (the true distance is unknown beyond
    /// the returned value).
    pub fn is_exceeded(&self) -> bool {
        matches!(self, Bounded::Exceeded(_))
    }
}
