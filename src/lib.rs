/*!
Portable, high-throughput primitives over raw byte ranges.

This crate provides exact substring search (forward and reverse), byte/byte-set
search, lexicographic ordering, a Levenshtein edit-distance engine (byte and
UTF-8 codepoint, linear or affine gap cost), a Needleman-Wunsch/Smith-Waterman
alignment-score engine, and a stable lexicographic argsort over a sequence of
byte ranges.

Each primitive is organized the way `memchr` organizes substring search: a
portable scalar/SWAR fallback that's always correct, an accelerated path
gated on runtime CPU feature detection (the `std` feature), and a thin
dispatcher in [`dispatch`] deciding between them. No primitive allocates
implicitly; anything that needs working memory (the edit-distance and
alignment engines, and argsort) takes a caller-supplied scratch buffer sized
by a paired `*_scratch_len` helper.
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![doc(html_root_url = "https://docs.rs/byterange/")]

// Supporting 8-bit (or others) would be fine. If you need it, please submit a
// bug report.
#[cfg(not(any(
    target_pointer_width = "16",
    target_pointer_width = "32",
    target_pointer_width = "64"
)))]
compile_error!("byterange currently not supported on non-{16,32,64}");

pub mod align;
pub mod byteset;
pub mod dispatch;
pub mod edit;
pub mod error;
pub mod memmem;
pub mod order;
pub mod sort;

#[cfg(test)]
mod tests;
