//! Short-needle exact search (needle length 1..=4).
//!
//! The portable path is adapted from the classic SWAR `memchr` trick the
//! teacher's (unretrieved) `fallback` module is referenced by from
//! `memchr::x86::mod`'s `ifunc!` macro: broadcast the byte being searched
//! for across every lane of a machine word, XOR against a loaded chunk, and
//! use the "subtract-one-and-mask" trick to turn any zero byte (i.e. any
//! matching lane) into a set high bit. `find1`/`rfind1` implement exactly
//! this for the 1-byte case (spec's `find_byte`/`rfind_byte`); `find_k`/
//! `rfind_k` generalize it to needles of 2, 3 or 4 bytes by comparing a
//! packed little-endian pattern against each valid lane offset of an
//! 8-byte window.
//!
//! When `std` is enabled and the dispatcher reports vector support, the
//! `x86` submodule's kernel (adapted from the teacher's
//! `memmem::genericsimd` + `memmem::vector::Vector`) is used instead: it
//! broadcasts the needle's first and last byte into a wide register,
//! compares both in parallel across an unaligned load, and only runs a full
//! [`crate::order::equal`] check on an actual candidate.

const LO: u64 = 0x0101_0101_0101_0101;
const HI: u64 = 0x8080_8080_8080_8080;

#[inline(always)]
fn has_zero_byte(x: u64) -> u64 {
    x.wrapping_sub(LO) & !x & HI
}

#[inline(always)]
fn broadcast(byte: u8) -> u64 {
    (byte as u64).wrapping_mul(LO)
}

/// Smallest offset of `byte` in `haystack`, or `None`.
#[inline]
pub(crate) fn find1(haystack: &[u8], byte: u8) -> Option<usize> {
    #[cfg(all(feature = "std", target_arch = "x86_64"))]
    {
        if let Some(hit) = x86::find1(haystack, byte) {
            return Some(hit);
        }
        if crate::dispatch::capabilities() != crate::dispatch::Capabilities::NONE {
            return None;
        }
    }
    swar_find1(haystack, byte)
}

/// Largest offset of `byte` in `haystack`, or `None`.
#[inline]
pub(crate) fn rfind1(haystack: &[u8], byte: u8) -> Option<usize> {
    swar_rfind1(haystack, byte)
}

fn swar_find1(haystack: &[u8], byte: u8) -> Option<usize> {
    let mut i = 0;
    let vbyte = broadcast(byte);
    while i + 8 <= haystack.len() {
        // SAFETY: i + 8 <= haystack.len(), unaligned load.
        let word = unsafe {
            (haystack.as_ptr().add(i) as *const u64).read_unaligned()
        }
        .to_le();
        let mask = has_zero_byte(word ^ vbyte);
        if mask != 0 {
            return Some(i + (mask.trailing_zeros() / 8) as usize);
        }
        i += 8;
    }
    while i < haystack.len() {
        if haystack[i] == byte {
            return Some(i);
        }
        i += 1;
    }
    None
}

fn swar_rfind1(haystack: &[u8], byte: u8) -> Option<usize> {
    let len = haystack.len();
    let mut end = len;
    let vbyte = broadcast(byte);
    while end >= 8 {
        let i = end - 8;
        // SAFETY: i + 8 <= len, unaligned load.
        let word = unsafe {
            (haystack.as_ptr().add(i) as *const u64).read_unaligned()
        }
        .to_le();
        let mask = has_zero_byte(word ^ vbyte);
        if mask != 0 {
            let highest_set = 63 - mask.leading_zeros();
            return Some(i + (highest_set / 8) as usize);
        }
        end = i;
    }
    let mut i = end;
    while i > 0 {
        i -= 1;
        if haystack[i] == byte {
            return Some(i);
        }
    }
    None
}

/// Packs a needle of length 1..=4 into a little-endian integer plus a mask
/// covering exactly its length in bytes.
#[inline(always)]
fn pack(needle: &[u8]) -> (u32, u32) {
    debug_assert!(!needle.is_empty() && needle.len() <= 4);
    let mut pat = 0u32;
    for (j, &b) in needle.iter().enumerate() {
        pat |= (b as u32) << (8 * j);
    }
    let mask = if needle.len() == 4 {
        u32::MAX
    } else {
        (1u32 << (8 * needle.len())) - 1
    };
    (pat, mask)
}

/// Smallest offset of `needle` (length 2..=4) in `haystack`, or `None`.
pub(crate) fn find_k(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let l = needle.len();
    if haystack.len() < l {
        return None;
    }
    #[cfg(all(feature = "std", target_arch = "x86_64"))]
    {
        if let Some(hit) = x86::find_k(haystack, needle) {
            return Some(hit);
        }
        if crate::dispatch::capabilities() != crate::dispatch::Capabilities::NONE {
            return None;
        }
    }
    let (pat, mask) = pack(needle);
    let last_start = haystack.len() - l;
    let mut i = 0usize;
    while i <= last_start {
        let remaining = haystack.len() - i;
        let chunk_len = remaining.min(8);
        let mut buf = [0u8; 8];
        buf[..chunk_len].copy_from_slice(&haystack[i..i + chunk_len]);
        let word = u64::from_le_bytes(buf);
        let window = (chunk_len - l + 1).min(last_start - i + 1);
        for off in 0..window {
            let lane = ((word >> (8 * off)) & mask as u64) as u32;
            if lane == pat {
                return Some(i + off);
            }
        }
        i += window;
    }
    None
}

/// Largest offset of `needle` (length 2..=4) in `haystack`, or `None`.
pub(crate) fn rfind_k(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let l = needle.len();
    if haystack.len() < l {
        return None;
    }
    let (pat, mask) = pack(needle);
    let last_start = haystack.len() - l;
    let mut start = last_start as isize;
    while start >= 0 {
        let i = start as usize;
        let mut lane = 0u32;
        for j in 0..l {
            lane |= (haystack[i + j] as u32) << (8 * j);
        }
        if lane & mask == pat {
            return Some(i);
        }
        start -= 1;
    }
    None
}

#[cfg(all(feature = "std", target_arch = "x86_64"))]
mod x86 {
    use crate::dispatch::{capabilities, Capabilities};
    use crate::memmem::vector::Vector;
    use crate::order::equal;
    use core::arch::x86_64::{__m128i, __m256i};
    use core::mem::size_of;

    /// Vectorized single-byte search: broadcast the byte, compare against
    /// every lane of a wide unaligned load, and decode the match mask.
    ///
    /// Always searches exhaustively (never declines) so that callers can
    /// treat a `None` result as "not found" rather than "too short to run".
    pub(super) fn find1(haystack: &[u8], byte: u8) -> Option<usize> {
        if capabilities().contains(Capabilities::AVX2) {
            // SAFETY: AVX2 support was confirmed by the dispatcher.
            unsafe { find1_avx2(haystack, byte) }
        } else if capabilities().contains(Capabilities::SSE2) {
            // SAFETY: SSE2 is part of the x86_64 baseline.
            unsafe { find1_sse2(haystack, byte) }
        } else {
            None
        }
    }

    #[target_feature(enable = "avx2")]
    unsafe fn find1_avx2(haystack: &[u8], byte: u8) -> Option<usize> {
        find1_with::<__m256i>(haystack, byte)
    }

    #[target_feature(enable = "sse2")]
    unsafe fn find1_sse2(haystack: &[u8], byte: u8) -> Option<usize> {
        find1_with::<__m128i>(haystack, byte)
    }

    /// Requires `haystack[p..p+width)` to be in bounds for every `p` the
    /// vector loop visits; the loop bound is chosen exactly so that holds,
    /// and anything past it falls through to the scalar tail below, which
    /// also covers the whole haystack whenever it's shorter than `width` to
    /// begin with (the vector loop then never runs at all).
    #[inline(always)]
    unsafe fn find1_with<V: Vector>(haystack: &[u8], byte: u8) -> Option<usize> {
        let width = size_of::<V>();
        let len = haystack.len();
        let mut p = 0usize;
        if len >= width {
            let vbyte = V::splat(byte);
            let vec_end = len - width;
            while p <= vec_end {
                let chunk = V::load_unaligned(haystack.as_ptr().add(p));
                let mask = chunk.cmpeq(vbyte).movemask();
                if mask != 0 {
                    return Some(p + mask.trailing_zeros() as usize);
                }
                p += width;
            }
        }
        while p < len {
            if haystack[p] == byte {
                return Some(p);
            }
            p += 1;
        }
        None
    }

    /// Vectorized short-needle search for lengths 2..=4: broadcast the
    /// first and last byte of the needle, AND their match masks, and
    /// confirm any candidate with a full [`equal`] check. Adapted from the
    /// teacher's `memmem::genericsimd::fwd_find`, specialized to the
    /// fixed-offset (first/last byte) rare-byte choice that always applies
    /// for such short needles.
    pub(super) fn find_k(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        debug_assert!(!needle.is_empty() && needle.len() <= 4);
        if capabilities().contains(Capabilities::AVX2) {
            unsafe { find_k_avx2(haystack, needle) }
        } else if capabilities().contains(Capabilities::SSE2) {
            unsafe { find_k_sse2(haystack, needle) }
        } else {
            None
        }
    }

    #[target_feature(enable = "avx2")]
    unsafe fn find_k_avx2(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        find_k_with::<__m256i>(haystack, needle)
    }

    #[target_feature(enable = "sse2")]
    unsafe fn find_k_sse2(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        find_k_with::<__m128i>(haystack, needle)
    }

    /// Requires both `haystack[p..p+width)` and `haystack[p+l-1..p+l-1+width)`
    /// to be in bounds for every `p` the main loop visits; the loop bound
    /// `vec_end` is chosen exactly so that holds, and anything past it (plus
    /// any out-of-range candidate within the last masked chunk) falls
    /// through to the scalar tail.
    #[inline(always)]
    unsafe fn find_k_with<V: Vector>(
        haystack: &[u8],
        needle: &[u8],
    ) -> Option<usize> {
        let width = size_of::<V>();
        let l = needle.len();
        let len = haystack.len();
        if len < l {
            return None;
        }
        let max_start = len - l;
        let mut p = 0usize;
        if len >= width + l - 1 {
            let first = V::splat(needle[0]);
            let last = V::splat(needle[l - 1]);
            let vec_end = len - (width + l - 1);
            while p <= vec_end {
                let chunk0 = V::load_unaligned(haystack.as_ptr().add(p));
                let chunk1 = V::load_unaligned(haystack.as_ptr().add(p + l - 1));
                let mut mask =
                    chunk0.cmpeq(first).and(chunk1.cmpeq(last)).movemask();
                while mask != 0 {
                    let off = mask.trailing_zeros() as usize;
                    let cand = p + off;
                    if cand <= max_start && equal(&haystack[cand..], needle, l) {
                        return Some(cand);
                    }
                    mask &= mask - 1;
                }
                p += width;
            }
        }
        while p <= max_start {
            if equal(&haystack[p..], needle, l) {
                return Some(p);
            }
            p += 1;
        }
        None
    }
}
