/*!
Edit-distance engine: byte and UTF-8-codepoint Levenshtein distance, with
linear or affine gap cost.

Grounded on `strsim::generic_levenshtein` (the two-row Wagner-Fisher
recurrence and the "take two slices plus costs, return a scalar" shape),
generalized to caller-supplied costs, a caller-supplied bound with early
termination, a caller-supplied scratch buffer instead of an internal
allocation, an anti-diagonal traversal option, an affine-gap (Gotoh) variant,
and a UTF-8 codepoint variant. None of these primitives allocate; every
function that needs working memory takes a `scratch: &mut [u64]` slice sized
by its matching `*_scratch_len` helper.
*/

use crate::error::{Bounded, Error};

#[cfg(feature = "std")]
#[inline(always)]
fn log_bound_exceeded(bound: u64) {
    log::trace!("levenshtein early-exit: distance exceeds bound {}", bound);
}
#[cfg(not(feature = "std"))]
#[inline(always)]
fn log_bound_exceeded(_bound: u64) {}

/// Scratch length (in `u64` elements) [`levenshtein_bytes`] and
/// [`levenshtein_bytes_diagonal`] need for inputs of the given lengths.
pub fn levenshtein_scratch_len(a_len: usize, b_len: usize) -> usize {
    2 * (a_len.min(b_len) + 1)
}

/// Scratch length [`levenshtein_affine_bytes`] needs for inputs of the given
/// lengths.
pub fn affine_scratch_len(a_len: usize, b_len: usize) -> usize {
    4 * (a_len.min(b_len) + 1)
}

/// Scratch length [`levenshtein_utf8`] needs for inputs of the given byte
/// lengths (an upper bound: codepoint counts are never more than byte
/// counts).
pub fn levenshtein_utf8_scratch_len(a_len: usize, b_len: usize) -> usize {
    let cap = a_len.min(b_len);
    cap + 2 * (cap + 1)
}

#[inline(always)]
fn check_scratch(needed: usize, scratch: &[u64]) -> Result<(), Error> {
    if scratch.len() < needed {
        return Err(Error::InsufficientScratch { needed, got: scratch.len() });
    }
    Ok(())
}

/// Byte-level Levenshtein distance between `a` and `b` under unit or
/// caller-weighted substitution/gap costs, via two-row Wagner-Fisher.
///
/// `scratch` must be at least [`levenshtein_scratch_len`] elements; on
/// success every element may have been overwritten.
///
/// If `bound` is `Some` and the true distance provably exceeds it, returns
/// [`Bounded::Exceeded`] holding the bound rather than continuing to compute
/// an exact value the caller has said it doesn't need.
pub fn levenshtein_bytes(
    a: &[u8],
    b: &[u8],
    gap: u64,
    mismatch: u64,
    bound: Option<u64>,
    scratch: &mut [u64],
) -> Result<Bounded<u64>, Error> {
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let n = outer.len();
    let m = inner.len();
    let w = m + 1;
    check_scratch(2 * w, scratch)?;
    let (s0, s1) = scratch[..2 * w].split_at_mut(w);
    let mut prev = s0;
    let mut cur = s1;

    for (j, slot) in prev.iter_mut().enumerate() {
        *slot = j as u64 * gap;
    }
    for i in 1..=n {
        cur[0] = i as u64 * gap;
        let mut row_min = cur[0];
        for j in 1..=m {
            let sub_cost = if outer[i - 1] == inner[j - 1] { 0 } else { mismatch };
            let value = (prev[j - 1] + sub_cost).min(prev[j] + gap).min(cur[j - 1] + gap);
            cur[j] = value;
            row_min = row_min.min(value);
        }
        if let Some(bnd) = bound {
            if row_min > bnd {
                log_bound_exceeded(bnd);
                return Ok(Bounded::Exceeded(bnd));
            }
        }
        core::mem::swap(&mut prev, &mut cur);
    }
    Ok(finish(prev[m], bound))
}

/// Same recurrence as [`levenshtein_bytes`], but visiting cells in
/// anti-diagonal order: all cells of anti-diagonal `k = i + j` depend only
/// on anti-diagonals `k-1` and `k-2`, so (unlike row-major order) there is
/// no data dependency between cells on the same diagonal. Useful when a
/// caller wants to fan the per-diagonal work out themselves; this function
/// still runs it sequentially.
pub fn levenshtein_bytes_diagonal(
    a: &[u8],
    b: &[u8],
    gap: u64,
    mismatch: u64,
    bound: Option<u64>,
    scratch: &mut [u64],
) -> Result<Bounded<u64>, Error> {
    let n = a.len();
    let m = b.len();
    let w = n.min(m) + 1;
    check_scratch(3 * w, scratch)?;
    let (c0, rest) = scratch[..3 * w].split_at_mut(w);
    let (c1, c2) = rest.split_at_mut(w);
    let mut chunks = [c0, c1, c2];
    let ilo = |k: usize| k.saturating_sub(m);

    for k in 0..=(n + m) {
        let i_lo = ilo(k);
        let i_hi = k.min(n);
        let mut diag_min = u64::MAX;
        for i in i_lo..=i_hi {
            let j = k - i;
            let value = if i == 0 {
                j as u64 * gap
            } else if j == 0 {
                i as u64 * gap
            } else {
                let sub_cost = if a[i - 1] == b[j - 1] { 0 } else { mismatch };
                let ilo2 = ilo(k - 2);
                let ilo1 = ilo(k - 1);
                let diag = chunks[(k + 1) % 3][i - 1 - ilo2];
                let up = chunks[(k + 2) % 3][i - 1 - ilo1];
                let left = chunks[(k + 2) % 3][i - ilo1];
                (diag + sub_cost).min(up + gap).min(left + gap)
            };
            chunks[k % 3][i - i_lo] = value;
            diag_min = diag_min.min(value);
        }
        if let Some(bnd) = bound {
            if diag_min > bnd {
                log_bound_exceeded(bnd);
                return Ok(Bounded::Exceeded(bnd));
            }
        }
    }
    let i_lo_final = ilo(n + m);
    let result = chunks[(n + m) % 3][n - i_lo_final];
    Ok(finish(result, bound))
}

/// Affine-gap (Gotoh) byte-level edit distance: a gap costs `open` to start
/// and `extend` for each additional gap character.
pub fn levenshtein_affine_bytes(
    a: &[u8],
    b: &[u8],
    open: u64,
    extend: u64,
    mismatch: u64,
    bound: Option<u64>,
    scratch: &mut [u64],
) -> Result<Bounded<u64>, Error> {
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let n = outer.len();
    let m = inner.len();
    let w = m + 1;
    check_scratch(4 * w, scratch)?;
    const INF: u64 = u64::MAX / 4;
    let (s0, rest) = scratch[..4 * w].split_at_mut(w);
    let (s1, rest) = rest.split_at_mut(w);
    let (s2, s3) = rest.split_at_mut(w);
    let mut prev_d = s0;
    let mut prev_e = s1;
    let mut cur_d = s2;
    let mut cur_e = s3;

    prev_d[0] = 0;
    prev_e[0] = INF;
    for j in 1..=m {
        prev_d[j] = open + (j as u64 - 1) * extend;
        prev_e[j] = INF;
    }

    for i in 1..=n {
        cur_d[0] = open + (i as u64 - 1) * extend;
        cur_e[0] = (prev_d[0] + open).min(prev_e[0] + extend);
        let mut f_prev = INF;
        let mut row_min = cur_d[0];
        for j in 1..=m {
            let e = (prev_d[j] + open).min(prev_e[j] + extend);
            let f = (cur_d[j - 1] + open).min(f_prev + extend);
            let sub_cost = if outer[i - 1] == inner[j - 1] { 0 } else { mismatch };
            let diag = prev_d[j - 1] + sub_cost;
            let value = diag.min(e).min(f);
            cur_d[j] = value;
            cur_e[j] = e;
            f_prev = f;
            row_min = row_min.min(value);
        }
        if let Some(bnd) = bound {
            if row_min > bnd {
                log_bound_exceeded(bnd);
                return Ok(Bounded::Exceeded(bnd));
            }
        }
        core::mem::swap(&mut prev_d, &mut cur_d);
        core::mem::swap(&mut prev_e, &mut cur_e);
    }
    Ok(finish(prev_d[m], bound))
}

/// UTF-8 codepoint Levenshtein distance: identical recurrence to
/// [`levenshtein_bytes`], but each "symbol" is a decoded codepoint rather
/// than a raw byte, so a multi-byte character counts as a single edit.
///
/// Returns [`Error::MalformedUtf8`] if either input is not well-formed UTF-8;
/// no codepoint is invented. `scratch` must be at least
/// [`levenshtein_utf8_scratch_len`] elements: the first `min(a.len(),
/// b.len())` entries hold the decoded codepoints of whichever input has
/// fewer bytes, the rest are the two DP rows.
pub fn levenshtein_utf8(
    a: &[u8],
    b: &[u8],
    gap: u64,
    mismatch: u64,
    bound: Option<u64>,
    scratch: &mut [u64],
) -> Result<Bounded<u64>, Error> {
    let a_str = core::str::from_utf8(a)
        .map_err(|e| Error::MalformedUtf8 { offset: e.valid_up_to() })?;
    let b_str = core::str::from_utf8(b)
        .map_err(|e| Error::MalformedUtf8 { offset: e.valid_up_to() })?;
    let (outer_str, inner_str) =
        if a.len() >= b.len() { (a_str, b_str) } else { (b_str, a_str) };
    let cap = a.len().min(b.len());
    check_scratch(cap + 2 * (cap + 1), scratch)?;

    let (cp_region, rows) = scratch.split_at_mut(cap);
    let mut m = 0usize;
    for (slot, ch) in cp_region.iter_mut().zip(inner_str.chars()) {
        *slot = ch as u64;
        m += 1;
    }
    let w = m + 1;
    let (s0, s1) = rows[..2 * w].split_at_mut(w);
    let mut prev = s0;
    let mut cur = s1;
    for (j, slot) in prev.iter_mut().enumerate() {
        *slot = j as u64 * gap;
    }

    let mut i = 0usize;
    for oc in outer_str.chars() {
        i += 1;
        cur[0] = i as u64 * gap;
        let mut row_min = cur[0];
        for j in 1..=m {
            let sub_cost = if oc as u64 == cp_region[j - 1] { 0 } else { mismatch };
            let value = (prev[j - 1] + sub_cost).min(prev[j] + gap).min(cur[j - 1] + gap);
            cur[j] = value;
            row_min = row_min.min(value);
        }
        if let Some(bnd) = bound {
            if row_min > bnd {
                log_bound_exceeded(bnd);
                return Ok(Bounded::Exceeded(bnd));
            }
        }
        core::mem::swap(&mut prev, &mut cur);
    }
    Ok(finish(prev[m], bound))
}

#[inline(always)]
fn finish(result: u64, bound: Option<u64>) -> Bounded<u64> {
    match bound {
        Some(bnd) if result > bnd => Bounded::Exceeded(bnd),
        _ => Bounded::Exact(result),
    }
}

/// A reusable configuration for repeated Levenshtein computations with the
/// same costs, mirroring the teacher's `FinderBuilder` pattern.
#[derive(Clone, Copy, Debug)]
pub struct LevenshteinConfig {
    gap: u64,
    mismatch: u64,
    bound: Option<u64>,
    affine_extend: Option<u64>,
}

impl Default for LevenshteinConfig {
    fn default() -> LevenshteinConfig {
        LevenshteinConfig { gap: 1, mismatch: 1, bound: None, affine_extend: None }
    }
}

impl LevenshteinConfig {
    /// Creates a config with unit gap and mismatch costs and no bound.
    pub fn new() -> LevenshteinConfig {
        LevenshteinConfig::default()
    }

    /// Sets the per-character gap cost (or, if [`LevenshteinConfig::affine`]
    /// has been called, the gap-open cost).
    pub fn gap_cost(mut self, cost: u64) -> LevenshteinConfig {
        self.gap = cost;
        self
    }

    /// Sets the substitution cost for a mismatched pair.
    pub fn mismatch_cost(mut self, cost: u64) -> LevenshteinConfig {
        self.mismatch = cost;
        self
    }

    /// Enables early termination: if the distance provably exceeds `bound`,
    /// computation stops and the bound is returned instead.
    pub fn bound(mut self, bound: u64) -> LevenshteinConfig {
        self.bound = Some(bound);
        self
    }

    /// Switches to affine gap costs: `gap_cost` becomes the gap-open cost
    /// and `extend` is charged per additional gap character.
    pub fn affine(mut self, extend: u64) -> LevenshteinConfig {
        self.affine_extend = Some(extend);
        self
    }

    /// The scratch length [`LevenshteinConfig::compute`] needs for inputs of
    /// the given lengths.
    pub fn scratch_len(&self, a_len: usize, b_len: usize) -> usize {
        match self.affine_extend {
            Some(_) => affine_scratch_len(a_len, b_len),
            None => levenshtein_scratch_len(a_len, b_len),
        }
    }

    /// Computes the distance between `a` and `b` under this configuration.
    pub fn compute(
        &self,
        a: &[u8],
        b: &[u8],
        scratch: &mut [u64],
    ) -> Result<Bounded<u64>, Error> {
        match self.affine_extend {
            Some(extend) => {
                levenshtein_affine_bytes(a, b, self.gap, extend, self.mismatch, self.bound, scratch)
            }
            None => levenshtein_bytes(a, b, self.gap, self.mismatch, self.bound, scratch),
        }
    }
}
