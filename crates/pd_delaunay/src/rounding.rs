//! Scoped control of the hardware floating-point rounding mode.
//!
//! Purpose
//! - Give directed-rounding interval arithmetic a way to switch the FPU
//!   rounding mode for the duration of a lower/upper bound computation and
//!   guarantee it is put back afterwards, on every exit path.
//!
//! Why this design
//! - The underlying primitives (`fegetround`/`fesetround`) are process-wide
//!   C library state, reached here through `libc` rather than hand-rolled
//!   platform asm. Wrapping them in an RAII guard means the restore happens
//!   in `Drop`, so it runs even if the scope unwinds from a panic — the
//!   manual "restore on every return statement" discipline this pattern
//!   replaces is easy to get wrong by omission.
//! - This module is the only place in the crate that uses `unsafe`.

/// Round toward negative infinity, used for computing interval lower bounds.
pub(crate) const DOWNWARD: i32 = libc::FE_DOWNWARD;
/// Round toward positive infinity, used for computing interval upper bounds.
pub(crate) const UPWARD: i32 = libc::FE_UPWARD;

/// Scoped change of the thread's floating-point rounding mode.
///
/// On construction the current mode is saved and `mode` is installed. On
/// drop, the saved mode is restored unconditionally.
pub(crate) struct RoundingGuard {
    saved: i32,
}

impl RoundingGuard {
    /// Installs `mode`, remembering the mode that was active beforehand.
    pub(crate) fn set(mode: i32) -> Self {
        // Safety: fegetround/fesetround only read/write the thread's FPU
        // control word; no pointers are dereferenced and no aliasing is
        // possible across the read-then-write pair below.
        let saved = unsafe { libc::fegetround() };
        unsafe {
            libc::fesetround(mode);
        }
        RoundingGuard { saved }
    }
}

impl Drop for RoundingGuard {
    fn drop(&mut self) {
        unsafe {
            libc::fesetround(self.saved);
        }
    }
}

/// Runs `f` with the rounding mode set to `mode`, restoring the ambient mode
/// afterwards even if `f` panics.
pub(crate) fn with_mode<T>(mode: i32, f: impl FnOnce() -> T) -> T {
    let _guard = RoundingGuard::set(mode);
    f()
}

/// The thread's current FPU rounding mode, for tests that check `with_mode`
/// never leaks a change past its scope.
#[cfg(test)]
pub(crate) fn current_mode() -> i32 {
    unsafe { libc::fegetround() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restores_ambient_mode() {
        let before = unsafe { libc::fegetround() };
        let _ = with_mode(DOWNWARD, || 1.0_f64 / 3.0);
        let after = unsafe { libc::fegetround() };
        assert_eq!(before, after);
    }

    #[test]
    fn restores_mode_on_panic_unwind() {
        let before = unsafe { libc::fegetround() };
        let result = std::panic::catch_unwind(|| {
            with_mode(UPWARD, || -> f64 {
                panic!("boom");
            })
        });
        assert!(result.is_err());
        let after = unsafe { libc::fegetround() };
        assert_eq!(before, after);
    }
}
