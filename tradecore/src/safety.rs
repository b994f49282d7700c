//! Frame-level panic isolation.
//!
//! A bug in one screen's rendering should cost one frame, not the app.

/// Run a closure, catching any panic. Returns the closure result on success,
/// or `fallback` on panic. Used to isolate per-frame rendering.
pub fn catch_or<T>(fallback: T, f: impl FnOnce() -> T) -> T {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(val) => val,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!(%message, "caught panic in frame, recovered");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_or_passes_value_through() {
        assert_eq!(catch_or(0, || 42), 42);
    }

    #[test]
    fn test_catch_or_recovers() {
        let value = catch_or(Some("fallback"), || -> Option<&str> { panic!("boom") });
        assert_eq!(value, Some("fallback"));
    }
}
