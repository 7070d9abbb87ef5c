//! Client application state.
//!
//! State types are plain structs mutated through whole-value replacement,
//! provided to components as `RwSignal` contexts. Transition logic lives on
//! the structs themselves so it stays testable off the browser.

pub mod conversation;
pub mod members;

/// Milliseconds since the Unix epoch.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as u64)
    }
}
