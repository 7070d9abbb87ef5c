//! Network layer: wire types and gateway calls.

pub mod api;
pub mod chat_stream;
pub mod types;

/// Log a warning to the browser console; no-op on native builds.
pub(crate) fn log_warn(message: &str) {
    #[cfg(feature = "csr")]
    log::warn!("{message}");
    #[cfg(not(feature = "csr"))]
    let _ = message;
}
