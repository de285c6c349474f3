// Adapters layer: concrete implementations for external systems (http transport, console, http api).

#[cfg(feature = "server")]
pub mod api;
pub mod console;
pub mod http;
