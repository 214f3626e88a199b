// web-time falls back to std::time::Instant on native targets and wraps
// performance.now() on wasm32, so the same clock alias works everywhere.
pub use web_time::Instant as AppInstant;
