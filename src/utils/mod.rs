pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod context;
pub mod errors;
