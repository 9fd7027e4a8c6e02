pub mod static_json;
pub mod traits;

#[cfg(not(target_arch = "wasm32"))]
pub mod json_file;
