pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod genetic_code;
pub mod optimizer;
pub mod presets;
pub mod scorer;
pub mod sequence;
// cmd and reports are binary modules (declared in main.rs).
