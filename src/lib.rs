// Rust DatePicker Library
// Exports all modules for embedding and reuse

pub mod adapter;
pub mod locale;
pub mod models;
pub mod picker;
pub mod services;
pub mod utils;
