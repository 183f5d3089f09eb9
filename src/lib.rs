pub mod assembler;
pub mod config;
pub mod consts;
pub mod dates;
pub mod error;
pub mod export;
pub mod loader;
pub mod pipeline;
pub mod players;
pub mod scanner;
pub mod series;
// cmd and reports belong to the binary crate (main.rs).
