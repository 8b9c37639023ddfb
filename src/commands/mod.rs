pub mod config;
mod fetch;

pub use fetch::{fetch, run};
