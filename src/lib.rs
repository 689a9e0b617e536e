pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod inference;
pub mod pipeline;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
