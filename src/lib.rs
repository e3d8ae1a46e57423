pub mod app;
pub mod config;
pub mod events;
pub mod ingest;
pub mod logging;
pub mod reducer;
pub mod state;
pub mod tools;
pub mod transcript;
pub mod ui;
