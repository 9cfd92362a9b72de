//! Terminal task manager with a text-generation assistant and image search.

pub mod assistant;
pub mod config;
pub mod effects;
pub mod images;
pub mod logging;
pub mod store;
pub mod tasks;
pub mod ui;
