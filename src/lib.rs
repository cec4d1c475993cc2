pub mod app;
pub mod batch;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod memory;
pub mod state;
pub mod teams;
pub mod timestamp;
pub mod users;
