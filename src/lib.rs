pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod menu;
pub mod models;
pub mod prompt;
pub mod utils;
