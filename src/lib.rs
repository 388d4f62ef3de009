pub mod adapters;
pub mod commands;
pub mod config;
pub mod domain;
pub mod logger;
pub mod menu;
pub mod ports;

pub use config::GymConfig;
pub use menu::Menu;
