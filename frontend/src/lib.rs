pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod pages;
pub mod utils;

pub use config::LandingConfig;
pub use controller::{initialize, Controller};
pub use error::ControllerError;
