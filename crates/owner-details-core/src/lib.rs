pub mod config;
pub mod logging;

pub mod api_path;
pub mod controller;
pub mod fetch;
pub mod owner;
