pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod scheduling;

pub use config::Config;
pub use error::AppError;
