pub mod employees;
pub mod recurring;
pub mod schedule;
pub mod shared;
pub mod shifts;
pub mod time_off;

pub use shared::ApiResponse;
