pub mod employee;
pub mod recurring_shift;
pub mod specific_shift;
pub mod time_off;

pub use employee::EmployeeRepository;
pub use recurring_shift::RecurringShiftRepository;
pub use specific_shift::SpecificShiftRepository;
pub use time_off::TimeOffRepository;
