pub mod employee;
pub(crate) mod macros;
pub mod recurring_shift;
pub mod specific_shift;
pub mod time_off;

pub use employee::{Employee, EmployeeInput, EmploymentType};
pub use recurring_shift::{RecurringShift, RecurringShiftInput};
pub use specific_shift::{SpecificShift, SpecificShiftInput};
pub use time_off::{LeaveType, TimeOffRequest, TimeOffRequestInput, TimeOffStatus};
