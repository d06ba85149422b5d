//! Records held in the HR spreadsheet, decoded into named types at the
//! adapter boundary.

pub mod employee;
pub mod leave_request;
pub mod recruitment;
pub mod sheet;

pub use employee::{Employee, EmployeeStatus, UpdateEmployee};
pub use leave_request::{LeaveRequest, LeaveSheetRow, LeaveStatus};
pub use recruitment::{RecruitmentApplication, RecruitmentSheetRow, RecruitmentStatus};
