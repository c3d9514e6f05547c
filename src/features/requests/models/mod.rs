mod assignment;
mod request;

pub use assignment::{Assignment, AssignmentStatus};
pub use request::{AidRequest, RequestStatus, Urgency};
