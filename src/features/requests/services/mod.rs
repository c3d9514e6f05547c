mod assignment_service;
mod matching_service;
mod request_service;

pub use assignment_service::AssignmentService;
pub use matching_service::MatchingService;
pub use request_service::RequestService;
