pub mod contact;
pub mod requests;
pub mod tasks;
pub mod volunteers;
