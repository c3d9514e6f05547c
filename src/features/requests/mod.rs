//! Aid request feature: posting requests, skill matching, and assignments.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/requests` | List requests with live volunteer counts |
//! | POST | `/api/requests` | Create a new aid request |
//! | GET | `/api/requests/{id}/matches` | Skill-matched candidate volunteers |
//! | POST | `/api/requests/{id}/assign` | Assign volunteers to a request |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
