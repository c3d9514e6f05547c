//! Contact feature: public contact form submissions.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/contact` | Submit a contact message |
//! | GET | `/api/contact` | List submissions |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
