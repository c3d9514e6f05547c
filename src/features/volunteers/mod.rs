//! Volunteer feature: registration and read-only projections.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/volunteers/register` | Submit onboarding registration |
//! | GET | `/api/volunteers` | List all volunteers |
//! | GET | `/api/volunteers/{id}` | Get a volunteer |
//! | GET | `/api/volunteers/{id}/stats` | Service statistics |
//! | GET | `/api/volunteers/{id}/tasks` | Assignments joined with requests |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
