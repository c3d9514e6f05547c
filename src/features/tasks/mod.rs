//! Task acceptance feature: volunteers accept assignments made to them.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | PUT | `/api/tasks/{id}/accept` | Accept an assigned task |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;
