//! Medika Core — shared domain models, repository traits, and error
//! types for the hospital staff authentication and patient search
//! system.

pub mod error;
pub mod models;
pub mod repository;
