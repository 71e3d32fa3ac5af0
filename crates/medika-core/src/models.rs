//! Domain models for Medika.
//!
//! These are the core types shared across all crates. Every staff
//! member and patient record belongs to exactly one hospital.

pub mod hospital;
pub mod patient;
pub mod staff;
