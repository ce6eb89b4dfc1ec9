//! Occupation eligibility matching for skills assessment pathways.
//!
//! The catalog is loaded once into an immutable [`occupations::OccupationCatalog`] and every
//! operation is a pure function of its arguments plus that catalog.

pub mod config;
pub mod error;
pub mod occupations;
pub mod telemetry;
