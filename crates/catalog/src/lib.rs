//! Catalog domain module.
//!
//! This crate contains the business rules for catalog categories, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). Adapters
//! persist [`CategorySnapshot`]s and translate [`EntityValidationError`]s into
//! their own reporting convention.

pub mod category;
pub mod error;
pub mod validation;

pub use category::{Category, CategoryId, CategorySnapshot, NewCategory, UpdateCategory};
pub use error::EntityValidationError;
pub use validation::{DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH, NAME_MIN_LENGTH};
