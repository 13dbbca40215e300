//! Validation failures raised by catalog entities.

use streaming_catalog_core::DomainError;
use thiserror::Error;

const DESCRIPTION_NULL: &str = "Description should not be null";
const DESCRIPTION_TOO_LONG: &str = "Description should be less or equal 10.000 characters long";
const NAME_EMPTY: &str = "Name should not be empty or null";
// Wording is part of the public contract; callers match on it.
const NAME_TOO_SHORT: &str = "Name should be at leats 3 characters long";
const NAME_TOO_LONG: &str = "Name should be less or equal 255 characters long";
const NIL_ID: &str = "Id should not be empty";
const NIL_CREATED_AT: &str = "CreatedAt should not be empty";

/// The rule an entity's proposed state violated.
///
/// Only the first failing rule is ever reported, so each value maps to exactly
/// one fixed message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityValidationError {
    #[error("{msg}", msg = DESCRIPTION_NULL)]
    DescriptionNull,

    #[error("{msg}", msg = DESCRIPTION_TOO_LONG)]
    DescriptionTooLong,

    #[error("{msg}", msg = NAME_EMPTY)]
    NameEmpty,

    #[error("{msg}", msg = NAME_TOO_SHORT)]
    NameTooShort,

    #[error("{msg}", msg = NAME_TOO_LONG)]
    NameTooLong,

    /// Only reachable when restoring a snapshot.
    #[error("{msg}", msg = NIL_ID)]
    NilId,

    /// Only reachable when restoring a snapshot.
    #[error("{msg}", msg = NIL_CREATED_AT)]
    NilCreatedAt,
}

impl EntityValidationError {
    /// The fixed, human-readable message for this rule.
    pub fn message(&self) -> &'static str {
        match self {
            EntityValidationError::DescriptionNull => DESCRIPTION_NULL,
            EntityValidationError::DescriptionTooLong => DESCRIPTION_TOO_LONG,
            EntityValidationError::NameEmpty => NAME_EMPTY,
            EntityValidationError::NameTooShort => NAME_TOO_SHORT,
            EntityValidationError::NameTooLong => NAME_TOO_LONG,
            EntityValidationError::NilId => NIL_ID,
            EntityValidationError::NilCreatedAt => NIL_CREATED_AT,
        }
    }
}

impl From<EntityValidationError> for DomainError {
    fn from(value: EntityValidationError) -> Self {
        match value {
            EntityValidationError::NilId => DomainError::invalid_id(value.message()),
            _ => DomainError::validation(value.message()),
        }
    }
}
