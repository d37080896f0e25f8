//! Field-level validation rules for catalog forms
//!
//! Every rule returns `Ok(())` or a `FieldViolation` carrying the raw value
//! that failed. Violations block submission; they are not errors.

mod rules;

pub use rules::{
    duplicate_tag, forbidden_characters, required, FieldViolation, FORBIDDEN_CHARACTERS,
};
