use serde::{Deserialize, Serialize};

pub const FORBIDDEN_CHARACTERS: [char; 6] = ['<', '>', '{', '}', '[', ']'];

/// Structured result of a failed field check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum FieldViolation {
    Required,
    ForbiddenCharacters { value: String },
    DuplicateTag { value: String },
}

impl FieldViolation {
    /// Message shown under the field
    pub fn message(&self) -> String {
        match self {
            FieldViolation::Required => "This field is required".to_string(),
            FieldViolation::ForbiddenCharacters { .. } => {
                "Characters < > { } [ ] are not allowed".to_string()
            }
            FieldViolation::DuplicateTag { value } => {
                format!("Tag \"{}\" is already in the list", value.trim())
            }
        }
    }
}

/// Value must be non-empty after trimming
pub fn required(value: &str) -> Result<(), FieldViolation> {
    if value.trim().is_empty() {
        return Err(FieldViolation::Required);
    }
    Ok(())
}

/// Value must not contain any of `< > { } [ ]`
///
/// An empty value passes; pair with [`required`] where the field is mandatory.
pub fn forbidden_characters(value: &str) -> Result<(), FieldViolation> {
    if value.is_empty() {
        return Ok(());
    }
    if value.contains(&FORBIDDEN_CHARACTERS[..]) {
        return Err(FieldViolation::ForbiddenCharacters {
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Tag at `index` must differ from every other tag, ignoring case and
/// surrounding whitespace
///
/// The tag is compared with its siblings by position, so it never conflicts
/// with itself. An empty tag passes.
pub fn duplicate_tag(tags: &[String], index: usize) -> Result<(), FieldViolation> {
    let Some(value) = tags.get(index) else {
        return Ok(());
    };

    let normalized = value.trim().to_lowercase();
    if normalized.is_empty() {
        return Ok(());
    }

    let is_duplicate = tags
        .iter()
        .enumerate()
        .any(|(i, tag)| i != index && tag.trim().to_lowercase() == normalized);

    if is_duplicate {
        return Err(FieldViolation::DuplicateTag {
            value: value.clone(),
        });
    }
    Ok(())
}
