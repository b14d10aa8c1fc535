pub const MIN_LENGTH: usize = 3;
pub const MAX_LENGTH: usize = 64;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Workspace name cannot be empty.")]
    Empty,
    #[error("Workspace name must be between 3 and 64 characters.")]
    InvalidLength,
    #[error("Workspace name cannot start or end with a hyphen.")]
    HyphenAtBoundary,
    #[error("Workspace name can only contain letters, numbers, and hyphens.")]
    InvalidCharacter,
}

/// Checks the syntax of a workspace name. Rules are applied in order and the
/// first violated rule is reported. The caller is expected to trim the input.
pub fn validate_workspace_name(name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::Empty);
    }

    let length = name.chars().count();
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(Error::InvalidLength);
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(Error::HyphenAtBoundary);
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(Error::InvalidCharacter);
    }

    Ok(())
}
