use std::sync::Arc;

use super::{build_final_name, AvailabilityMemo, CheckError, FormContext};
use crate::config::AvailabilityClientConfig;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Could not construct a valid final workspace name.")]
    UnbuildableName,

    #[error("Workspace name '{0}' is not available.")]
    Unavailable(String),

    #[error(transparent)]
    Lookup(#[from] CheckError),
}

/// Definitive check run when the form is submitted.
///
/// Shares its memo with the live field, so a lookup that just finished is reused.
pub struct WorkspaceNameValidator {
    memo: Arc<AvailabilityMemo>,
    required_network_type: String,
}

impl WorkspaceNameValidator {
    pub fn new(memo: Arc<AvailabilityMemo>, config: &AvailabilityClientConfig) -> Self {
        Self { memo, required_network_type: config.required_network_type.clone() }
    }

    /// Passes when the check does not apply yet: another network type, or any of the
    /// base name, drn and domain still blank.
    pub async fn validate(&self, value: &str, context: &FormContext) -> Result<(), SubmitError> {
        if context.network_type.as_deref() != Some(self.required_network_type.as_str()) {
            return Ok(());
        }

        let is_blank = |s: Option<&str>| s.map_or(true, |s| s.trim().is_empty());
        if is_blank(Some(value)) || is_blank(context.drn.as_deref()) || is_blank(context.domain.as_deref()) {
            return Ok(());
        }

        let final_name = build_final_name(value, context.drn.as_deref(), context.domain.as_deref());
        if final_name.is_empty() {
            return Err(SubmitError::UnbuildableName);
        }

        if !self.memo.is_available(&final_name).await? {
            return Err(SubmitError::Unavailable(final_name));
        }

        Ok(())
    }
}
