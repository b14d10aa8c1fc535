//! The workspace name field: composes the final name from the form, checks its
//! availability while the user types, and re-checks it on submit. Both paths share
//! one [`AvailabilityMemo`] so a check that just finished is not repeated.

mod checker;
mod compose;
mod field;
mod memo;
mod validation;

pub use checker::{AvailabilityChecker, HttpAvailabilityChecker};
pub use compose::{build_final_name, domain_char, kebabize};
pub use field::{FieldState, FormContext, Status, WorkspaceNameField};
pub use memo::AvailabilityMemo;
pub use validation::{SubmitError, WorkspaceNameValidator};

use crate::api;

/// Failure of a single availability lookup. Cloneable so every waiter on a shared
/// lookup receives the same outcome.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("Workspace name check was cancelled")]
    Cancelled,

    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Transport(String),
}

impl From<api::Error> for CheckError {
    fn from(value: api::Error) -> Self {
        match value {
            api::Error::Rejected(message) => Self::Rejected(message),
            e => Self::Transport(e.to_string()),
        }
    }
}
