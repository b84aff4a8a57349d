//! User-facing failure texts.
//!
//! Validation problems and store failures both end up here; each variant
//! renders as the message the user sees.

use bite_db::error::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("Restaurant name cannot be empty.")]
    BlankName,

    #[error("Invalid city option. Please use:\n  -r or R for Ramallah\n  -n or N for Nablus")]
    InvalidCity,

    #[error("Invalid URL format. Please provide a valid HTTP or HTTPS URL.")]
    InvalidUrl,

    #[error(
        "Invalid URL format. Please provide a valid HTTP or HTTPS URL, or use 'remove' to delete the URL."
    )]
    InvalidUpdateUrl,

    #[error(
        "Invalid restaurant ID format. Please select a restaurant from the autocomplete suggestions."
    )]
    InvalidId,

    #[error("No changes were provided. Please specify at least one field to update.")]
    NoChanges,

    #[error("Restaurant not found. It may have been deleted.")]
    NotFound,

    #[error(
        "A restaurant with the name {name} already exists in this city. Use `update` to modify it instead."
    )]
    Duplicate { name: String },

    /// Bad paging or a blank search term.
    #[error("{0}")]
    InvalidInput(String),

    #[error("An error occurred while {action}. Please try again later.")]
    Failed { action: &'static str },
}

impl Rejection {
    /// Translate a catalog failure. Unexpected kinds are logged here and
    /// replaced by the generic apology; `name` fills the duplicate message.
    pub fn from_db(error: DatabaseError, action: &'static str, name: &str) -> Self {
        match error {
            DatabaseError::NotFound { .. } => Self::NotFound,
            DatabaseError::DuplicateKey(_) => Self::Duplicate {
                name: name.to_string(),
            },
            DatabaseError::InvalidArgument(message) => Self::InvalidInput(message),
            other => {
                tracing::error!(error = %other, action, "catalog operation failed");
                Self::Failed { action }
            }
        }
    }
}
