//! Unified error types for the embedhello asset store.

use thiserror::Error;

use crate::group::AssetGroup;

/// All errors that can occur while looking up bundled assets.
#[derive(Error, Debug)]
pub enum AssetError {
    // --- Lookup ---

    /// The requested name is not a member of the requested group.
    #[error("asset not found: {name} (group: {group})")]
    NotFound { name: String, group: AssetGroup },

    /// The group identifier is not one of: `text`, `csv`.
    #[error("unknown asset group: {0} (supported: text, csv)")]
    UnknownGroup(String),

    // --- Decoding ---

    /// The asset exists but its bytes are not valid UTF-8.
    #[error("asset {name} is not valid UTF-8")]
    NotUtf8 {
        name: String,
        #[source]
        source: std::str::Utf8Error,
    },
}

/// Alias for `Result<T, AssetError>`.
pub type Result<T> = std::result::Result<T, AssetError>;
