//! Error handling for KitchenPlan
//!
//! The layout engine itself never fails: unknown ids are ignored and
//! out-of-range positions are clamped. Errors exist at the edges where
//! external data enters the system:
//! - Asset errors (3D model loading and measurement)
//! - Catalog errors (loading or querying item definitions)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Asset error type
///
/// Raised by asset geometry providers when a model reference cannot be
/// turned into measurable geometry. Callers treat these as "skip dimension
/// derivation" rather than hard failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    /// The model reference is empty
    #[error("Empty model reference")]
    EmptyReference,

    /// No asset exists under the given reference
    #[error("Asset not found: {reference}")]
    NotFound {
        /// The model reference that could not be resolved.
        reference: String,
    },

    /// The asset format is not supported
    #[error("Unsupported asset format: {reference}")]
    UnsupportedFormat {
        /// The model reference with the unsupported extension.
        reference: String,
    },

    /// The asset could not be parsed
    #[error("Failed to parse asset {reference}: {reason}")]
    Parse {
        /// The model reference that failed to parse.
        reference: String,
        /// The reason parsing failed.
        reason: String,
    },

    /// The asset contains no geometry to measure
    #[error("Asset {reference} has no geometry")]
    EmptyGeometry {
        /// The model reference whose geometry is empty.
        reference: String,
    },
}

/// Catalog error type
///
/// Represents errors related to loading and querying item definitions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// No definition exists for the key
    #[error("Unknown catalog item: {key}")]
    UnknownItem {
        /// The key that was looked up.
        key: String,
    },

    /// The same key is defined twice
    #[error("Duplicate catalog item: {key}")]
    DuplicateItem {
        /// The duplicated key.
        key: String,
    },

    /// A definition carries invalid default dimensions
    #[error("Invalid dimensions for {key}: {reason}")]
    InvalidDimensions {
        /// The key of the offending definition.
        key: String,
        /// Why the dimensions were rejected.
        reason: String,
    },

    /// The catalog document could not be parsed
    #[error("Invalid catalog document: {reason}")]
    InvalidDocument {
        /// The parse failure.
        reason: String,
    },
}

/// Main error type for KitchenPlan
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Asset error
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an asset error
    pub fn is_asset_error(&self) -> bool {
        matches!(self, Error::Asset(_))
    }

    /// Check if this is a catalog error
    pub fn is_catalog_error(&self) -> bool {
        matches!(self, Error::Catalog(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
