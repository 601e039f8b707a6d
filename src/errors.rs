//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`PrefabError`] covers all failure modes:
//! - Structural mismatches between a supplied mapping and a record's shape
//! - Values the type system accepts but the factories cannot use
//!   (non-finite numbers, degenerate outlines)
//! - Failures reported by a host factory implementation
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, PrefabError>`.

use thiserror::Error;

/// The main error type for the configuration layer.
///
/// Configuration records are rejected at the boundary between the caller
/// and the external factory; each variant names the record kind and the
/// offending field where one exists.
#[derive(Error, Debug)]
pub enum PrefabError {
    // ========================================================================
    // Structural Errors
    // ========================================================================
    /// A supplied mapping did not match the record's declared shape
    /// (missing required field, wrong field type).
    #[error("invalid {kind} configuration: {source}")]
    InvalidShape {
        /// Record kind being built
        kind: &'static str,
        /// The underlying serde error, naming the offending field
        #[source]
        source: serde_json::Error,
    },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// A numeric field held NaN or an infinity.
    #[error("invalid {kind} configuration: field `{field}` must be a finite number")]
    NonFiniteField {
        /// Record kind being validated
        kind: &'static str,
        /// The offending field
        field: &'static str,
    },

    /// An extrusion outline with fewer than three points.
    #[error("extrusion outline must have at least 3 points (got {count})")]
    DegenerateOutline {
        /// Number of points supplied
        count: usize,
    },

    /// A color scale with fewer than two gradient stops.
    #[error("color scale must have at least 2 stops (got {count})")]
    DegenerateColorScale {
        /// Number of stops supplied
        count: usize,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// A host factory failed to produce a scene object.
    #[error("factory error: {0}")]
    Factory(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used by all fallible APIs in this crate.
pub type Result<T> = std::result::Result<T, PrefabError>;
