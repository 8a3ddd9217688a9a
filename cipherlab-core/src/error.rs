// File:    error.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: Error types for key validation, cipher operations, analysis requests and name parsing.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Error types.
//!
//! Every `Display` message is written for end users, so a presentation layer
//! can show it as-is next to the offending input.

use crate::key::CipherKind;
use thiserror::Error;

/// A proposed key was rejected for the selected cipher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The key text fails the cipher's syntax or range rule.
    #[error("{}", .cipher.key_rule())]
    InvalidKeyFormat {
        /// The cipher the key was checked against.
        cipher: CipherKind,
    },

    /// The normalized text is shorter than the cipher requires.
    #[error("Input text must be at least {minimum} letters after cleaning (got {length}).")]
    InputTooShort {
        /// Normalized text length.
        length: usize,
        /// Minimum length the cipher accepts.
        minimum: usize,
    },

    /// Rail Fence needs fewer rails than letters.
    #[error("Rails ({rails}) must be fewer than the length of the cleaned text ({length}).")]
    RailCountTooLarge {
        /// Requested rail count.
        rails: usize,
        /// Normalized text length.
        length: usize,
    },
}

/// A composed encrypt/decrypt request could not run.
///
/// Nothing is transformed when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// The key did not pass validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The input had no letters left after normalization.
    #[error("Input text must not be empty after cleaning.")]
    EmptyInput,
}

/// An analysis request could not run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The normalized text is below the analysis minimum.
    #[error("Text must be at least {minimum} letters after cleaning (got {length}).")]
    InputTooShort {
        /// Normalized text length.
        length: usize,
        /// Minimum length required.
        minimum: usize,
    },
}

/// A cipher or tool name did not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNameError {
    /// No cipher is registered under this name.
    #[error("unknown cipher: {name}")]
    UnknownCipher {
        /// The name as given.
        name: String,
    },

    /// No analysis tool is registered under this name.
    #[error("unknown analysis tool: {name}")]
    UnknownTool {
        /// The name as given.
        name: String,
    },
}
