// File:    lab.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: Composed entry points for presentation layers: key validation, cipher operations and analysis requests.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Entry points for presentation layers.
//!
//! Each function takes raw caller input, normalizes it, checks it and only
//! then runs a transform or analysis. Errors stop the request before any
//! output is produced. Nothing is cached between calls; a caller that wants
//! to keep the last [`AnalysisResult`] around (for an export button, say)
//! holds on to the returned value itself.

use crate::MIN_ANALYSIS_LENGTH;
use crate::brute_force::{BruteForceResult, brute_force};
use crate::cipher::Cipher;
use crate::error::{AnalysisError, OperationError, ParseNameError, ValidationError};
use crate::frequency::{FrequencyTable, analyze};
use crate::key::{CipherKey, CipherKind, validate};
use crate::text::{NormalizedText, normalize};
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// Outcome of a live key check.
pub type ValidationOutcome = Result<CipherKey, ValidationError>;

/// Which way a cipher operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Encrypt => "ENCRYPT",
            Self::Decrypt => "DECRYPT",
        })
    }
}

/// Validates `raw_key` for `cipher`.
///
/// `plaintext_len` must be the *normalized* length; use
/// [`crate::text::char_counts`] or [`normalize`] to get it.
///
/// # Errors
///
/// Any [`ValidationError`]; see [`validate`].
pub fn validate_key(cipher: CipherKind, raw_key: &str, plaintext_len: usize) -> ValidationOutcome {
    validate(cipher, raw_key, plaintext_len)
}

/// Normalizes `raw_text`, validates `raw_key` and runs the cipher.
///
/// # Errors
///
/// - [`OperationError::Validation`] when the key is rejected for the
///   normalized text.
/// - [`OperationError::EmptyInput`] when no letters are left after
///   normalization.
pub fn run_cipher_operation(
    direction: Direction,
    cipher: CipherKind,
    raw_text: &str,
    raw_key: &str,
) -> Result<NormalizedText, OperationError> {
    let text = normalize(raw_text);
    let key = validate(cipher, raw_key, text.len())?;
    if text.is_empty() {
        return Err(OperationError::EmptyInput);
    }
    trace!("{direction} {} over {} letters", cipher.label(), text.len());
    Ok(match direction {
        Direction::Encrypt => key.encrypt(&text),
        Direction::Decrypt => key.decrypt(&text),
    })
}

/// The cryptanalysis tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisTool {
    /// Letter frequency analysis.
    Frequency,
    /// Caesar brute force.
    #[serde(rename = "bruteforce")]
    BruteForce,
}

impl AnalysisTool {
    /// Every tool, in display order.
    pub const ALL: [Self; 2] = [Self::Frequency, Self::BruteForce];

    /// The identifier used to select this tool (`frequency`, `bruteforce`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Frequency => "frequency",
            Self::BruteForce => "bruteforce",
        }
    }
}

impl fmt::Display for AnalysisTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnalysisTool {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseNameError::UnknownTool {
                name: s.to_string(),
            })
    }
}

/// The structured output of an analysis request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tool", content = "data", rename_all = "lowercase")]
pub enum AnalysisResult {
    /// Letter counts and proportions.
    Frequency(FrequencyTable),
    /// All 26 Caesar decryptions.
    #[serde(rename = "bruteforce")]
    BruteForce(BruteForceResult),
}

impl AnalysisResult {
    /// The tool that produced this result.
    #[must_use]
    pub const fn tool(&self) -> AnalysisTool {
        match self {
            Self::Frequency(_) => AnalysisTool::Frequency,
            Self::BruteForce(_) => AnalysisTool::BruteForce,
        }
    }

    /// Plain-text export, one entry per line.
    ///
    /// Frequency results list only the letters that occur, most frequent
    /// first, as `E: 12.50% (3x)`. Brute-force results list every shift as
    /// `[Key 3] PLAINTEXT`.
    #[must_use]
    pub fn export_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        match self {
            Self::Frequency(table) => {
                out.push_str("Letter Frequency:\n");
                for f in table.ranked() {
                    let _ = writeln!(out, "{}: {:.2}% ({}x)", f.letter, f.percentage(), f.count);
                }
            }
            Self::BruteForce(result) => {
                out.push_str("Caesar Brute-Force Results:\n");
                for c in result.candidates() {
                    let _ = writeln!(out, "[Key {}] {}", c.shift, c.text);
                }
            }
        }
        out
    }
}

/// Normalizes `raw_text` and runs `tool` over it.
///
/// # Errors
///
/// [`AnalysisError::InputTooShort`] when fewer than
/// [`MIN_ANALYSIS_LENGTH`] letters remain after normalization.
pub fn run_analysis(tool: AnalysisTool, raw_text: &str) -> Result<AnalysisResult, AnalysisError> {
    let text = normalize(raw_text);
    if text.len() < MIN_ANALYSIS_LENGTH {
        return Err(AnalysisError::InputTooShort {
            length: text.len(),
            minimum: MIN_ANALYSIS_LENGTH,
        });
    }
    trace!("Running {tool} over {} letters", text.len());
    Ok(match tool {
        AnalysisTool::Frequency => AnalysisResult::Frequency(analyze(&text)),
        AnalysisTool::BruteForce => AnalysisResult::BruteForce(brute_force(&text)),
    })
}
