// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: The main library crate for cipherlab-core, tying together normalization, key validation, the cipher engine and the cryptanalysis tools.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Cipher Lab Core Library
//!
//! This library provides the core functionality of the cipher lab: three
//! classical ciphers (Caesar, Vigenère and Rail Fence) and a small
//! cryptanalysis toolkit (letter frequency analysis and Caesar brute force).
//!
//! Every operation is a pure function over its inputs. The [`lab`] module
//! composes the pieces into the entry points a presentation layer calls.
//!
//! ```
//! use cipherlab_core::lab::{run_cipher_operation, Direction};
//! use cipherlab_core::key::CipherKind;
//!
//! let out = run_cipher_operation(Direction::Encrypt, CipherKind::Caesar, "Hello!", "3").unwrap();
//! assert_eq!(out.as_str(), "KHOOR");
//! ```
//!
//! These ciphers are educational. They offer no real confidentiality.

/// Caesar brute force over all 26 shifts.
pub mod brute_force;
/// The cipher engine: Caesar, Vigenère and Rail Fence transforms.
pub mod cipher;
/// Error types surfaced by validation and the composed entry points.
pub mod error;
/// Letter frequency analysis.
pub mod frequency;
/// Cipher kinds, validated keys and key validation rules.
pub mod key;
/// Composed entry points used by presentation layers.
pub mod lab;
/// Text normalization to the uppercase A-Z alphabet.
pub mod text;

/// Number of letters in the cipher alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Minimum normalized length accepted by the analysis tools.
pub const MIN_ANALYSIS_LENGTH: usize = 2;
