// File:    brute_force.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: Exhaustive Caesar decryption under every shift, for manual inspection.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::cipher::{Caesar, Cipher};
use crate::key::CAESAR_SHIFTS;
use crate::text::NormalizedText;
use serde::Serialize;

/// One trial decryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BruteForceCandidate {
    /// The shift tried.
    pub shift: u8,
    /// The ciphertext decrypted under `shift`.
    pub text: NormalizedText,
}

/// All 26 trial decryptions, by ascending shift.
///
/// No candidate is ranked or picked; spotting the plaintext is left to the
/// reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BruteForceResult {
    candidates: Vec<BruteForceCandidate>,
}

impl BruteForceResult {
    /// The candidates, shift 0 first.
    #[must_use]
    pub fn candidates(&self) -> &[BruteForceCandidate] {
        &self.candidates
    }

    /// The candidate for `shift`, if it is in `0..26`.
    #[must_use]
    pub fn get(&self, shift: u8) -> Option<&BruteForceCandidate> {
        self.candidates.get(usize::from(shift))
    }
}

/// Decrypts `ciphertext` with every Caesar shift from 0 to 25.
#[must_use]
pub fn brute_force(ciphertext: &NormalizedText) -> BruteForceResult {
    let candidates = CAESAR_SHIFTS
        .filter_map(|shift| u8::try_from(shift).ok())
        .map(|shift| BruteForceCandidate {
            shift,
            text: Caesar::new(shift).decrypt(ciphertext),
        })
        .collect();
    BruteForceResult { candidates }
}
