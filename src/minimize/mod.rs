//! # Two-level Boolean minimization
//!
//! Reduces a function of 2 to 4 variables, given as minterms plus optional
//! don't-cares, to a Sum-of-Products or Product-of-Sums expression.
//!
//! ## Overview
//!
//! The work happens in three stages:
//!
//! 1. [`prime::generate`] merges terms that differ in one bit until no more
//!    merges are possible, leaving the prime implicants.
//! 2. [`select::select`] takes the essential implicants and fills the rest of
//!    the cover greedily.
//! 3. [`format::assemble`] renders the chosen patterns as literals.
//!
//! POS results are obtained by minimizing the complement of the function and
//! applying De Morgan to each product.
//!
//! ## Example
//!
//! ```
//! use boolmin::minimize::{simplify, Mode};
//!
//! assert_eq!(simplify(&[1, 3, 5, 7], 3, Mode::Sop, &[]), "C");
//! assert_eq!(simplify(&[0], 2, Mode::Sop, &[]), "A'B'");
//! ```
//!
//! The selection step is a heuristic and may return more implicants than an
//! exact cover would.

pub mod format;
pub mod prime;
pub mod select;
pub mod term;

pub use format::{assemble, format_product, Literal, Product};
pub use prime::{generate, PrimeImplicants};
pub use select::select;
pub use term::{Bit, Pattern, Term};

use crate::error::Error;
use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest supported variable count
pub const MIN_VARS: usize = 2;
/// Largest supported variable count
pub const MAX_VARS: usize = 4;

const VARIABLE_NAMES: [&str; MAX_VARS] = ["A", "B", "C", "D"];

/// Output form of the simplified expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum Mode {
    /// Sum of products
    #[default]
    #[serde(rename = "SOP", alias = "sop", alias = "Sop")]
    Sop,
    /// Product of sums
    #[serde(rename = "POS", alias = "pos", alias = "Pos")]
    Pos,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Sop => "SOP",
            Mode::Pos => "POS",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SOP" => Ok(Mode::Sop),
            "POS" => Ok(Mode::Pos),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

/// Variable names for `num_vars` inputs, most significant bit first
pub fn variable_names(num_vars: usize) -> Vec<String> {
    VARIABLE_NAMES
        .iter()
        .take(num_vars)
        .map(|s| s.to_string())
        .collect()
}

/// Simplify a Boolean function to SOP or POS form.
///
/// Inputs are expected to be validated already: `num_vars` in 2..=4, every
/// term below `2^num_vars`, no value repeated across or within the two lists.
pub fn simplify(minterms: &[u32], num_vars: usize, mode: Mode, dont_cares: &[u32]) -> String {
    debug!(
        "simplify {} minterms, {} don't-cares over {} vars ({})",
        minterms.len(),
        dont_cares.len(),
        num_vars,
        mode
    );

    if minterms.is_empty() {
        return match mode {
            Mode::Sop => "0",
            Mode::Pos => "1",
        }
        .to_string();
    }

    let working: Vec<u32> = match mode {
        Mode::Sop => minterms.to_vec(),
        Mode::Pos => complement(minterms, dont_cares, num_vars),
    };

    let primes = generate(&working, dont_cares, num_vars);
    let chosen = select(&primes, &working);
    debug!(
        "{} prime implicants, {} selected",
        primes.len(),
        chosen.len()
    );

    let names = variable_names(num_vars);
    let products = chosen.iter().map(|p| format_product(p, &names)).collect();
    assemble(products, mode)
}

/// Values in `[0, 2^num_vars)` that are neither minterms nor don't-cares
fn complement(minterms: &[u32], dont_cares: &[u32], num_vars: usize) -> Vec<u32> {
    (0..1u32 << num_vars)
        .filter(|v| !minterms.contains(v) && !dont_cares.contains(v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn test_constant_cases() {
        assert_eq!(simplify(&[], 3, Mode::Sop, &[]), "0");
        assert_eq!(simplify(&[], 3, Mode::Pos, &[1]), "1");
    }

    #[test]
    fn test_tautology() {
        assert_eq!(simplify(&[0, 1, 2, 3, 4, 5, 6, 7], 3, Mode::Sop, &[]), "1");
        assert_eq!(simplify(&[0, 1, 2, 3], 2, Mode::Sop, &[]), "1");
    }

    #[test]
    fn test_pos_of_full_function_falls_back_to_zero() {
        assert_eq!(simplify(&[0, 1, 2, 3], 2, Mode::Pos, &[]), "0");
    }

    #[test]
    fn test_pos_single_zero() {
        assert_eq!(
            simplify(&[0, 1, 2, 3, 4, 5, 6], 3, Mode::Pos, &[]),
            "(A' + B' + C')"
        );
    }

    #[test]
    fn test_complement_skips_dont_cares() {
        assert_eq!(complement(&[0, 1], &[2], 2), vec![3]);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("sop".parse::<Mode>().unwrap(), Mode::Sop);
        assert_eq!("POS".parse::<Mode>().unwrap(), Mode::Pos);
        assert!("XOR".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_serde_accepts_lowercase() {
        let mode: Mode = serde_json::from_str(r#""pos""#).unwrap();
        assert_eq!(mode, Mode::Pos);
        assert_eq!(serde_json::to_string(&Mode::Pos).unwrap(), r#""POS""#);
    }

    #[test]
    fn test_variable_names() {
        assert_eq!(variable_names(2), vec!["A", "B"]);
        assert_eq!(variable_names(4), vec!["A", "B", "C", "D"]);
    }
}
