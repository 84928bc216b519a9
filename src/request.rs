//! Request validation and response shape
//!
//! A [`SimplifyRequest`] carries unchecked input as it arrives from JSON, YAML
//! or the command line. Validation turns it into a [`ValidRequest`] that
//! satisfies the minimizer's preconditions, and running that produces a
//! [`Simplification`].

use crate::error::{Error, Result};
use crate::minimize::{self, Mode, MAX_VARS, MIN_VARS};
use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

fn default_num_vars() -> i64 {
    3
}

fn default_mode() -> String {
    Mode::Sop.to_string()
}

/// Unvalidated simplification request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SimplifyRequest {
    /// Minterms (SOP) of the function
    #[serde(default)]
    pub minterms: Vec<i64>,

    /// Number of input variables, 2 to 4
    #[serde(default = "default_num_vars")]
    pub num_vars: i64,

    /// "SOP" or "POS"
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Inputs whose output is unconstrained
    #[serde(default)]
    pub dont_cares: Vec<i64>,
}

impl Default for SimplifyRequest {
    fn default() -> Self {
        SimplifyRequest {
            minterms: Vec::new(),
            num_vars: default_num_vars(),
            mode: default_mode(),
            dont_cares: Vec::new(),
        }
    }
}

/// Request that meets the minimizer's preconditions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRequest {
    pub minterms: Vec<u32>,
    pub num_vars: usize,
    pub mode: Mode,
    pub dont_cares: Vec<u32>,
}

/// Result of a simplification, as reported to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Simplification {
    /// Simplified expression
    pub simplified: String,
    /// Variable names, most significant first
    pub variables: Vec<String>,
    /// Minterms, ascending
    pub original_terms: Vec<u32>,
    /// Don't-cares, ascending
    pub dont_cares: Vec<u32>,
    pub mode: Mode,
}

impl SimplifyRequest {
    pub fn new(minterms: Vec<i64>, num_vars: i64, mode: Mode, dont_cares: Vec<i64>) -> Self {
        SimplifyRequest {
            minterms,
            num_vars,
            mode: mode.to_string(),
            dont_cares,
        }
    }

    /// Check shape, variable count, mode, ranges, and duplicates, in that order
    pub fn validate(&self) -> Result<ValidRequest> {
        if self.minterms.is_empty() {
            return Err(Error::InvalidShape);
        }

        if self.num_vars < MIN_VARS as i64 || self.num_vars > MAX_VARS as i64 {
            return Err(Error::InvalidVariableCount(self.num_vars));
        }
        let num_vars = self.num_vars as usize;

        let mode: Mode = self.mode.parse()?;

        let max = (1u32 << num_vars) - 1;
        let in_range = |term: i64| -> Result<u32> {
            u32::try_from(term)
                .ok()
                .filter(|t| *t <= max)
                .ok_or(Error::OutOfRange { term, max })
        };
        let minterms = self
            .minterms
            .iter()
            .map(|&t| in_range(t))
            .collect::<Result<Vec<_>>>()?;
        let dont_cares = self
            .dont_cares
            .iter()
            .map(|&t| in_range(t))
            .collect::<Result<Vec<_>>>()?;

        let mut seen = BTreeSet::new();
        for &t in minterms.iter().chain(&dont_cares) {
            if !seen.insert(t) {
                return Err(Error::DuplicateTerm(t));
            }
        }

        Ok(ValidRequest {
            minterms,
            num_vars,
            mode,
            dont_cares,
        })
    }

    /// Validate and run
    pub fn simplify(&self) -> Result<Simplification> {
        let valid = self.validate()?;
        Ok(valid.simplify())
    }
}

impl ValidRequest {
    pub fn simplify(&self) -> Simplification {
        let simplified =
            minimize::simplify(&self.minterms, self.num_vars, self.mode, &self.dont_cares);
        debug!("{} -> {}", self.mode, simplified);

        let mut original_terms = self.minterms.clone();
        original_terms.sort_unstable();
        let mut dont_cares = self.dont_cares.clone();
        dont_cares.sort_unstable();

        Simplification {
            simplified,
            variables: minimize::variable_names(self.num_vars),
            original_terms,
            dont_cares,
            mode: self.mode,
        }
    }
}

impl Simplification {
    /// Human readable multi-line report
    pub fn to_report(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{} = {}\n", self.mode, self.simplified));
        out.push_str(&format!("  variables:  {}\n", self.variables.join(", ")));
        out.push_str(&format!(
            "  terms:      {}\n",
            join_terms(&self.original_terms)
        ));
        if !self.dont_cares.is_empty() {
            out.push_str(&format!(
                "  dont-cares: {}\n",
                join_terms(&self.dont_cares)
            ));
        }
        out
    }
}

fn join_terms(terms: &[u32]) -> String {
    terms
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
