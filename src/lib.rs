// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # boolmin — Boolean function minimization
//!
//! Reduces a Boolean function of 2 to 4 variables, given as minterms and
//! optional don't-cares, to a Sum-of-Products or Product-of-Sums expression,
//! the way one would by reading a Karnaugh map.
//!
//! ## Quick Start
//!
//! ```rust
//! use boolmin::{simplify, Mode, SimplifyRequest};
//!
//! // Core entry point, input assumed valid
//! assert_eq!(simplify(&[1, 3, 5, 7], 3, Mode::Sop, &[]), "C");
//! assert_eq!(simplify(&[1, 2], 2, Mode::Pos, &[]), "(A + B) · (A' + B')");
//!
//! // Checked entry point for untrusted input
//! let request = SimplifyRequest::new(vec![0], 2, Mode::Sop, vec![]);
//! let result = request.simplify()?;
//! assert_eq!(result.simplified, "A'B'");
//! assert_eq!(result.variables, vec!["A", "B"]);
//! # Ok::<(), boolmin::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                                                              │
//! │  SimplifyRequest ──validate()──► ValidRequest                │
//! │                                      │                       │
//! │                                      ▼                       │
//! │  minterms ──► prime::generate ──► select::select             │
//! │                                      │                       │
//! │                                      ▼                       │
//! │                              format::assemble ──► String     │
//! │                                                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything under [`minimize`] is pure and holds no state between calls.
//! Selection is heuristic: essential implicants first, then a greedy fill,
//! so the result is not guaranteed to be the smallest possible cover.

pub mod config;
pub mod error;
pub mod minimize;
pub mod request;

// Re-exports
pub use config::{Config, OutputConfig, OutputFormat};
pub use error::{Error, Result};
pub use minimize::{simplify, variable_names, Mode, Pattern, PrimeImplicants, Term};
pub use request::{Simplification, SimplifyRequest, ValidRequest};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
