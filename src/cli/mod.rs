//! CLI command implementations
//!
//! - `simplify`: single request from flags, and batch files
//! - `schema`: JSON schema output
//! - `util`: Shared argument and output helpers

pub mod schema;
pub mod simplify;
pub mod util;

pub use schema::cmd_schema;
pub use simplify::{cmd_batch, cmd_simplify};
