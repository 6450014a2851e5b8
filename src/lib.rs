//! Ten-pin bowling score keeper (workspace facade crate).
//!
//! Re-exports the member crates under `tenpin::{core,input,term,types}`; the
//! implementation lives in dedicated crates under `crates/`.

pub use tenpin_core as core;
pub use tenpin_input as input;
pub use tenpin_term as term;
pub use tenpin_types as types;
