//! Native test thunks for the Rill embedding API.
//!
//! Each thunk is an exported function with the fixed calling convention
//! `fn(&mut Engine, &mut CallArguments) -> Result<(), HarnessError>`: it reads
//! positional arguments through checked accessors, forwards into exactly one
//! embedding operation, and writes the result into the write-once return
//! slot. The harness looks thunks up by `suite.name` in the [`Registry`] and
//! reads the drained slot after dispatch.

pub mod args;
pub mod error;
pub mod function;
pub mod registry;

pub use args::{CallArguments, ReturnSlot};
pub use error::{BindingError, HarnessError};
pub use registry::{Registry, RunOutcome, RunReport, Thunk, ThunkEntry};
