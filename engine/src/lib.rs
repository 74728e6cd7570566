pub mod engine;
pub mod error;
pub mod scratch;

pub use engine::{Engine, HostFn};
pub use error::RuntimeError;
pub use scratch::{BufferPool, ScratchBuffer};
