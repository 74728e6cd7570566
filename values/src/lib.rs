pub mod heap;
pub mod value;


pub use heap::{Arena, FunctionData, Heap, ObjectData};
pub use value::{Value, ValueKind};
