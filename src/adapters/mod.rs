// Adapters layer: concrete DataSink implementations.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileSink;
pub use memory::MemorySink;
