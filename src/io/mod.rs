pub mod csv;

pub use csv::{write_trace, write_trace_file};
