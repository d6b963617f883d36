mod source;
mod writer;

pub use source::read_source;
pub use writer::OutputWriter;
