pub mod delimited;
pub mod file_writer;

pub use delimited::DelimitedWriter;
pub use file_writer::FileWriter;
