pub mod file_writer;
pub mod selector;

pub use file_writer::create_file;
pub use selector::Selector;
