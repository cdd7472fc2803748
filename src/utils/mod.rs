pub mod paths;

pub use paths::{default_output_path, validate_file_size};
