pub mod logging;
pub mod paths;
pub mod timestamps;

pub use logging::init_logging;
pub use paths::{open_input_file, validate_input_file};
pub use timestamps::{format_iso_naive, format_iso_offset, from_unix_micros};
