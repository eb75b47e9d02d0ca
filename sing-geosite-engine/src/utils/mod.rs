pub mod log_format;

pub use log_format::{join_codes, preview_codes};
