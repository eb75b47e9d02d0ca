pub mod emitter;
pub mod path_manager;

pub use emitter::{EmitReport, Emitter};
pub use path_manager::OutputPathManager;
