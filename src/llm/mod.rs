pub mod completion_interface;
pub mod gemini;

pub use completion_interface::*;
pub use gemini::*;
