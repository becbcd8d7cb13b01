//! Rotolog Engine - Size-triggered rotation, file emission, and console
//! flood suppression

mod console;
mod rotation;
mod writer;

pub use console::ConsoleDeduper;
pub use rotation::{maybe_rotate, rotated_path, RotationIssue, RotationOutcome};
pub use writer::LogWriter;
