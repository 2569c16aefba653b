//! Events Module
//!
//! Commands flowing from the view to the controller.

mod ui_command;

pub use ui_command::UiCommand;
