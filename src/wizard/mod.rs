//! Terminal front end for the booking wizard
//!
//! - `command`: parsing typed lines into commands
//! - `view`: the per-step views, progress bar and tabs
//! - `shell`: the read/apply/redraw loop

pub mod command;
pub mod shell;
pub mod view;

pub use command::{Command, ExtraChange, TravelerField};
pub use shell::WizardShell;
pub use view::{StepView, progress_line, tabs_line};
