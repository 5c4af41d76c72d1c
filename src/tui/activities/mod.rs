//! Activity modules for the TUI.

pub mod browse;
pub mod edit;

pub use browse::BrowseActivity;
pub use edit::EditActivity;
