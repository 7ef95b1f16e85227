/// UI building blocks
///
/// Pure view builders: each function maps read-only state to widgets and
/// names the messages to emit on interaction. No state lives here.

pub mod folders;
pub mod grid;
pub mod popup;
pub mod sidebar;
