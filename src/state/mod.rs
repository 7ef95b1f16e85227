/// State management module
///
/// This module handles all gallery state, including:
/// - Natural filename ordering (natural.rs)
/// - Archive listing to folder groups (indexer.rs)
/// - Displayed images and popup cursor (gallery.rs)

pub mod gallery;
pub mod indexer;
pub mod natural;
