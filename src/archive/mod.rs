/// Archive access module
///
/// This module handles:
/// - Listing the entries of a ZIP archive
/// - Extracting individual image payloads
/// - Validating that extracted bytes decode as images

pub mod reader;
