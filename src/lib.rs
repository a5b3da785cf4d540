// ABOUTME: Library root for envlookup - environment variable placeholder resolution.
// ABOUTME: The command-line binary is in main.rs.

pub mod error;
pub mod lookup;
pub mod substitute;
pub mod vars;
