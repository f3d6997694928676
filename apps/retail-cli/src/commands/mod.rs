//! # Commands Module
//!
//! Handlers behind each `retail-calc` subcommand.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── quote.rs    ◄─── Form validation + price breakdown
//! └── regions.rs  ◄─── Region table edits and listing
//! ```
//!
//! Handlers return the text to print instead of printing it, so they can
//! be tested without capturing stdout.

pub mod quote;
pub mod regions;
