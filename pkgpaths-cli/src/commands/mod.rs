//! CLI command implementations.
//!
//! - `resolve`: Expand path specs into a filtered directory list
//! - `filter`: Report which names the skip rules exclude
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod filter;
pub mod resolve;
pub mod validate;

pub use completions::CompletionsCommand;
pub use filter::FilterCommand;
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;
