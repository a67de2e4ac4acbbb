pub mod cli;
pub mod config;
pub mod constants;
pub mod context;
pub mod logging;

// Short paths for the two halves of the tool
pub use context::concat;
pub use context::file_list;
pub use context::lister;
