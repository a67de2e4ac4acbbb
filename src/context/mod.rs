pub mod concat;
pub mod error;
pub mod file_list;
pub mod lister;
pub mod types;
