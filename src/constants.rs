// Centralized magic strings & default values
pub const DEFAULT_EXCLUDED_DIRS: [&str; 3] = ["node_modules", ".git", ".next"];
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

pub const HEADER_FENCE: &str = "=====";
pub const NOT_FOUND_BODY: &str = "File not found.";
pub const READ_ERROR_PREFIX: &str = "Error reading file:";

pub const LIST_OPENER: &str = "file_list = [";
pub const LIST_CLOSER: &str = "]";
pub const LIST_INDENT: &str = "    ";
pub const GLOB_RULE_PREFIX: &str = "glob:";
