//! Path utilities.

mod paths;

pub use paths::{find_package_json, find_project_root, user_config_file};
