//! Package.json parsing and package manager detection.

pub mod manager;
pub mod scripts;
pub mod types;

pub use manager::{resolve_package_manager, PackageManager, PmSetting};
pub use scripts::{parse_package_json, parse_scripts, parse_scripts_from_json};
pub use types::{Package, Script, Scripts};
