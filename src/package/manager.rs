//! Package manager detection and command formatting.
//!
//! The package manager is resolved once per invocation from:
//! 1. User override (config file or `--pm` flag)
//! 2. Lock file detection
//! 3. Fallback to npm

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    /// pnpm - Fast, disk space efficient package manager
    Pnpm,
    /// Bun - Fast all-in-one JavaScript runtime
    Bun,
    /// Node Package Manager (npm)
    #[default]
    Npm,
}

impl PackageManager {
    /// Get the executable name for this package manager.
    pub fn executable(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
            PackageManager::Npm => "npm",
        }
    }

    /// Get the command prefix used to run scripts.
    ///
    /// - pnpm: "pnpm"
    /// - bun: "bun"
    /// - npm: "npm run"
    pub fn run_prefix(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
            PackageManager::Npm => "npm run",
        }
    }

    /// Format the full command line to run a script.
    ///
    /// # Examples
    ///
    /// ```
    /// use psr::package::PackageManager;
    ///
    /// assert_eq!(PackageManager::Pnpm.command_line("dev"), "pnpm dev");
    /// assert_eq!(PackageManager::Bun.command_line("dev"), "bun dev");
    /// assert_eq!(PackageManager::Npm.command_line("dev"), "npm run dev");
    /// ```
    pub fn command_line(&self, script: &str) -> String {
        format!("{} {}", self.run_prefix(), script)
    }

    /// Get the lock file name associated with this package manager.
    ///
    /// npm has no marker here: it is the default when nothing else matches.
    pub fn lock_file(&self) -> Option<&'static str> {
        match self {
            PackageManager::Pnpm => Some("pnpm-lock.yaml"),
            PackageManager::Bun => Some("bun.lockb"),
            PackageManager::Npm => None,
        }
    }

    /// Get all supported package managers.
    pub fn all() -> &'static [PackageManager] {
        &[
            PackageManager::Pnpm,
            PackageManager::Bun,
            PackageManager::Npm,
        ]
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.executable())
    }
}

/// User setting for the package manager override.
///
/// `Auto` runs lock-file detection; anything else forces that manager.
/// Deserialization is lenient: an unrecognized string degrades to a forced
/// npm instead of failing, so a stale config value still yields a runnable
/// command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PmSetting {
    /// Run the detection algorithm.
    #[default]
    Auto,
    /// Force pnpm.
    Pnpm,
    /// Force bun.
    Bun,
    /// Force npm.
    Npm,
}

impl From<String> for PmSetting {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(PmSetting::Npm)
    }
}

impl std::str::FromStr for PmSetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(PmSetting::Auto),
            "pnpm" => Ok(PmSetting::Pnpm),
            "bun" => Ok(PmSetting::Bun),
            "npm" => Ok(PmSetting::Npm),
            _ => Err(format!(
                "Unknown package manager: '{s}'. Valid options are: auto, pnpm, bun, npm"
            )),
        }
    }
}

impl PmSetting {
    /// Get the forced package manager, if this setting is not `Auto`.
    pub fn forced(&self) -> Option<PackageManager> {
        match self {
            PmSetting::Auto => None,
            PmSetting::Pnpm => Some(PackageManager::Pnpm),
            PmSetting::Bun => Some(PackageManager::Bun),
            PmSetting::Npm => Some(PackageManager::Npm),
        }
    }
}

/// Resolve the package manager for a project.
///
/// Priority, first match wins:
/// 1. An explicit setting other than `Auto` wins unconditionally; no
///    filesystem probe is performed.
/// 2. `pnpm-lock.yaml` in the project root → pnpm
/// 3. `bun.lockb` in the project root → bun
/// 4. Fallback → npm
///
/// Lock files are only probed for existence; their content is never read.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use psr::package::{resolve_package_manager, PmSetting};
///
/// let manager = resolve_package_manager(PmSetting::Auto, Path::new("/path/to/project"));
/// println!("Using: {}", manager);
/// ```
pub fn resolve_package_manager(setting: PmSetting, project_dir: &Path) -> PackageManager {
    if let Some(forced) = setting.forced() {
        return forced;
    }

    if project_dir.join("pnpm-lock.yaml").exists() {
        return PackageManager::Pnpm;
    }

    if project_dir.join("bun.lockb").exists() {
        return PackageManager::Bun;
    }

    PackageManager::Npm
}
