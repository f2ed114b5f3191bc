//! Configuration constants and profile loading for postline
//!
//! Settings come from three layers, later layers winning:
//! built-in defaults, a section of the INI profile file, and command line flags.

use crate::cmd_args::CommandLineArgs;
use anyhow::{bail, Context, Result};
use ini::{Ini, Properties};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Default profile file path for postline
pub const DEFAULT_PROFILE_PATH: &str = "~/.postline/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "POSTLINE_PROFILE_PATH";

/// Environment variable holding the tracing filter (e.g. `debug`, `postline=trace`)
pub const LOG_LEVEL_ENV_VAR: &str = "POSTLINE_LOG_LEVEL";

/// Public JSONPlaceholder API
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Number of posts loaded by the recent posts view
pub const DEFAULT_VIEW_RECENT_LIMIT: usize = 6;

/// JSONPlaceholder serves post ids 1 through 100
pub const DEFAULT_MIN_POST_ID: u64 = 1;
pub const DEFAULT_MAX_POST_ID: u64 = 100;

const KEY_BASE_URL: &str = "base_url";
const KEY_RECENT_LIMIT: &str = "recent_limit";
const KEY_MIN_POST_ID: &str = "min_post_id";
const KEY_MAX_POST_ID: &str = "max_post_id";
const KEY_TIMEOUT_SECS: &str = "timeout_secs";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Inclusive range of post ids accepted by search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostIdRange {
    min: u64,
    max: u64,
}

impl PostIdRange {
    pub fn new(min: u64, max: u64) -> Result<Self> {
        if min == 0 {
            bail!("post ids start at 1, got minimum {min}");
        }
        if min > max {
            bail!("minimum post id {min} is greater than maximum {max}");
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn contains(&self, id: u64) -> bool {
        (self.min..=self.max).contains(&id)
    }
}

impl Default for PostIdRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_POST_ID,
            max: DEFAULT_MAX_POST_ID,
        }
    }
}

/// Resolved settings for a viewer session
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub base_url: String,
    pub recent_limit: usize,
    pub id_range: PostIdRange,
    pub timeout: Option<Duration>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            recent_limit: DEFAULT_VIEW_RECENT_LIMIT,
            id_range: PostIdRange::default(),
            timeout: None,
        }
    }
}

impl ViewerConfig {
    /// Load a profile section from an INI file.
    ///
    /// A missing file or section yields the defaults; a malformed value is an error.
    pub fn load(profile_name: &str, profile_path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(profile_path);
        let path = Path::new(expanded.as_ref());

        if !path.exists() {
            tracing::debug!("Profile file '{}' not found, using defaults", path.display());
            return Ok(Self::default());
        }

        tracing::debug!("Loading profile '{}' from '{}'", profile_name, path.display());
        let ini = Ini::load_from_file(path)
            .with_context(|| format!("failed to read profile file '{}'", path.display()))?;
        Self::from_ini(&ini, profile_name)
    }

    /// Build a config from an already parsed INI document
    pub fn from_ini(ini: &Ini, profile_name: &str) -> Result<Self> {
        let Some(section) = ini.section(Some(profile_name)) else {
            tracing::debug!("Profile '{}' not found, using defaults", profile_name);
            return Ok(Self::default());
        };

        let defaults = Self::default();
        let min = parse_key(section, KEY_MIN_POST_ID, profile_name)?
            .unwrap_or(defaults.id_range.min());
        let max = parse_key(section, KEY_MAX_POST_ID, profile_name)?
            .unwrap_or(defaults.id_range.max());

        Ok(Self {
            base_url: section
                .get(KEY_BASE_URL)
                .map(str::to_string)
                .unwrap_or(defaults.base_url),
            recent_limit: parse_key(section, KEY_RECENT_LIMIT, profile_name)?
                .unwrap_or(defaults.recent_limit),
            id_range: PostIdRange::new(min, max)
                .with_context(|| format!("invalid post id range in profile '{profile_name}'"))?,
            timeout: parse_key::<u64>(section, KEY_TIMEOUT_SECS, profile_name)?
                .map(Duration::from_secs),
        })
    }

    /// Apply command line overrides on top of the profile values
    pub fn with_args(mut self, args: &CommandLineArgs) -> Result<Self> {
        if let Some(base_url) = args.base_url() {
            self.base_url = base_url.to_string();
        }
        if let Some(limit) = args.recent_limit() {
            self.recent_limit = limit;
        }
        if args.min_id().is_some() || args.max_id().is_some() {
            self.id_range = PostIdRange::new(
                args.min_id().unwrap_or(self.id_range.min()),
                args.max_id().unwrap_or(self.id_range.max()),
            )?;
        }
        if let Some(secs) = args.timeout_secs() {
            self.timeout = Some(Duration::from_secs(secs));
        }
        Ok(self)
    }
}

fn parse_key<T>(section: &Properties, key: &str, profile_name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    section
        .get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("invalid {key} '{raw}' in profile '{profile_name}'"))
        })
        .transpose()
}
