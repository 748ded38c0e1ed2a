//! The [`Config`] value object and its resolution chain.

use std::collections::HashMap;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::environment::Environment;
use crate::sources;

/// Setting name for the parallel request worker count.
pub const NUM_REQUESTS_WORKERS: &str = "NUM_REQUESTS_WORKERS";
/// Setting name for the download chunk size in bytes.
pub const DOWNLOAD_CHUNK_SIZE: &str = "DOWNLOAD_CHUNK_SIZE";

const ENVIRONMENT: &str = "ENVIRONMENT";
const HARMONY_HOSTNAME: &str = "HARMONY_HOSTNAME";
const EDL_VALIDATION_URL: &str = "EDL_VALIDATION_URL";

/// Settings for one Harmony deployment environment.
///
/// Every read goes through [`Config::resolve`], which consults an ordered
/// chain and returns the first hit:
///
/// 1. in-process overrides set with [`Config::with_override`]
/// 2. process environment variables (setting names are upper-cased before
///    lookup, so `cfg.resolve("num_requests_workers")` honors
///    `NUM_REQUESTS_WORKERS`, and an empty value still counts as set)
/// 3. the built-in defaults table
/// 4. the properties derived from the selected [`Environment`]
///
/// Unknown names resolve to `None`; resolution never fails. Construction
/// imports an optional `.env` settings file into the process environment
/// without overwriting variables that are already set, so deployment-time
/// environment variables win over file entries, and both override the
/// built-in defaults.
#[derive(Debug, Clone)]
pub struct Config {
    environment: Environment,
    overrides: HashMap<String, String>,
    defaults: HashMap<String, String>,
}

impl Default for Config {
    /// UAT settings, the deployment client work normally starts against.
    fn default() -> Self {
        Self::new(Environment::default())
    }
}

impl Config {
    /// Create settings for `environment`.
    ///
    /// Side effect: best-effort import of an optional `.env` settings file
    /// into the process environment (see module notes on [`Config`]); a
    /// missing file is silently skipped and already-set variables are left
    /// untouched.
    pub fn new(environment: Environment) -> Self {
        sources::import_settings_file();
        let cfg = Self {
            environment,
            overrides: HashMap::new(),
            defaults: sources::builtin_defaults(),
        };
        debug!(environment = %cfg.environment, "config created");
        cfg
    }

    /// Add an in-process override, the highest-precedence layer of the
    /// resolution chain. Names are upper-cased on insert, like environment
    /// variables.
    ///
    /// Unlike a process environment variable, an override affects only this
    /// instance.
    pub fn with_override(mut self, name: &str, value: &str) -> Self {
        self.overrides
            .insert(name.to_ascii_uppercase(), value.to_string());
        self
    }

    /// Resolve a named setting through the precedence chain.
    ///
    /// Returns `None` when no layer knows the name.
    pub fn resolve(&self, name: &str) -> Option<String> {
        let key = name.to_ascii_uppercase();
        if let Some(value) = self.first_hit(&key) {
            return Some(value);
        }
        match key.as_str() {
            ENVIRONMENT => Some(self.environment().to_string()),
            HARMONY_HOSTNAME => Some(self.harmony_hostname()),
            EDL_VALIDATION_URL => Some(self.edl_validation_url()),
            _ => None,
        }
    }

    /// The selected [`Environment`], honoring an `ENVIRONMENT` override
    /// when it names a variant.
    ///
    /// An override that does not parse (say `ENVIRONMENT=example.com`) is
    /// ignored with a warning and the construction-time variant is used,
    /// so hostname derivation always starts from a valid variant. The raw
    /// string stays visible through `resolve("ENVIRONMENT")`.
    pub fn environment(&self) -> Environment {
        match self.first_hit(ENVIRONMENT) {
            Some(raw) => Environment::from_str(&raw).unwrap_or_else(|err| {
                warn!(%err, "ignoring ENVIRONMENT override");
                self.environment
            }),
            None => self.environment,
        }
    }

    /// Hostname for this configuration's environment.
    ///
    /// A `HARMONY_HOSTNAME` override short-circuits the variant lookup
    /// entirely, e.g. to point a client at a local deployment.
    pub fn harmony_hostname(&self) -> String {
        match self.first_hit(HARMONY_HOSTNAME) {
            Some(hostname) => hostname,
            None => self.environment().hostname().to_string(),
        }
    }

    /// URL of the endpoint used to validate Earthdata Login credentials
    /// against this environment, built from the (possibly overridden)
    /// hostname.
    pub fn edl_validation_url(&self) -> String {
        match self.first_hit(EDL_VALIDATION_URL) {
            Some(url) => url,
            None => format!("https://{}/jobs", self.harmony_hostname()),
        }
    }

    /// Parallel request worker count, parsed from the resolved
    /// `NUM_REQUESTS_WORKERS` setting.
    pub fn num_requests_workers(&self) -> usize {
        self.parsed_or(NUM_REQUESTS_WORKERS, sources::DEFAULT_NUM_REQUESTS_WORKERS)
    }

    /// Download chunk size in bytes, from `DOWNLOAD_CHUNK_SIZE`.
    pub fn download_chunk_size(&self) -> u64 {
        self.parsed_or(DOWNLOAD_CHUNK_SIZE, sources::DEFAULT_DOWNLOAD_CHUNK_SIZE)
    }

    // Overrides, then process environment, then the defaults table.
    // Computed properties are layered on in resolve().
    fn first_hit(&self, key: &str) -> Option<String> {
        self.overrides
            .get(key)
            .cloned()
            .or_else(|| sources::process_env(key))
            .or_else(|| self.defaults.get(key).cloned())
    }

    // Tunables fall back to their built-in default on a non-numeric value
    // rather than erroring.
    fn parsed_or<T: FromStr + Copy>(&self, name: &str, fallback: T) -> T {
        match self.resolve(name) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(name, value = %raw, "setting is not numeric, using built-in default");
                fallback
            }),
            None => fallback,
        }
    }
}
