//! # feltforge-config
//!
//! Feltforge configuration, resolved from (lowest to highest priority)
//! built-in defaults, the `feltforge.toml` profile selected by
//! `FELTFORGE_PROFILE`, and `FELTFORGE_`-prefixed environment
//! variables.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use figment::{
    Error, Figment, Metadata, Profile, Provider,
    providers::{Env, Format, Serialized, Toml},
    value::{Dict, Map},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod error;
pub use error::ExtractConfigError;

// reexport so consumers can implement `figment::Provider` without a
// direct figment dependency
pub use figment;

/// Feltforge configuration.
///
/// Every setting a test run reads. Profiles are top-level tables in
/// `feltforge.toml`; values in the `default` profile back every other
/// profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// The profile this config belongs to.
    #[serde(skip)]
    pub profile: Profile,
    /// The project root directory.
    pub root: PathBuf,
    /// The directory contract dependencies are vendored into.
    pub libs: PathBuf,
    /// Block number reported to contracts, overriding the engine's.
    pub block_number: Option<u64>,
    /// Block timestamp reported to contracts, overriding the engine's.
    pub block_timestamp: Option<u64>,
}

impl Config {
    /// The default profile: "default".
    pub const DEFAULT_PROFILE: Profile = Profile::const_new("default");

    /// The configuration file's name.
    pub const FILE_NAME: &'static str = "feltforge.toml";

    /// The environment variable that selects the profile.
    pub const PROFILE_ENV: &'static str = "FELTFORGE_PROFILE";

    /// Loads the config from the current directory.
    ///
    /// See [`figment`](Self::figment) for the provider stack.
    #[track_caller]
    pub fn load() -> Self {
        Self::from_provider(Self::figment())
    }

    /// Loads the config rooted at `root`.
    #[track_caller]
    pub fn load_with_root(root: impl AsRef<Path>) -> Self {
        Self::from_provider(Self::figment_with_root(root.as_ref()))
    }

    /// Extracts a `Config` from `provider`, panicking if extraction
    /// fails.
    ///
    /// For a version that does not panic, use [`Config::try_from`].
    #[track_caller]
    pub fn from_provider<T: Provider>(provider: T) -> Self {
        trace!("load config with provider: {:?}", provider.metadata());
        Self::try_from(provider).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Attempts to extract a `Config` from `provider`.
    pub fn try_from<T: Provider>(provider: T) -> Result<Self, ExtractConfigError> {
        let figment = Figment::from(provider);
        let mut config = figment.extract::<Self>().map_err(ExtractConfigError::new)?;
        config.profile = figment.profile().clone();
        Ok(config)
    }

    /// The default figment: defaults ← `feltforge.toml` ← environment.
    pub fn figment() -> Figment {
        Self::default().into()
    }

    /// The default figment, rooted at `root`.
    pub fn figment_with_root(root: impl AsRef<Path>) -> Figment {
        Self { root: root.as_ref().into(), ..Self::default() }.into()
    }

    /// The profile the environment selects.
    fn selected_profile() -> Profile {
        Profile::from_env_or(Self::PROFILE_ENV, Self::DEFAULT_PROFILE)
    }
}

impl From<Config> for Figment {
    fn from(config: Config) -> Self {
        let profile = Config::selected_profile();
        let file = Env::var("FELTFORGE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| config.root.join(Config::FILE_NAME));

        Figment::default()
            .merge(config)
            .merge(Toml::file(file).nested())
            .merge(Env::prefixed("FELTFORGE_").ignore(&["PROFILE", "CONFIG"]).global())
            .select(profile)
    }
}

impl Provider for Config {
    fn metadata(&self) -> Metadata {
        Metadata::named("Feltforge Config")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        Serialized::defaults(self).data()
    }

    fn profile(&self) -> Option<Profile> {
        Some(self.profile.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: Self::DEFAULT_PROFILE,
            root: ".".into(),
            libs: "lib".into(),
            block_number: None,
            block_timestamp: None,
        }
    }
}
