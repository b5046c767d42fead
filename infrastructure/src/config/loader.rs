//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const PROJECT_FILES: [&str; 2] = ["hike.toml", ".hike.toml"];
const ENV_PREFIX: &str = "HIKE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `HIKE_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./hike.toml` or `./.hike.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/hike-predictor/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Self::env_provider()).extract().map_err(Box::new)
    }

    /// Load defaults plus environment only (for --no-config)
    pub fn load_env_only() -> Result<FileConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Self::env_provider())
            .extract()
            .map_err(Box::new)
    }

    /// `HIKE_API_URL` and `HIKE_API_TIMEOUT_SECONDS` map onto `[api]`;
    /// any other `HIKE_SECTION__KEY` maps onto `section.key`.
    fn env_provider() -> Env {
        Env::prefixed(ENV_PREFIX).map(|key| {
            let key = key.as_str().to_ascii_lowercase();
            match key.as_str() {
                "api_url" => "api.base_url".into(),
                "api_timeout_seconds" => "api.timeout_seconds".into(),
                other => other.replace("__", ".").into(),
            }
        })
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/hike-predictor/config.toml if set,
    /// otherwise falls back to ~/.config/hike-predictor/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("hike-predictor").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] {}API_URL, {}API_TIMEOUT_SECONDS", ENV_PREFIX, ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./hike.toml or ./.hike.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
