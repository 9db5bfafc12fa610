//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "outreach-scout";
const PROJECT_FILES: [&str; 2] = ["outreach.toml", ".outreach.toml"];
const ENV_PREFIX: &str = "OUTREACH_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `OUTREACH_SECTION__KEY` (e.g. `OUTREACH_GENERATION__MODEL`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./outreach.toml` or `./.outreach.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/outreach-scout/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        if let Some(path) = config_path.filter(|path| !path.exists()) {
            return Err(Box::new(figment::Error::from(format!(
                "config file not found: {}",
                path.display()
            ))));
        }

        let mut figment = Self::file_figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        );

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Defaults merged with whichever of the given files exist
    fn file_figment(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project, explicit].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/outreach-scout/config.toml if set,
    /// otherwise falls back to ~/.config/outreach-scout/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = config_path {
            let status = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", status, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./outreach.toml or ./.outreach.toml");
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_toml(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.generation.model, "gpt-3.5-turbo");
        assert!(config.transports.is_empty());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("outreach-scout"));
    }

    #[test]
    fn test_later_files_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = write_toml(
            &dir,
            "global.toml",
            r#"
[generation]
model = "global-model"
temperature = 0.1

[sender]
name = "Global Name"
"#,
        );
        let project = write_toml(
            &dir,
            "outreach.toml",
            r#"
[generation]
model = "project-model"
"#,
        );
        let explicit = write_toml(
            &dir,
            "explicit.toml",
            r#"
[pipeline]
concurrency = 9
"#,
        );

        let config: FileConfig =
            ConfigLoader::file_figment(Some(&global), Some(&project), Some(&explicit))
                .extract()
                .unwrap();

        assert_eq!(config.generation.model, "project-model");
        assert_eq!(config.generation.temperature, 0.1);
        assert_eq!(config.sender.name, "Global Name");
        assert_eq!(config.pipeline.concurrency, 9);
        assert_eq!(config.pipeline.max_contact_pages, 3);
    }

    #[test]
    fn test_missing_optional_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let config: FileConfig = ConfigLoader::file_figment(Some(&missing), None, None)
            .extract()
            .unwrap();

        assert_eq!(config.pipeline.concurrency, 4);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let result = ConfigLoader::load(Some(&missing));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("nope.toml"));
    }

    #[test]
    fn test_environment_overrides_project_file() {
        figment::Jail::expect_with(|jail| {
            let dir = jail.directory().display().to_string();
            jail.set_env("XDG_CONFIG_HOME", dir);
            jail.create_file(
                "outreach.toml",
                r#"
[generation]
model = "project-model"
temperature = 0.2
"#,
            )?;
            jail.set_env("OUTREACH_GENERATION__MODEL", "gpt-4o-mini");
            jail.set_env("OUTREACH_PIPELINE__CONCURRENCY", "8");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;

            assert_eq!(config.generation.model, "gpt-4o-mini");
            assert_eq!(config.generation.temperature, 0.2);
            assert_eq!(config.pipeline.concurrency, 8);
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write_toml(&dir, "bad.toml", "[pipeline]\nconcurrency = \"many\"\n");

        let result: Result<FileConfig, _> =
            ConfigLoader::file_figment(None, Some(&bad), None).extract();

        assert!(result.is_err());
    }
}
