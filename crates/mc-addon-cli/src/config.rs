use mc_addon_core::EngineVersion;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct AddonConfig {
    pub project: ProjectSection,
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Deserialize)]
pub struct ProjectSection {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Pack version as `[major, minor, patch]`. Default: `[1, 0, 0]`.
    #[serde(default = "default_version")]
    pub version: EngineVersion,
    #[serde(default)]
    pub min_engine_version: EngineVersion,
}

fn default_version() -> EngineVersion {
    EngineVersion::new(1, 0, 0)
}

#[derive(Debug, Deserialize)]
pub struct OutputSection {
    #[serde(default = "default_output_directory")]
    pub directory: String,
    /// Also write a `.mcaddon` archive.
    #[serde(default)]
    pub package: bool,
}

fn default_output_directory() -> String {
    "build".into()
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            package: false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AddonConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config() {
        let toml_str = r#"
            [project]
            name = "Ruby Tools"
            description = "Rubies everywhere"
            version = [1, 2, 0]
            min_engine_version = [1, 20, 80]

            [output]
            directory = "dist"
            package = true

            [logging]
            level = "debug"
        "#;
        let config: AddonConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.project.name, "Ruby Tools");
        assert_eq!(config.project.description, "Rubies everywhere");
        assert_eq!(config.project.version, EngineVersion::new(1, 2, 0));
        assert_eq!(config.project.min_engine_version, EngineVersion::new(1, 20, 80));
        assert_eq!(config.output.directory, "dist");
        assert!(config.output.package);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn parse_minimal_config() {
        let config: AddonConfig = toml::from_str("[project]\nname = \"Minimal\"\n").unwrap();
        assert!(config.project.description.is_empty());
        assert_eq!(config.project.version, EngineVersion::new(1, 0, 0));
        assert_eq!(config.project.min_engine_version, EngineVersion::default());
        // output and logging sections default when absent
        assert_eq!(config.output.directory, "build");
        assert!(!config.output.package);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn missing_project_is_an_error() {
        assert!(toml::from_str::<AddonConfig>("[output]\ndirectory = \"x\"\n").is_err());
    }
}
