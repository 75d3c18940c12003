use crate::core::fields::FieldSet;
use crate::errors::{AppError, AppResult};
use crate::models::DateRange;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// File name suggested for header-inferred conversions.
    #[serde(default = "default_output_name")]
    pub output_name: String,
    /// File name suggested for range-driven conversions; `{start}` and `{end}`
    /// are replaced with `YYYY-MM-DD` dates.
    #[serde(default = "default_range_output_pattern")]
    pub range_output_pattern: String,
    /// Character that marks a reference header label as a date (`1/10`).
    #[serde(default = "default_date_separator")]
    pub date_separator: char,
    /// Header labels and positional fallbacks for the source columns.
    #[serde(default)]
    pub fields: FieldSet,
}

fn default_output_name() -> String {
    "Employee_Time_Converted.xlsx".to_string()
}
fn default_range_output_pattern() -> String {
    "Employee_Time_{start}_{end}.xlsx".to_string()
}
fn default_date_separator() -> char {
    '/'
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_name: default_output_name(),
            range_output_pattern: default_range_output_pattern(),
            date_separator: default_date_separator(),
            fields: FieldSet::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load(custom: Option<&Path>) -> AppResult<Self> {
        let path = custom
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            if custom.is_some() {
                return Err(AppError::Config(format!(
                    "configuration file not found: {}",
                    path.display()
                )));
            }
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.output_name.trim().is_empty() {
            return Err(AppError::Config("output_name must not be empty".into()));
        }
        if self.date_separator.is_alphanumeric() || self.date_separator.is_whitespace() {
            return Err(AppError::Config(format!(
                "date_separator '{}' cannot be a letter, digit or space",
                self.date_separator
            )));
        }
        Ok(())
    }

    /// Suggested output file name for a run.
    pub fn output_file_name(&self, range: Option<&DateRange>) -> String {
        match range {
            None => self.output_name.clone(),
            Some(r) => self
                .range_output_pattern
                .replace("{start}", &r.start.format("%Y-%m-%d").to_string())
                .replace("{end}", &r.end.format("%Y-%m-%d").to_string()),
        }
    }

    /// Write the default configuration file (never overwrites an existing one).
    pub fn init_all(custom: Option<&Path>) -> AppResult<PathBuf> {
        let path = custom
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if path.exists() {
            return Ok(path);
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }
}
