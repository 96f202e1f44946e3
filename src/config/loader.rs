//! Reads `runner.ron` from disk and deserializes it.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::RunnerConfig;

/// Why the config file could not be turned into a `RunnerConfig`.
#[derive(Debug)]
pub enum ConfigLoadError {
    Read {
        file: String,
        source: std::io::Error,
    },
    Parse {
        file: String,
        source: ron::error::SpannedError,
    },
}

impl ConfigLoadError {
    /// File the error came from.
    pub fn file(&self) -> &str {
        match self {
            Self::Read { file, .. } | Self::Parse { file, .. } => file,
        }
    }
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { file, source } => write!(f, "cannot read {}: {}", file, source),
            Self::Parse { file, source } => write!(f, "cannot parse {}: {}", file, source),
        }
    }
}

impl std::error::Error for ConfigLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// `IMPLICIT_SOME` lets optional fields such as the course seed be written as
/// bare values.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse config text. `file` only labels errors.
pub fn parse_config(source: &str, file: &str) -> Result<RunnerConfig, ConfigLoadError> {
    ron_options()
        .from_str(source)
        .map_err(|source| ConfigLoadError::Parse {
            file: file.to_string(),
            source,
        })
}

pub fn load_config_file(path: &Path) -> Result<RunnerConfig, ConfigLoadError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
        file: file.clone(),
        source,
    })?;

    parse_config(&contents, &file)
}
