use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not access \"{}\" ({source})", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in \"{}\" ({source})", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Expected a JSON object at the root of \"{}\"", path.display())]
    NotAnObject { path: PathBuf },

    #[error("Line {line} ({mnemonic}) has {columns} opcode columns, but only {max} labels")]
    TooManyColumns {
        line: usize,
        mnemonic: String,
        columns: usize,
        max: usize,
    },

    #[error("Exception entry for {mnemonic} is malformed ({source})")]
    InvalidException {
        mnemonic: String,
        source: serde_json::Error,
    },

    #[error("Invalid configuration in \"{}\" ({source})", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Unknown addressing mode \"{0}\"")]
    UnknownAddressingMode(String),

    #[error("Could not serialize instruction set ({0})")]
    Serialize(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
