use std::fmt;
use std::path::PathBuf;

use orienteer_core::GridError;

/// Errors raised while reading inputs or writing outputs.
#[derive(Debug)]
pub enum InputError {
    /// A file could not be read or written.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// An image could not be decoded or encoded.
    Image {
        path: Option<PathBuf>,
        source: image::ImageError,
    },
    /// A text input is malformed. `line` is 1-based.
    Parse {
        what: &'static str,
        line: usize,
        msg: String,
    },
    /// Parsed values do not form a rectangular grid.
    Grid(GridError),
}

impl InputError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(what: &'static str, line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            what,
            line,
            msg: msg.into(),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Image {
                path: Some(path),
                source,
            } => write!(f, "{}: {source}", path.display()),
            Self::Image { path: None, source } => write!(f, "image: {source}"),
            Self::Parse { what, line, msg } => write!(f, "{what}, line {line}: {msg}"),
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Image { source, .. } => Some(source),
            Self::Parse { .. } => None,
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<GridError> for InputError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
