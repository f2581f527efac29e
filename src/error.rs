use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DedupError {
    #[error("Input file not found: {}: {source}", path.display())]
    InputNotFound { path: PathBuf, source: io::Error },

    #[error("Failed to read input file: {}: {source}", path.display())]
    InputUnreadable { path: PathBuf, source: io::Error },

    #[error("Failed to write output file: {}: {source}", path.display())]
    OutputUnwritable { path: PathBuf, source: io::Error },
}

impl DedupError {
    /// Classifies a failure to open the input.
    pub(crate) fn input_open(path: &std::path::Path, source: io::Error) -> DedupError {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => DedupError::InputNotFound { path, source },
            _ => DedupError::InputUnreadable { path, source },
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            DedupError::InputNotFound { path, .. }
            | DedupError::InputUnreadable { path, .. }
            | DedupError::OutputUnwritable { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn not_found_is_classified() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e = DedupError::input_open(Path::new("all.txt"), err);
        assert!(matches!(e, DedupError::InputNotFound { .. }));
        assert_eq!(e.path(), Path::new("all.txt"));
    }

    #[test]
    fn permission_denied_is_unreadable() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let e = DedupError::input_open(Path::new("all.txt"), err);
        assert!(matches!(e, DedupError::InputUnreadable { .. }));
    }

    #[test]
    fn message_names_path_and_reason() {
        let e = DedupError::OutputUnwritable {
            path: PathBuf::from("out/de_all.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = e.to_string();
        assert!(msg.contains("out/de_all.txt"));
        assert!(msg.contains("denied"));
    }
}
