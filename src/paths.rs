use std::path::{Path, PathBuf};

/// Filesystem lookups the parser needs: existence checks and `~` expansion.
pub trait PathResolver {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn home_dir(&self) -> Option<PathBuf>;

    /// Expands a leading `~` or `~/` to the home directory.
    /// `~user` forms and strings without a leading tilde are returned as-is.
    fn expand_tilde(&self, raw: &str) -> PathBuf {
        let rest = match raw.strip_prefix('~') {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => return PathBuf::from(raw),
        };

        match (self.home_dir(), rest.trim_start_matches('/')) {
            (Some(home), "") => home,
            (Some(home), rest) => home.join(rest),
            (None, _) => PathBuf::from(raw),
        }
    }
}

pub struct FileSystem;

impl PathResolver for FileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}
