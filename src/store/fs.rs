//! Filesystem-backed pattern store

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use super::PatternStore;
use crate::error::{GfError, Result};
use crate::models::Pattern;
use crate::utils::environment::pattern_dir;

const PATTERN_EXTENSION: &str = "json";

/// Pattern store over a directory of `<name>.json` files.
pub struct FsPatternStore {
    dir: PathBuf,
}

impl FsPatternStore {
    /// Create a store over an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store over the user's pattern directory (`~/.config/gf` if
    /// it exists, `~/.gf` otherwise).
    ///
    /// # Errors
    ///
    /// Returns [`GfError::HomeDirUnavailable`] if the home directory cannot
    /// be determined.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(pattern_dir()?))
    }

    /// The directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn pattern_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{PATTERN_EXTENSION}"))
    }
}

/// Reject names that would escape the pattern directory.
///
/// Names are interpolated into file paths, so path separators and parent
/// components must not pass through.
fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(GfError::MissingField("name"));
    }

    let is_traversal = Path::new(name)
        .components()
        .any(|c| !matches!(c, Component::Normal(_)));
    if is_traversal || name.contains(['/', '\\']) {
        return Err(GfError::InvalidName(name.to_string()));
    }

    Ok(())
}

/// Serialize a definition the way the pattern files are written: pretty-
/// printed with 4-space indentation and a trailing newline.
fn to_pretty_json(pattern: &Pattern) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    pattern
        .serialize(&mut serializer)
        .map_err(|err| GfError::WriteFailed(err.into()))?;
    buf.push(b'\n');
    Ok(buf)
}

impl PatternStore for FsPatternStore {
    /// # Errors
    ///
    /// [`GfError::PatternNotFound`] if no file exists for the name (the
    /// message stays generic rather than echoing the path),
    /// [`GfError::MalformedPattern`] if the file does not parse.
    fn load(&self, name: &str) -> Result<Pattern> {
        validate_name(name)?;

        let path = self.pattern_path(name);
        let contents = fs::read_to_string(&path).map_err(|_| GfError::PatternNotFound)?;

        serde_json::from_str(&contents).map_err(|source| GfError::MalformedPattern { path, source })
    }

    /// # Errors
    ///
    /// [`GfError::MissingField`] if the name or pattern is empty (checked
    /// before any filesystem access), [`GfError::PatternExists`] if a file
    /// with that name is already there, [`GfError::WriteFailed`] on other
    /// I/O failures.
    fn save(&self, name: &str, flags: &str, pattern: &str) -> Result<()> {
        validate_name(name)?;
        if pattern.is_empty() {
            return Err(GfError::MissingField("pattern"));
        }

        fs::create_dir_all(&self.dir).map_err(GfError::WriteFailed)?;

        // Exclusive create: a concurrent save of the same name loses here
        // instead of silently overwriting.
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.pattern_path(name))
            .map_err(|err| {
                if err.kind() == ErrorKind::AlreadyExists {
                    GfError::PatternExists(name.to_string())
                } else {
                    GfError::WriteFailed(err)
                }
            })?;

        let json = to_pretty_json(&Pattern::single(flags, pattern))?;
        file.write_all(&json).map_err(GfError::WriteFailed)
    }

    /// A missing or empty directory yields an empty list, not an error.
    fn list(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return Ok(Vec::new()),
        };

        let mut names: Vec<String> = entries
            .flatten()
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension()? != PATTERN_EXTENSION {
                    return None;
                }
                Some(path.file_stem()?.to_string_lossy().into_owned())
            })
            .collect();

        names.sort();
        Ok(names)
    }
}
