use std::path::{Path, PathBuf};

use crate::error::{GfError, Result};

/// Resolve the directory where pattern files are stored.
///
/// Prefers `<home>/.config/gf` when that directory already exists on disk,
/// falling back to `<home>/.gf` otherwise. The fallback need not exist yet;
/// callers creating a new pattern are responsible for creating it.
///
/// # Errors
///
/// Returns [`GfError::HomeDirUnavailable`] if the home directory cannot be
/// determined.
pub fn pattern_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(GfError::HomeDirUnavailable)?;
    Ok(pattern_dir_in(&home))
}

/// Resolution against an explicit home directory, for deterministic tests.
pub fn pattern_dir_in(home: &Path) -> PathBuf {
    let config_style = home.join(".config").join("gf");
    if config_style.exists() {
        return config_style;
    }
    home.join(".gf")
}
