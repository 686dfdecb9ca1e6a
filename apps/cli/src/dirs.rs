use std::path::PathBuf;

use app_api::expand_home_path;

const DATA_DIR_NAME: &str = "fuel-tracker";
const DB_FILE_NAME: &str = "fuel-tracker.sqlite";

#[derive(Debug, Clone)]
pub struct DataDirResolution {
    pub dir: PathBuf,
    pub matched_existing: bool,
}

/// Flag or config value first, then the platform data directory.
pub fn resolve_data_dir(configured: Option<&str>) -> Result<DataDirResolution, String> {
    let dir = match configured.filter(|value| !value.trim().is_empty()) {
        Some(value) => expand_home_path(value.trim()),
        None => default_data_dir()?,
    };
    Ok(DataDirResolution {
        matched_existing: dir.join(DB_FILE_NAME).exists(),
        dir,
    })
}

fn default_data_dir() -> Result<PathBuf, String> {
    if let Ok(dir) = std::env::var("XDG_DATA_HOME")
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir).join(DATA_DIR_NAME));
    }
    let home = std::env::var("HOME").map_err(|err| format!("resolve HOME: {}", err))?;
    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join(DATA_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn configured_dir_wins() {
        let dir = TempDir::new().expect("tempdir");
        let configured = dir.path().to_string_lossy().to_string();

        let resolved = resolve_data_dir(Some(&configured)).expect("resolve");

        assert_eq!(resolved.dir, dir.path());
        assert!(!resolved.matched_existing);
    }

    #[test]
    fn detects_existing_database() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(dir.path().join(DB_FILE_NAME), b"").expect("write");
        let configured = dir.path().to_string_lossy().to_string();

        let resolved = resolve_data_dir(Some(&configured)).expect("resolve");

        assert!(resolved.matched_existing);
    }
}
