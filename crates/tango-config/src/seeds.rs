use std::fs;
use std::path::Path;

use tango_types::SeedGroup;

use crate::ConfigError;

/// Load seed groups from a JSON array of `{"category": .., "keys": [..]}`.
///
/// Group order and key order are kept as written.
pub fn load_seed_groups(path: &Path) -> Result<Vec<SeedGroup>, ConfigError> {
    tracing::info!("Loading seed words from {}", path.display());
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let groups: Vec<SeedGroup> = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let key_count: usize = groups.iter().map(|g| g.keys.len()).sum();
    tracing::info!("Loaded {} seed words in {} groups", key_count, groups.len());
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_keeps_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{ "category": "N4", "keys": ["合う", "相手"] }},
                {{ "category": "N5", "keys": ["家"] }},
                {{ "category": "N3" }}
            ]"#
        )
        .unwrap();

        let groups = load_seed_groups(file.path()).unwrap();

        assert_eq!(
            groups,
            vec![
                SeedGroup::new("N4", vec!["合う".into(), "相手".into()]),
                SeedGroup::new("N5", vec!["家".into()]),
                SeedGroup::new("N3", vec![]),
            ]
        );
    }

    #[test]
    fn test_load_rejects_object_form() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "N5": ["家"] }}"#).unwrap();

        let err = load_seed_groups(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
