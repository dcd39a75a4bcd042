use std::path::Path;

use anyhow::Context;
use tango_config::Config;
use tango_lang_japanese::{JlptLevel, default_seed_groups};
use tango_types::SeedGroup;

/// Load the JSON profile at `path`, or build one from the environment
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            Config::load(path).with_context(|| format!("Failed to load config {}", path.display()))
        }
        None => {
            tracing::debug!("No config file given, using environment defaults");
            Ok(Config::new())
        }
    }
}

/// Seed groups from `seeds_path` when set, otherwise the embedded lists.
///
/// `levels` picks which groups run; with a seed file it filters by category
/// and keeps the file's order, with the embedded lists it also sets the order.
pub fn load_seeds(
    seeds_path: Option<&Path>,
    levels: Option<&[JlptLevel]>,
) -> anyhow::Result<Vec<SeedGroup>> {
    let Some(path) = seeds_path else {
        return Ok(default_seed_groups(levels.unwrap_or(&JlptLevel::ALL)));
    };

    let groups = tango_config::load_seed_groups(path)
        .with_context(|| format!("Failed to load seed words {}", path.display()))?;

    Ok(match levels {
        Some(levels) => groups
            .into_iter()
            .filter(|g| {
                g.category
                    .parse::<JlptLevel>()
                    .is_ok_and(|level| levels.contains(&level))
            })
            .collect(),
        None => groups,
    })
}
