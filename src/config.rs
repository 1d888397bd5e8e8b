//! Ship-name configuration
//!
//! One-shot read at startup. Any failure - missing file, malformed JSON,
//! empty list, blank name - falls back to the default and is logged;
//! nothing here propagates an error into the simulation.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Name used when the configuration file is absent or malformed
pub const DEFAULT_SHIP_NAME: &str = "Avenger";

#[derive(Debug, Deserialize)]
struct ShipFile {
    ships: Vec<ShipEntry>,
}

#[derive(Debug, Deserialize)]
struct ShipEntry {
    name: String,
}

/// Load the ship display name from a JSON file of the form
/// `{"ships": [{"name": "..."}]}`. The first entry wins.
pub fn load_ship_name(path: &Path) -> String {
    match read_ship_name(path) {
        Some(name) => {
            log::info!("ship name loaded from {}: {}", path.display(), name);
            name
        }
        None => {
            log::warn!(
                "unable to read ship name from {}, using default \"{}\"",
                path.display(),
                DEFAULT_SHIP_NAME
            );
            DEFAULT_SHIP_NAME.to_string()
        }
    }
}

fn read_ship_name(path: &Path) -> Option<String> {
    let raw = fs::read_to_string(path).ok()?;
    let file: ShipFile = serde_json::from_str(&raw).ok()?;
    let name = file.ships.into_iter().next()?.name;
    if name.trim().is_empty() { None } else { Some(name) }
}
