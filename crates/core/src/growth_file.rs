//! File-backed persistence for dungeon-mode growth counters.
//!
//! The format is a flat JSON object with one integer per stat. Loading is
//! deliberately lenient about missing fields (older records deserialize with
//! zeros); writing goes through a temp file and rename so a crash mid-write
//! never leaves a truncated record behind.

use std::fs;
use std::io;
use std::path::Path;

use crate::run::GrowthState;

pub fn write_atomic(growth: &GrowthState, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(growth).map_err(io::Error::other)?;

    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

pub fn load(path: &Path) -> io::Result<GrowthState> {
    let content = fs::read_to_string(path)?;
    let growth: GrowthState = serde_json::from_str(&content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(growth)
}
