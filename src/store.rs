// src/store.rs
//
// The one thing remembered between runs: whose schedule the user picked.
use std::{fs, io, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};

use crate::config::consts::{SELECTION_FILE, STORE_DIR};
use crate::model::Role;
use crate::Result;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub id: u32,
    /// Group name or teacher's name, as the suggestion list showed it
    pub title: String,
    pub role: Role,
}

fn selection_path(dir: &Path) -> PathBuf {
    dir.join(SELECTION_FILE)
}

pub fn save_selection(sel: &Selection) -> Result<PathBuf> {
    save_selection_in(Path::new(STORE_DIR), sel)
}

pub fn load_selection() -> Result<Option<Selection>> {
    load_selection_in(Path::new(STORE_DIR))
}

pub fn clear_selection() -> Result<bool> {
    clear_selection_in(Path::new(STORE_DIR))
}

pub fn save_selection_in(dir: &Path, sel: &Selection) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = selection_path(dir);
    fs::write(&path, serde_json::to_string_pretty(sel)?)?;
    logd!("Saved selection {} ({}) to {}", sel.id, sel.role, path.display());
    Ok(path)
}

/// `None` when nothing was saved yet.
pub fn load_selection_in(dir: &Path) -> Result<Option<Selection>> {
    let path = selection_path(dir);
    let text = match fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&text)?))
}

/// Returns whether there was anything to remove.
pub fn clear_selection_in(dir: &Path) -> Result<bool> {
    match fs::remove_file(selection_path(dir)) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
