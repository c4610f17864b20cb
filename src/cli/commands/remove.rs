//! Remove command handler

use crate::config::Config;

use super::{confirm, open_manager};

pub async fn cmd_remove(config: &Config, id: &str, yes: bool) -> anyhow::Result<()> {
    let manager = open_manager(config)?;

    let Some(entry) = manager.list()?.into_iter().find(|e| e.id == id) else {
        println!("No entry with ID {id} found in your collection.");
        println!("Use 'hondana list' to see entry IDs.");
        return Ok(());
    };

    if !yes && !confirm(&format!("Remove '{}' (ID: {})?", entry.title, entry.id))? {
        println!("Cancelled.");
        return Ok(());
    }

    manager.remove(id)?;
    println!("✓ Removed: {}", entry.title);

    Ok(())
}
