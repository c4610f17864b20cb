//! Clear command handler

use crate::config::Config;

use super::{confirm, open_manager};

pub async fn cmd_clear(config: &Config, yes: bool) -> anyhow::Result<()> {
    let manager = open_manager(config)?;
    let total = manager.list()?.len();

    if total == 0 {
        println!("Your collection is already empty.");
        return Ok(());
    }

    if !yes
        && !confirm(&format!(
            "Clear your entire collection ({total} titles)? This cannot be undone."
        ))?
    {
        println!("Cancelled.");
        return Ok(());
    }

    manager.clear()?;
    println!("✓ Collection cleared!");

    Ok(())
}
