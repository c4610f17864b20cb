mod add;
mod clear;
mod enrich;
mod home;
mod list;
mod remove;
mod search;
mod seed;
mod stats;
mod update;

pub use add::cmd_add;
pub use clear::cmd_clear;
pub use enrich::cmd_enrich;
pub use home::cmd_home;
pub use list::cmd_list;
pub use remove::cmd_remove;
pub use search::cmd_search;
pub use seed::{cmd_seed, sample_entries};
pub use stats::cmd_stats;
pub use update::cmd_update;

use crate::config::Config;
use crate::store::FileStore;
use crate::store::collection::{CollectionManager, LastAddedMode};

pub(crate) fn open_manager(config: &Config) -> anyhow::Result<CollectionManager<FileStore>> {
    let store = FileStore::open(config.data_dir())?;
    let mode = if config.collection.refresh_last_added_on_write {
        LastAddedMode::EveryWrite
    } else {
        LastAddedMode::AddOnly
    };
    Ok(CollectionManager::with_last_added_mode(store, mode))
}

pub(crate) fn validate_score(score: Option<f32>) -> anyhow::Result<()> {
    if let Some(score) = score
        && !(0.0..=10.0).contains(&score)
    {
        anyhow::bail!("Score must be between 0 and 10, got {score}");
    }
    Ok(())
}

pub(crate) fn confirm(prompt: &str) -> anyhow::Result<bool> {
    println!("{prompt}");
    println!("Enter 'y' to confirm, anything else to cancel:");

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}
