//! Seed command handler - populates the collection with sample titles.

use crate::config::Config;
use crate::models::entry::NewEntry;

use super::open_manager;

pub async fn cmd_seed(config: &Config, force: bool) -> anyhow::Result<()> {
    let manager = open_manager(config)?;

    if !manager.list()?.is_empty() {
        if !force {
            println!("Your collection is not empty.");
            println!("Pass --force to replace it with the sample data.");
            return Ok(());
        }
        manager.clear()?;
    }

    let samples = sample_entries();
    let count = samples.len();
    for candidate in samples {
        manager.add(candidate)?;
    }

    let stats = manager.stats()?;
    let breakdown = manager.breakdown()?;

    println!("✓ Collection initialized with {count} sample titles!");
    println!();
    println!("Stats:");
    println!("  Total titles: {}", stats.total);
    println!("  Completed: {}", stats.completed);
    println!("  Currently Watching: {}", stats.watching);
    println!(
        "  On Hold: {}",
        breakdown.by_status.get("On Hold").copied().unwrap_or(0)
    );
    println!(
        "  Plan to Watch: {}",
        breakdown
            .by_status
            .get("Plan to Watch")
            .copied()
            .unwrap_or(0)
    );

    Ok(())
}

fn sample(
    title: &str,
    status: &str,
    episodes: u32,
    score: f32,
    synopsis: &str,
    studio: &str,
    image: &str,
) -> NewEntry {
    NewEntry {
        title: title.to_string(),
        media_kind: "TV".to_string(),
        watch_status: status.to_string(),
        episode_count: Some(episodes),
        chapter_count: None,
        user_score: Some(score),
        synopsis: Some(synopsis.to_string()),
        image_url: Some(image.to_string()),
        studio_or_author: Some(studio.to_string()),
    }
}

/// Fifteen well-known titles used by `hondana seed` and the integration
/// tests.
#[must_use]
pub fn sample_entries() -> Vec<NewEntry> {
    vec![
        sample(
            "Attack on Titan",
            "Completed",
            139,
            9.0,
            "After his hometown is destroyed and his mother is killed, young Eren Yeager vows to cleanse the earth of the giant humanoid Titans that have brought humanity to the brink of extinction.",
            "Wit Studio",
            "https://cdn.myanimelist.net/images/anime/10/47347.jpg",
        ),
        sample(
            "Death Note",
            "Completed",
            37,
            8.5,
            "An intelligent high schooler discovers a supernatural notebook that allows him to kill anyone by writing their name, and uses it to pursue his god-like plans.",
            "Madhouse",
            "https://cdn.myanimelist.net/images/anime/9/9453.jpg",
        ),
        sample(
            "Demon Slayer",
            "Watching",
            55,
            8.7,
            "A young demon slayer embarks on a quest to save his sister, who has been transformed into a demon, and to defeat the demon lord Muzan.",
            "ufotable",
            "https://cdn.myanimelist.net/images/anime/1/43584.jpg",
        ),
        sample(
            "Jujutsu Kaisen",
            "Watching",
            50,
            8.5,
            "A high schooler swallows a cursed finger and joins a secret organization of Jujutsu sorcerers to fight curse users and find the other 19 fingers of a powerful demon.",
            "MAPPA",
            "https://cdn.myanimelist.net/images/anime/1/52715.jpg",
        ),
        sample(
            "Steins;Gate",
            "Completed",
            24,
            9.0,
            "A group of friends discover how to send messages to the past, which results in a dangerous journey through alternate timelines and a race against fate itself.",
            "White Fox",
            "https://cdn.myanimelist.net/images/anime/5/30819.jpg",
        ),
        sample(
            "My Hero Academia",
            "Watching",
            130,
            7.9,
            "In a society where almost everyone has superpowers, a powerless boy dreams of becoming the greatest hero and enrolls in a hero academy.",
            "Bones",
            "https://cdn.myanimelist.net/images/anime/10/75815.jpg",
        ),
        sample(
            "Tokyo Ghoul",
            "Completed",
            48,
            7.5,
            "After a deadly encounter with a ghoul, a teenager is transformed into a half-ghoul and must navigate a world of hidden monsters living in secret in Tokyo.",
            "Studio Pierrot",
            "https://cdn.myanimelist.net/images/anime/2/33731.jpg",
        ),
        sample(
            "Fullmetal Alchemist: Brotherhood",
            "Completed",
            64,
            9.1,
            "Two brothers use alchemy to try to resurrect their dead mother, but the experiment goes horribly wrong and they spend years searching for a way to fix their mistakes.",
            "Bones",
            "https://cdn.myanimelist.net/images/anime/1/29114.jpg",
        ),
        sample(
            "Ergo Proxy",
            "Plan to Watch",
            23,
            7.2,
            "In a post-apocalyptic world, a young Re-L explores dangerous ruins searching for the truth, accompanied by Proxy and a sentient AutoReiv.",
            "Manglobe",
            "https://cdn.myanimelist.net/images/anime/13/20319.jpg",
        ),
        sample(
            "Vinland Saga",
            "Completed",
            24,
            8.9,
            "A young Viking warrior seeks revenge against the man who killed his father, but his journey takes him on a path toward something much greater.",
            "WIT Studio",
            "https://cdn.myanimelist.net/images/anime/1/50271.jpg",
        ),
        sample(
            "Cowboy Bebop",
            "Completed",
            26,
            8.8,
            "A group of bounty hunters travel across space in their ship Bebop, taking on jobs and living a life of adventure and mystery.",
            "Sunrise",
            "https://cdn.myanimelist.net/images/anime/4/19644.jpg",
        ),
        sample(
            "Neon Genesis Evangelion",
            "Completed",
            26,
            7.6,
            "Teenage pilots must operate giant robots called Evangelions to protect humanity from mysterious beings known as Angels.",
            "Gainax",
            "https://cdn.myanimelist.net/images/anime/1/7711.jpg",
        ),
        sample(
            "Code Geass",
            "On Hold",
            50,
            7.8,
            "A young man gains the power to command anyone to obey him, and uses this ability in a rebellion against an oppressive empire.",
            "Sunrise",
            "https://cdn.myanimelist.net/images/anime/1/13662.jpg",
        ),
        sample(
            "Spy x Family",
            "Watching",
            25,
            8.3,
            "A spy, an assassin, and a psychic girl with no connection form an unlikely family to infiltrate and survive high society.",
            "CloverWorks",
            "https://cdn.myanimelist.net/images/anime/14/96303.jpg",
        ),
        sample(
            "Mob Psycho 100",
            "Completed",
            25,
            8.6,
            "A psychic middle schooler suppresses his powers to live a normal life, but keeps getting pulled into supernatural adventures.",
            "Bones",
            "https://cdn.myanimelist.net/images/anime/5/87882.jpg",
        ),
    ]
}
