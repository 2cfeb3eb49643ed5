//! Search across posts and people, with the trending tags underneath.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::application::Store;
use crate::presentation::render::{heading, PostCard};

pub fn handle(store: &Store, query: Option<&str>) -> Result<()> {
    println!("{}", heading("Explore", store.theme()));
    println!();

    let results = store.search(query.unwrap_or(""));
    if results.is_empty() {
        println!("Try searching for #angular or #tailwind.");
        println!();
    } else {
        for post in results {
            if let Some(card) = PostCard::resolve(store, post) {
                println!("{card}\n");
            }
        }
    }

    let trends = store.trends();
    if !trends.is_empty() {
        println!("{}", heading("Trending", store.theme()));
        for trend in trends {
            println!("{}  {}", trend.label(), trend.count.bright_black());
        }
    }

    Ok(())
}
