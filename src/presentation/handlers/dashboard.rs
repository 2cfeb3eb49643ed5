//! Activity counters and trends.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::application::Store;
use crate::presentation::render::heading;

pub fn handle(store: &Store) -> Result<()> {
    let stats = store.stats();

    println!("{}", heading("Dashboard", store.theme()));
    println!();
    println!("Posts          {}", stats.posts);
    println!("Likes          {}", stats.likes);
    println!("Bookmarks      {}", stats.bookmarks);
    println!("Notifications  {}", stats.notifications);

    let trends = store.trends();
    if !trends.is_empty() {
        println!();
        println!("{}", heading("Trending", store.theme()));
        for trend in trends {
            println!("{}  {}", trend.label(), trend.count.bright_black());
        }
    }

    Ok(())
}
