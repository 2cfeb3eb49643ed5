//! A user's profile: header plus their full activity.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::application::Store;
use crate::presentation::render::{heading, PostCard};

pub fn handle(store: &Store, handle: &str) -> Result<()> {
    let handle = handle.trim_start_matches('@');

    let Some(user) = store.user_by_handle(handle) else {
        println!("No user @{handle}.");
        return Ok(());
    };

    println!("{}", heading(&user.name, store.theme()));
    println!("{}", format!("@{}", user.handle).bright_black());
    if let Some(bio) = &user.bio {
        println!("{bio}");
    }
    println!();

    for post in store.list_posts_by_user(user.id) {
        if let Some(card) = PostCard::resolve(store, post) {
            println!("{card}\n");
        }
    }

    Ok(())
}
