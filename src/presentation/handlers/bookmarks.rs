//! Bookmarked posts.

use anyhow::Result;

use crate::application::Store;
use crate::presentation::render::{heading, PostCard};

pub fn handle(store: &Store) -> Result<()> {
    println!("{}", heading("Bookmarks", store.theme()));
    println!();

    let items = store.list_bookmarks();
    if items.is_empty() {
        println!("No bookmarks yet.");
        return Ok(());
    }

    for post in items {
        if let Some(card) = PostCard::resolve(store, post) {
            println!("{card}\n");
        }
    }

    Ok(())
}
