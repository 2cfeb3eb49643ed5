//! The home timeline.

use anyhow::Result;

use crate::application::Store;
use crate::presentation::render::{heading, PostCard};

pub fn handle(store: &Store) -> Result<()> {
    println!("{}", heading("Feed", store.theme()));
    println!();

    for post in store.list_feed() {
        if let Some(card) = PostCard::resolve(store, post) {
            println!("{card}\n");
        }
    }

    Ok(())
}
