//! Notifications, newest first.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::application::Store;
use crate::presentation::render::{heading, relative_time};

pub fn handle(store: &Store) -> Result<()> {
    println!("{}", heading("Notifications", store.theme()));
    println!();

    for notification in store.list_notifications() {
        println!(
            "{} {}  {}",
            notification.kind.glyph(),
            notification.text,
            relative_time(notification.created_at).bright_black(),
        );
    }

    Ok(())
}
