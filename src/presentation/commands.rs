//! Command dispatch.

use anyhow::Result;

use crate::presentation::cli::Command;
use crate::presentation::handlers;
use crate::startup::Application;

/// Route a parsed command to its handler. No command means the feed.
pub fn run(command: Option<Command>, app: &mut Application) -> Result<()> {
    match command.unwrap_or(Command::Feed) {
        Command::Feed => handlers::feed::handle(&app.store),
        Command::Chirp { text } => handlers::post::chirp(&mut app.store, &text),
        Command::Reply { post_id, text } => handlers::post::reply(&mut app.store, post_id, &text),
        Command::Like { post_id } => handlers::post::like(&mut app.store, post_id),
        Command::Repost { post_id } => handlers::post::repost(&mut app.store, post_id),
        Command::Bookmark { post_id } => handlers::post::bookmark(&mut app.store, post_id),
        Command::Profile { handle } => handlers::profile::handle(&app.store, &handle),
        Command::Explore { query } => handlers::explore::handle(&app.store, query.as_deref()),
        Command::Notifications => handlers::notifications::handle(&app.store),
        Command::Bookmarks => handlers::bookmarks::handle(&app.store),
        Command::Settings { name, bio, theme } => {
            handlers::settings::handle(app, name.as_deref(), bio.as_deref(), theme)
        }
        Command::Dashboard => handlers::dashboard::handle(&app.store),
    }
}
