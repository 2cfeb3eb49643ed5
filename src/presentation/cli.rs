//! Command-line interface definition.
//!
//! Each view of the app is a subcommand; mutations are subcommands too.
//! Running without a subcommand shows the feed.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Theme;

#[derive(Parser)]
#[command(name = "tinychirp")]
#[command(about = "A tiny single-user social feed in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the state files (overrides configuration)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Show the home timeline (the default)")]
    Feed,

    #[command(about = "Publish a new post")]
    Chirp {
        /// Post text
        text: String,
    },

    #[command(about = "Reply to a post")]
    Reply {
        /// ID of the post to reply to
        post_id: i64,

        /// Reply text
        text: String,
    },

    #[command(about = "Like or unlike a post")]
    Like {
        /// ID of the post to toggle
        post_id: i64,
    },

    #[command(about = "Repost or withdraw a repost")]
    Repost {
        /// ID of the post to toggle
        post_id: i64,
    },

    #[command(about = "Bookmark or un-bookmark a post")]
    Bookmark {
        /// ID of the post to toggle
        post_id: i64,
    },

    #[command(about = "Show a user's posts, replies, and reposts")]
    Profile {
        /// Handle, with or without the leading @
        handle: String,
    },

    #[command(about = "Search posts and people, and show what's trending")]
    Explore {
        /// Search term; omit it to browse the timeline
        query: Option<String>,
    },

    #[command(about = "Show notifications")]
    Notifications,

    #[command(about = "Show bookmarked posts")]
    Bookmarks,

    #[command(about = "Show or change profile and theme settings")]
    Settings {
        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New bio; pass an empty string to clear it
        #[arg(long)]
        bio: Option<String>,

        /// Color theme: light or dark
        #[arg(long)]
        theme: Option<Theme>,
    },

    #[command(about = "Show activity counters and trends")]
    Dashboard,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["tinychirp"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_chirp_takes_text() {
        let cli = Cli::try_parse_from(["tinychirp", "chirp", "hello"]).unwrap();
        match cli.command {
            Some(Command::Chirp { text }) => assert_eq!(text, "hello"),
            _ => panic!("expected chirp command"),
        }
    }

    #[test]
    fn test_settings_theme_parses() {
        let cli =
            Cli::try_parse_from(["tinychirp", "settings", "--theme", "dark"]).unwrap();
        match cli.command {
            Some(Command::Settings { theme, .. }) => assert_eq!(theme, Some(Theme::Dark)),
            _ => panic!("expected settings command"),
        }
    }

    #[test]
    fn test_settings_rejects_bad_theme() {
        assert!(Cli::try_parse_from(["tinychirp", "settings", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn test_data_dir_is_global() {
        let cli = Cli::try_parse_from(["tinychirp", "feed", "--data-dir", "/tmp/x"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }
}
