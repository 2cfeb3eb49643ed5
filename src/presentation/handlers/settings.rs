//! Profile and theme settings.
//!
//! With no flags this shows the current values; any flag applies its
//! change first, then the refreshed values print with a confirmation.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::domain::Theme;
use crate::presentation::render::heading;
use crate::startup::Application;

pub fn handle(
    app: &mut Application,
    name: Option<&str>,
    bio: Option<&str>,
    theme: Option<Theme>,
) -> Result<()> {
    let changed = name.is_some() || bio.is_some() || theme.is_some();

    if name.is_some() || bio.is_some() {
        app.store.update_profile(name, bio)?;
    }
    if let Some(theme) = theme {
        app.store.set_theme(theme)?;
    }

    let store = &app.store;
    println!("{}", heading("Settings", store.theme()));
    println!();

    match store.me() {
        Some(me) => {
            println!("Name    {}", me.name);
            println!("Handle  @{}", me.handle);
            println!("Bio     {}", me.bio.as_deref().unwrap_or("(none)"));
        }
        None => println!("{}", "No local account on record.".bright_black()),
    }
    println!("Theme   {}", store.theme());
    println!("Data    {}", app.data_dir().display());

    if changed {
        println!();
        println!("Saved ✓");
    }

    Ok(())
}
