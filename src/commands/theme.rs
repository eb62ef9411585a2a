//! Show or change the saved theme

use anyhow::Result;

use crate::theme::Theme;
use crate::Blog;

/// Print the current theme, set it, or toggle it.
pub fn run(blog: &Blog, value: Option<&str>) -> Result<()> {
    let pref = blog.theme();

    match value {
        None => println!("{}", pref.load().as_str()),
        Some("toggle") => println!("{}", pref.toggle().as_str()),
        Some("light") => {
            pref.save(Theme::Light);
            println!("light");
        }
        Some("dark") => {
            pref.save(Theme::Dark);
            println!("dark");
        }
        Some(other) => {
            anyhow::bail!("Unknown theme: {}. Available: light, dark, toggle", other);
        }
    }

    Ok(())
}
