use anyhow::Result;

use showcase_core::{AppConfig, PageSet};

pub fn run(config: &AppConfig) -> Result<()> {
    let pages = PageSet::new(config.ui.pages.clone())?;

    println!("Pages ({}):\n", pages.len());
    for (index, kind) in pages.iter().enumerate() {
        println!("  {}. {} ({})", index + 1, kind.title(), kind);
    }

    Ok(())
}
