mod error;
mod generator;
mod icon;

use anyhow::Context;
use generator::{generate_icons, OUTPUT_DIR};
use std::io;
use std::path::Path;

pub fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let written = generate_icons(Path::new(OUTPUT_DIR), &mut io::stdout().lock())
        .context("failed to generate icons")?;
    log::debug!("generated {} icons in {}", written.len(), OUTPUT_DIR);
    Ok(())
}
