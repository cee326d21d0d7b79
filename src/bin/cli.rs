// src/bin/cli.rs
use color_eyre::eyre::{eyre, Result};
use rigcheck::{cli, log, loge};

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init();
    cli::run().map_err(|e| {
        loge!("CLI: {}", e);
        eyre!("{e}")
    })
}
