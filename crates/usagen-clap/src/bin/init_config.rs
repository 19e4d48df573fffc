//! Writes an editable example usage config to `config.yaml` in the
//! working directory, creating or truncating the file.

use std::fs::File;

use anyhow::Context;

const CONFIG_PATH: &str = "config.yaml";

fn main() -> anyhow::Result<()> {
    let mut file =
        File::create(CONFIG_PATH).with_context(|| format!("failed to create {CONFIG_PATH}"))?;
    usagen::write_example_config(&mut file)
        .with_context(|| format!("failed to write example config to {CONFIG_PATH}"))?;
    Ok(())
}
