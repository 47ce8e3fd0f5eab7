use std::{env, path::PathBuf};

use anyhow::Context;
use log::info;

use compass_fit::{FitConfig, SessionBuilder};

const CONFIG_VAR: &str = "FIT_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match config_path() {
        Some(path) => {
            info!("loading configuration from {}", path.display());
            FitConfig::from_json_file(&path)
                .with_context(|| format!("configuration stage: reading {}", path.display()))?
        }
        None => FitConfig::default(),
    };

    let session = SessionBuilder::new()
        .build(config)
        .context("configuration stage")?;

    let report = session
        .run()
        .await
        .map_err(|e| {
            let stage = e.stage();
            anyhow::Error::new(e).context(format!("{stage} stage"))
        })?;

    println!("{report}");
    println!("{}", report.elapsed_line());
    Ok(())
}

/// The first argument wins over the environment.
fn config_path() -> Option<PathBuf> {
    env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| env::var_os(CONFIG_VAR).map(PathBuf::from))
}
