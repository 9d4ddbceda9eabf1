use anyhow::{Context, Result};
use bbtree_parser::Parser;
use tokio::fs;
use tokio::io::{self, AsyncReadExt};

use crate::cmd::InputArgs;
use crate::config::Config;

/// Read all markup from `file`, or from stdin if not set.
///
/// # Errors
///
/// When failed to io on the file or stdin.
pub async fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .await
            .with_context(|| format!("when reading content file {path}")),
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .await
                .context("when reading stdin")?;
            Ok(content)
        }
    }
}

/// Build the parser described by `--config`, or the default one.
pub async fn load_parser(args: &InputArgs) -> Result<Parser> {
    let config = match args.config.as_deref() {
        Some(path) => Config::load(path).await?,
        None => Config::default(),
    };
    config.build_parser()
}
