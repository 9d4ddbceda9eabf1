use anyhow::{Context, Result};
use bbtree_parser::{Parser, ParserOptions};
use bbtree_tags::{Bold, TemplateTag, TemplateTagConfig};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

fn default_bold() -> bool {
    true
}

/// Config definition for parsing and rendering.
///
/// ```toml
/// max_depth = 64
/// bold = true
///
/// [[tags]]
/// name = "i"
/// template = "<em>{content}</em>"
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Config {
    /// Parser options, `max_depth`.
    #[serde(flatten)]
    pub(crate) options: ParserOptions,

    /// Register the builtin `[b]` tag.
    #[serde(default = "default_bold")]
    pub(crate) bold: bool,

    /// Extra tags rendered by template.
    #[serde(default)]
    pub(crate) tags: Vec<TemplateTagConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: ParserOptions::default(),
            bold: default_bold(),
            tags: vec![],
        }
    }
}

impl Config {
    /// Load config from toml file at `path`.
    pub(crate) async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("when reading config file {path}"))?;
        Self::from_toml(&content).with_context(|| format!("when parsing config file {path}"))
    }

    pub(crate) fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Build a parser with all tags in config registered.
    pub(crate) fn build_parser(self) -> Result<Parser> {
        let mut parser = Parser::with_options(self.options);
        if self.bold {
            parser.add_tag(Bold).context("when registering tag b")?;
        }
        for tag in self.tags {
            let name = tag.name.clone();
            parser
                .add_tag(TemplateTag::from(tag))
                .with_context(|| format!("when registering tag {name}"))?;
        }
        debug!("registered tags: {:?}", parser.registry().names());
        Ok(parser)
    }
}
