use std::sync::OnceLock;

use bbtree_parser::{ChildRenderer, RenderError, TagHandler, TagNode};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Regex to match placeholders in template.
static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();

fn placeholder_re() -> &'static Regex {
    PLACEHOLDER_RE.get_or_init(|| Regex::new(r"\{(content|parameter)\}").unwrap())
}

/// Declare a [TemplateTag], usually loaded from config file.
///
/// ```toml
/// [[tags]]
/// name = "img"
/// template = '<img src="{parameter}">'
/// self_closing = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateTagConfig {
    /// Tag name.
    pub name: String,

    /// Output template.
    pub template: String,

    /// Tag has no content and no tail.
    #[serde(default)]
    pub self_closing: bool,
}

/// Tag rendered by filling a template.
///
/// Placeholders in template:
///
/// * `{content}`: all children rendered in order.
/// * `{parameter}`: tag parameter, empty if not set.
///
/// Substitution is single pass, placeholders appearing in content or parameter are kept as is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateTag {
    name: String,
    template: String,
    self_closing: bool,
}

impl TemplateTag {
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            self_closing: false,
        }
    }

    /// Make the tag self-closing, like `[hr]`.
    pub fn self_closing(mut self) -> Self {
        self.self_closing = true;
        self
    }
}

impl From<TemplateTagConfig> for TemplateTag {
    fn from(value: TemplateTagConfig) -> Self {
        Self {
            name: value.name,
            template: value.template,
            self_closing: value.self_closing,
        }
    }
}

impl TagHandler for TemplateTag {
    fn tag(&self) -> &str {
        self.name.as_str()
    }

    fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    fn render(
        &self,
        node: &TagNode,
        render_child: &mut ChildRenderer<'_>,
    ) -> Result<String, RenderError> {
        let mut content = String::new();
        for child in node.children.iter() {
            content.push_str(&render_child(child)?);
        }
        let parameter = node.parameter.as_deref().unwrap_or_default();

        let output = placeholder_re().replace_all(&self.template, |caps: &Captures| match &caps[1] {
            "content" => content.clone(),
            _ => parameter.to_string(),
        });
        Ok(output.into_owned())
    }
}
