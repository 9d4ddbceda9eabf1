use crate::cmd::{AstArgs, RenderArgs};
use crate::utils::{load_parser, read_input};
use anyhow::{Context, Result};
use tracing::trace;

pub async fn run_render_command(args: RenderArgs) -> Result<()> {
    trace!("running render command with args: {args:?}");

    let parser = load_parser(&args.input).await?;
    let content = read_input(args.input.file.as_deref()).await?;
    let root = parser.parse(&content).context("when parsing content")?;
    let html = parser.render(&root).context("when rendering content")?;
    println!("{html}");
    Ok(())
}

pub async fn run_ast_command(args: AstArgs) -> Result<()> {
    trace!("running ast command with args: {args:?}");

    let parser = load_parser(&args.input).await?;
    let content = read_input(args.input.file.as_deref()).await?;
    let root = parser.parse(&content).context("when parsing content")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&root)?);
    } else {
        print!("{}", root.dump());
    }
    Ok(())
}
