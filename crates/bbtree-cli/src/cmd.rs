use crate::render::{run_ast_command, run_render_command};
use anyhow::Result;
use clap::ArgAction;
use clap::{Args, Parser, Subcommand};

///////// Groups /////////

#[derive(Clone, Debug, Args)]
pub struct InputArgs {
    #[arg(help = "File path to read markup from. Read stdin if not set")]
    pub file: Option<String>,

    #[arg(
        short = 'c',
        long = "config",
        help = "Path to the config file defining registered tags"
    )]
    pub config: Option<String>,
}

///////// Args /////////

#[derive(Clone, Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Clone, Debug, Args)]
pub struct AstArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(
        long = "json",
        help = "Print the tree in json format instead of outline",
        default_value = "false",
        action = ArgAction::SetTrue,
    )]
    pub json: bool,
}

///////// Subcommand /////////

#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    #[command(about = "render markup into html")]
    Render(RenderArgs),

    #[command(about = "print the parsed node tree")]
    Ast(AstArgs),
}

/// Main entry of all subcommands.
pub async fn run_command_with_args(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render(render_args) => run_render_command(render_args).await,
        Command::Ast(ast_args) => run_ast_command(ast_args).await,
    }
}
