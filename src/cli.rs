use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::index::DEFAULT_MIRROR;

#[derive(Parser, Debug)]
#[command(
    name = "ron",
    version,
    about = "A simple CLI to manage multiple versions of node.js"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // `ron 16` and `ron --lts` run `change` without naming it
    #[command(flatten)]
    pub change: ChangeArgs,

    /// Print detailed debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the node.js distribution mirror
    #[arg(long, global = true, env = "RON_NODE_MIRROR", default_value = DEFAULT_MIRROR)]
    pub mirror: String,
}

impl Cli {
    /// The subcommand to run; bare `ron [node_version] [--lts]` means `change`.
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Change(self.change))
    }
}

/// The text printed for an argument error: clap's message followed by the full help.
/// `None` for `--help` and `--version`, which clap prints itself.
pub fn usage_error(err: &clap::Error) -> Option<String> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        _ => Some(format!("{}\n{}", err.render(), Cli::command().render_help())),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Change the current version of node.js
    #[command(alias = "ch")]
    Change(ChangeArgs),

    /// List installed versions of node.js
    #[command(alias = "ls")]
    List(ListArgs),

    /// Remove the specified version of node.js
    #[command(alias = "rm")]
    Remove(RemoveArgs),
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct ChangeArgs {
    /// The version of node.js to use
    pub node_version: Option<String>,

    /// Install the latest lts version of node.js
    #[arg(long)]
    pub lts: bool,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct ListArgs {
    /// List current and past lts versions of node.js
    #[arg(short, long)]
    pub remote: bool,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct RemoveArgs {
    /// The version of node.js to remove
    pub node_version: String,

    /// Remove all installed versions of node.js
    #[arg(short, long)]
    pub all: bool,
}
