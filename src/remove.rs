use anyhow::Result;

use crate::cli::RemoveArgs;

pub fn run(args: RemoveArgs) -> Result<()> {
    println!("{}", message(&args));
    Ok(())
}

fn message(args: &RemoveArgs) -> String {
    let target = if args.all {
        "all installed versions of node.js"
    } else {
        args.node_version.as_str()
    };
    format!("Sorry, we cannot remove {target} yet.")
}
