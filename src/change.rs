use anyhow::Result;

use crate::cli::ChangeArgs;

pub fn run(args: ChangeArgs) -> Result<()> {
    println!("{}", message(&args));
    Ok(())
}

fn message(args: &ChangeArgs) -> String {
    let target = match (&args.node_version, args.lts) {
        (Some(version), _) => version.as_str(),
        (None, true) => "the latest lts version",
        (None, false) => {
            return "Sorry, we cannot change the current version of node.js yet.".to_string();
        }
    };
    format!("Sorry, we cannot change the current version of node.js to {target} yet.")
}
