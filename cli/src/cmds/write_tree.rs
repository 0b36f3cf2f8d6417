use std::io::Write;

use super::{Cli, Result};
use crate::find_repo;

use clap::{App, ArgMatches, SubCommand};
use mingit_core::work_tree;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("write-tree")
        .about("Snapshot the working directory as a tree object and print its ID")
}

pub(crate) fn run(cli: &mut Cli, _matches: &ArgMatches) -> Result<()> {
    let mut repo = find_repo::from_current_dir()?;

    let id = work_tree::write_tree(&mut repo)?;
    writeln!(cli, "{}", id)?;

    Ok(())
}
