use super::{Cli, Result};
use crate::find_repo;

use clap::{App, Arg, ArgMatches, SubCommand};
use mingit_core::{history, work_tree};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("read-tree")
        .about("Replace the working directory with a stored tree snapshot")
        .arg(
            Arg::with_name("tree")
                .required(true)
                .help("A ref or tree object ID"),
        )
}

pub(crate) fn run(_cli: &mut Cli, matches: &ArgMatches) -> Result<()> {
    let name = matches.value_of("tree").unwrap();

    let mut repo = find_repo::from_current_dir()?;

    let id = history::resolve_name(&repo, name)?;
    work_tree::read_tree(&mut repo, &id)?;

    Ok(())
}
