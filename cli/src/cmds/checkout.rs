use super::{Cli, Result};
use crate::find_repo;

use clap::{App, Arg, ArgMatches, SubCommand};
use mingit_core::history;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("checkout")
        .about("Replace the working directory with a commit's tree and move HEAD there")
        .arg(
            Arg::with_name("commit")
                .required(true)
                .help("A ref or commit ID"),
        )
}

pub(crate) fn run(_cli: &mut Cli, matches: &ArgMatches) -> Result<()> {
    let name = matches.value_of("commit").unwrap();

    let mut repo = find_repo::from_current_dir()?;

    let id = history::resolve_name(&repo, name)?;
    history::checkout(&mut repo, &id)?;

    Ok(())
}
