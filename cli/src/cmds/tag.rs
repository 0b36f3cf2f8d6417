use super::{Cli, Result};
use crate::find_repo;

use clap::{App, Arg, ArgMatches, SubCommand};
use mingit_core::history;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("tag")
        .about("Create or move a tag pointing at a commit")
        .arg(Arg::with_name("name").required(true).help("The tag name"))
        .arg(
            Arg::with_name("object")
                .help("A ref or commit ID to tag (default HEAD)"),
        )
}

pub(crate) fn run(_cli: &mut Cli, matches: &ArgMatches) -> Result<()> {
    let name = matches.value_of("name").unwrap();
    let target = matches.value_of("object").unwrap_or("@");

    let mut repo = find_repo::from_current_dir()?;

    let id = history::resolve_name(&repo, target)?;
    history::create_tag(&mut repo, name, &id)?;

    Ok(())
}
