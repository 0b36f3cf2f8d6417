use std::io::Write;

use super::{Cli, Result};
use crate::find_repo;

use clap::{App, Arg, ArgMatches, SubCommand};
use mingit_core::history;
use mingit_core::repo::Repo;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("cat-file")
        .about("Print the raw contents of an object")
        .arg(
            Arg::with_name("object")
                .required(true)
                .help("A ref or object ID"),
        )
}

pub(crate) fn run(cli: &mut Cli, matches: &ArgMatches) -> Result<()> {
    let name = matches.value_of("object").unwrap();

    let repo = find_repo::from_current_dir()?;

    let id = history::resolve_name(&repo, name)?;
    let object = repo.get_object(&id, None)?;

    cli.write_all(object.content())?;

    Ok(())
}
