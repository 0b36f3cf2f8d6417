use std::io::Write;

use super::{Cli, Result};
use crate::find_repo;

use clap::{App, Arg, ArgMatches, SubCommand};
use mingit_core::history;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("commit")
        .about("Record the working directory as a new commit")
        .arg(
            Arg::with_name("message")
                .short("m")
                .long("message")
                .required(true)
                .takes_value(true)
                .help("The commit message"),
        )
}

pub(crate) fn run(cli: &mut Cli, matches: &ArgMatches) -> Result<()> {
    let message = matches.value_of("message").unwrap();

    let mut repo = find_repo::from_current_dir()?;

    let id = history::commit(&mut repo, message)?;
    writeln!(cli, "{}", id)?;

    Ok(())
}
