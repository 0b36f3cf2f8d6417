use std::{fs, io::Write};

use super::{Cli, Result};
use crate::find_repo;

use clap::{App, Arg, ArgMatches, SubCommand};
use mingit_core::object::{Kind, Object};
use mingit_core::repo::Repo;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("hash-object")
        .about("Store a file as a blob object and print its ID")
        .arg(
            Arg::with_name("file")
                .required(true)
                .help("The file to store"),
        )
}

pub(crate) fn run(cli: &mut Cli, matches: &ArgMatches) -> Result<()> {
    let file = matches.value_of("file").unwrap();

    let mut repo = find_repo::from_current_dir()?;

    let content = fs::read(file)?;
    let id = repo.put_object(&Object::new(Kind::Blob, content))?;

    writeln!(cli, "{}", id)?;

    Ok(())
}
