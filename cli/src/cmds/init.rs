use std::{env, io::Write};

use super::{Cli, Result};

use clap::{App, ArgMatches, SubCommand};
use mingit_on_disk::{OnDiskRepo, REPO_DIR_NAME};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("init").about("Create an empty repository in the current directory")
}

pub(crate) fn run(cli: &mut Cli, _matches: &ArgMatches) -> Result<()> {
    let dir = env::current_dir()?;
    OnDiskRepo::init(&dir)?;

    writeln!(
        cli,
        "Initialized empty mingit repository in {}",
        dir.join(REPO_DIR_NAME).display()
    )?;

    Ok(())
}
