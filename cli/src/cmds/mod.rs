use crate::{Cli, Result};

mod cat_file;
mod checkout;
mod commit;
mod hash_object;
mod init;
mod k;
mod log;
mod read_tree;
mod tag;
mod write_tree;

pub(crate) fn add_subcommands<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b> {
    app.subcommand(cat_file::subcommand())
        .subcommand(checkout::subcommand())
        .subcommand(commit::subcommand())
        .subcommand(hash_object::subcommand())
        .subcommand(init::subcommand())
        .subcommand(k::subcommand())
        .subcommand(log::subcommand())
        .subcommand(read_tree::subcommand())
        .subcommand(tag::subcommand())
        .subcommand(write_tree::subcommand())
}

pub(crate) fn dispatch(cli: &mut Cli) -> Result<()> {
    let matches = cli.arg_matches.clone();
    // Need an independent copy of matches so the Cli struct can still be
    // passed through to the subcommand imps.

    match matches.subcommand() {
        ("cat-file", Some(m)) => cat_file::run(cli, &m),
        ("checkout", Some(m)) => checkout::run(cli, &m),
        ("commit", Some(m)) => commit::run(cli, &m),
        ("hash-object", Some(m)) => hash_object::run(cli, &m),
        ("init", Some(m)) => init::run(cli, &m),
        ("k", Some(m)) => k::run(cli, &m),
        ("log", Some(m)) => log::run(cli, &m),
        ("read-tree", Some(m)) => read_tree::run(cli, &m),
        ("tag", Some(m)) => tag::run(cli, &m),
        ("write-tree", Some(m)) => write_tree::run(cli, &m),
        _ => unreachable!(),
        // unreachable: Should have exited out with appropriate help or
        // error message if no subcommand was given.
    }
}
