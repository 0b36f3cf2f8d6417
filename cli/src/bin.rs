#![deny(warnings)]

use std::{
    error::Error,
    io::{self, Write},
};

mod app;
pub(crate) use app::Cli;

mod cmds;
mod find_repo;

#[cfg(test)]
mod temp_cwd;

pub(crate) type Result<T> = std::result::Result<T, Box<dyn Error>>;

#[allow(unused_must_use)]
fn main() {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let mut cli = Cli {
        arg_matches: app::clap_app().get_matches(),
        stdout: &mut stdout,
    };

    let r = cli.run();

    cli.flush();
    // Intentionally ignoring the result of this flush.

    std::process::exit(match r {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            1
        }
    });
}
