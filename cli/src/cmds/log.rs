use std::io::Write;

use super::{Cli, Result};
use crate::find_repo;

use clap::{App, Arg, ArgMatches, SubCommand};
use mingit_core::history;
use mingit_core::repo::Repo;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("log")
        .about("Show the chain of commits reachable from a starting point")
        .arg(
            Arg::with_name("ref")
                .help("A ref or commit ID to start from (default HEAD)"),
        )
}

pub(crate) fn run(cli: &mut Cli, matches: &ArgMatches) -> Result<()> {
    let repo = find_repo::from_current_dir()?;

    let start = match matches.value_of("ref") {
        Some(name) => Some(history::resolve_name(&repo, name)?),
        None => repo.get_ref("HEAD")?,
    };

    // No HEAD yet means no history; print nothing.
    let start = match start {
        Some(id) => vec![id],
        None => return Ok(()),
    };

    for id in history::commits_and_parents(&repo, start) {
        let id = id?;
        let commit = history::get_commit(&repo, &id)?;

        writeln!(cli, "commit {}", id)?;
        writeln!(cli)?;
        for line in commit.message().lines() {
            writeln!(cli, "    {}", line)?;
        }
        writeln!(cli)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::temp_cwd::TempCwd;
    use crate::Cli;

    use serial_test::serial;

    #[test]
    #[serial]
    fn shows_all_reachable_commits() {
        let dir = tempfile::tempdir().unwrap();
        let _cwd = TempCwd::new(dir.path());

        Cli::run_with_args(vec!["init"]).unwrap();

        fs::write(dir.path().join("a.txt"), b"one").unwrap();
        let first = Cli::run_with_args(vec!["commit", "-m", "first"]).unwrap();
        let first = String::from_utf8(first).unwrap();

        fs::write(dir.path().join("a.txt"), b"two").unwrap();
        let second = Cli::run_with_args(vec!["commit", "-m", "second"]).unwrap();
        let second = String::from_utf8(second).unwrap();

        let stdout = Cli::run_with_args(vec!["log"]).unwrap();
        let text = String::from_utf8(stdout).unwrap();

        assert!(text.contains(&format!("commit {}", first.trim())));
        assert!(text.contains(&format!("commit {}", second.trim())));
        assert!(text.contains("    first"));
        assert!(text.contains("    second"));
    }

    #[test]
    #[serial]
    fn starts_from_given_ref() {
        let dir = tempfile::tempdir().unwrap();
        let _cwd = TempCwd::new(dir.path());

        Cli::run_with_args(vec!["init"]).unwrap();

        fs::write(dir.path().join("a.txt"), b"one").unwrap();
        let first = Cli::run_with_args(vec!["commit", "-m", "first"]).unwrap();
        let first = String::from_utf8(first).unwrap();

        fs::write(dir.path().join("a.txt"), b"two").unwrap();
        let second = Cli::run_with_args(vec!["commit", "-m", "second"]).unwrap();
        let second = String::from_utf8(second).unwrap();

        let stdout = Cli::run_with_args(vec!["log", first.trim()]).unwrap();
        let text = String::from_utf8(stdout).unwrap();

        assert!(text.contains(&format!("commit {}", first.trim())));
        assert!(!text.contains(&format!("commit {}", second.trim())));
    }

    #[test]
    #[serial]
    fn empty_repo_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let _cwd = TempCwd::new(dir.path());

        Cli::run_with_args(vec!["init"]).unwrap();

        let stdout = Cli::run_with_args(vec!["log"]).unwrap();
        assert!(stdout.is_empty());
    }
}
