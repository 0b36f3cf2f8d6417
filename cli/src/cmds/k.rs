use std::io::Write;
use std::process::{Command, Stdio};

use super::{Cli, Result};
use crate::find_repo;

use clap::{App, Arg, ArgMatches, SubCommand};
use mingit_core::history;
use mingit_core::repo::Repo;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("k")
        .about("Visualize refs and reachable commits with Graphviz")
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .default_value("mingit-graph.png")
                .help("The image file to write"),
        )
}

pub(crate) fn run(cli: &mut Cli, matches: &ArgMatches) -> Result<()> {
    let output = matches.value_of("output").unwrap();

    let repo = find_repo::from_current_dir()?;
    let dot = graph_dot(&repo)?;

    cli.write_all(dot.as_bytes())?;
    render(&dot, output)?;

    Ok(())
}

// Build a Graphviz description of every reference and every commit
// reachable from one.
fn graph_dot<R: Repo>(repo: &R) -> mingit_core::repo::Result<String> {
    let mut dot = String::from("digraph commits {\n");

    let mut start = Vec::new();
    for (name, id) in repo.refs()? {
        dot.push_str(&format!("\"{}\" [shape=note]\n", name));
        dot.push_str(&format!("\"{}\" -> \"{}\"\n", name, id));
        start.push(id);
    }

    for item in history::commits_and_parents(repo, start) {
        let id = item?;
        let commit = history::get_commit(repo, &id)?;

        let hex = id.to_string();
        dot.push_str(&format!(
            "\"{}\" [shape=box style=filled label=\"{}\"]\n",
            id,
            &hex[..10]
        ));
        if let Some(parent) = commit.parent() {
            dot.push_str(&format!("\"{}\" -> \"{}\"\n", id, parent));
        }
    }

    dot.push_str("}\n");
    Ok(dot)
}

// Hand the graph description to the external renderer.
fn render(dot: &str, output: &str) -> Result<()> {
    let mut child = Command::new("dot")
        .arg("-Tpng")
        .arg("-o")
        .arg(output)
        .stdin(Stdio::piped())
        .spawn()?;

    // Close stdin after writing so the renderer sees end of input.
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(dot.as_bytes())?;
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(format!("dot exited with status {}", status).into());
    }

    Ok(())
}
