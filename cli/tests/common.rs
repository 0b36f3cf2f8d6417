use std::path::Path;

use assert_cmd::Command;

// Build a command running the mingit binary with the given directory as its
// working directory.
#[allow(dead_code)]
pub fn mingit(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mingit").unwrap();
    cmd.current_dir(dir);
    cmd
}

// Run a command, assert it succeeds, and return its stdout with the
// trailing newline removed.
#[allow(dead_code)]
pub fn stdout_line(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    let stdout = assert.get_output().stdout.clone();

    String::from_utf8(stdout).unwrap().trim_end().to_string()
}
