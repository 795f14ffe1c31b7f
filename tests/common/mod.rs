use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs one interactive session: pipes `script` lines to stdin, closes it,
/// and returns everything the session printed.
pub fn run_session(data_path: &Path, script: &[&str]) -> String {
    let exe = env!("CARGO_BIN_EXE_classbook");
    let mut child = Command::new(exe)
        .arg(data_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn classbook");

    let mut stdin = child.stdin.take().expect("child stdin");
    for line in script {
        writeln!(stdin, "{line}").expect("write command");
    }
    drop(stdin);

    let output = child.wait_with_output().expect("wait for classbook");
    assert!(output.status.success(), "session exited with failure");
    String::from_utf8(output.stdout).expect("utf8 output")
}
