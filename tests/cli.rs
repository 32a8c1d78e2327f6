use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

const BIN: &str = env!("CARGO_BIN_EXE_avlroster");

const SAMPLE: &str = r#"8
insert "Brandon" 45679999
insert "Brian" 35459999
insert "Briana" 87879999
insert "Bella" 95469999
printInorder
remove 45679999
removeInorder 2
printInorder
"#;

fn avlroster(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(BIN)
        .args(args)
        .env_remove("AVLROSTER_REMOVE_POLICY")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn sample_script_from_stdin() {
    let output = avlroster(&[], SAMPLE);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "successful\nsuccessful\nsuccessful\nsuccessful\n\
         Brian, Brandon, Briana, Bella\n\
         successful\nsuccessful\n\
         Brian, Briana\n"
    );
}

#[test]
fn script_file_matches_stdin() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();
    let path = file.path().to_str().unwrap();

    let from_file = avlroster(&["--file", path], "");
    assert!(from_file.status.success());
    assert_eq!(stdout(&from_file), stdout(&avlroster(&[], SAMPLE)));
}

#[test]
fn single_command() {
    let output = avlroster(&["-c", r#"insert "Ann" 00000001"#], "");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "successful\n");

    let output = avlroster(&["-c", "printLevelCount"], "");
    assert_eq!(stdout(&output), "0\n");

    let output = avlroster(&["-c", "remove 00000001"], "");
    assert_eq!(stdout(&output), "unsuccessful\n");
}

#[test]
fn remove_policy_changes_shape() {
    let script = "6\n\
        insert \"A\" 00000002\n\
        insert \"B\" 00000001\n\
        insert \"C\" 00000003\n\
        insert \"D\" 00000004\n\
        remove 00000001\n\
        printPreorder\n";

    let rebalanced = avlroster(&[], script);
    assert_eq!(stdout(&rebalanced).lines().last(), Some("C, A, D"));

    let plain = avlroster(&["--remove-policy", "plain"], script);
    assert_eq!(stdout(&plain).lines().last(), Some("A, C, D"));
}

#[test]
fn malformed_header_fails() {
    let output = avlroster(&[], "three\nprintInorder\n");
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("[6000] Syntax Error").count(), 1);
}
