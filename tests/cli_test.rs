use std::fs;
use std::process::{Command, Output};

const TEMPLATES: &str = "\
export const templates = [
    {
      type: 'text',
      zIndex: 0,
    },
    {
      type: 'rectangle',
      width: 9000,
      height: 40,
      zIndex: 0,
    },
];
";

const POLICY: &str = "\
Fixed zIndex values!
Text shapes: zIndex 10
Circle shapes: zIndex 5
Rectangle backgrounds (>=8000): zIndex 1
Rectangle containers (>=5000): zIndex 2
Rectangle content: zIndex 3
";

fn zindex_fix(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_zindex-fix")).args(args).output().unwrap()
}

#[test]
fn stdout_carries_only_the_policy_and_logs_go_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("templates.js");
    fs::write(&path, TEMPLATES).unwrap();

    let out = zindex_fix(&["--path", path.to_str().unwrap()]);

    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), POLICY);
    assert!(String::from_utf8(out.stderr).unwrap().contains("zIndex rewrite complete"));
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("zIndex: 10,"));
    assert!(written.contains("zIndex: 1,"));
}

#[test]
fn dry_run_prints_count_and_leaves_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("templates.js");
    fs::write(&path, TEMPLATES).unwrap();

    let out = zindex_fix(&["--dry-run", "--path", path.to_str().unwrap()]);

    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "Dry run: 2 of 2 shape fragments would change\n");
    assert_eq!(fs::read_to_string(&path).unwrap(), TEMPLATES);
}

#[test]
fn missing_target_exits_non_zero_with_empty_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.js");

    let out = zindex_fix(&["--path", path.to_str().unwrap()]);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8(out.stderr).unwrap().contains("nope.js"));
}
