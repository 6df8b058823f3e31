use std::fs;
use std::process::{Command, Output};

fn excheck(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_excheck"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run excheck")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn check_allowed_exits_zero() {
    let out = excheck(&[
        "check",
        "--parent",
        "void show() throws IOException",
        "--child",
        "void show() throws FileNotFoundException",
    ]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out).trim(), "allowed");
}

#[test]
fn check_rejected_exits_one() {
    let out = excheck(&["check", "--parent", "void m()", "--child", "void m() throws IOException"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out).trim(), "rejected: IOException (new)");
}

#[test]
fn check_all_lists_every_violation() {
    let out = excheck(&[
        "check",
        "--all",
        "--parent",
        "void m() throws IOException",
        "--child",
        "void m() throws SQLException, Exception",
    ]);
    assert_eq!(out.status.code(), Some(1));
    let text = stdout(&out);
    assert_eq!(text.lines().count(), 2, "{text}");
    assert!(text.lines().next().unwrap_or_default().starts_with("rejected: SQLException (broader)"));
}

#[test]
fn relation_flag_allows_overloads() {
    let args = ["check", "--parent", "void read(String p)", "--child", "void read(int fd) throws IOException"];
    assert_eq!(excheck(&args).status.code(), Some(1));
    let mut with_relation = args.to_vec();
    with_relation.push("--relation");
    assert_eq!(excheck(&with_relation).status.code(), Some(0));

    with_relation.push("--all");
    let out = excheck(&with_relation);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out).trim(), "allowed");

    // an override with `--all --relation` still lists every offender
    let out = excheck(&[
        "check",
        "--all",
        "--relation",
        "--parent",
        "void read(String p)",
        "--child",
        "void read(String p) throws IOException, SQLException",
    ]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out).lines().count(), 2);
}

#[test]
fn unknown_type_exits_two() {
    let out = excheck(&["check", "--parent", "void m()", "--child", "void m() throws Nonexistent"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Nonexistent"));
}

#[test]
fn tree_includes_declared_types() {
    let dir = tempfile::tempdir().unwrap();
    let decls = dir.path().join("app.java");
    fs::write(&decls, "class AppException extends IOException {}").unwrap();
    let out = excheck(&["tree", "--decls", decls.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.starts_with("Throwable [checked]"));
    assert!(text.contains("      AppException [checked]"), "{text}");
    assert!(text.contains("      NullPointerException [unchecked]"), "{text}");
}
