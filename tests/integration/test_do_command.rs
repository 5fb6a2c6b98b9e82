// do サブコマンドの統合テスト（実際にシェルを起動する）
#![cfg(unix)]

use crate::fixtures::{stderr, stdout, TestEnv};

#[test]
fn test_do_substitutes_positional_parameter() {
    let env = TestEnv::new();
    env.run(&["alias", "add", "greet", "echo Hello, $1!"]);

    let output = env.run(&["do", "greet", "--", "World"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Hello, World!\n");
}

#[test]
fn test_do_auto_appends_flag_parameters() {
    let env = TestEnv::new();
    env.run(&["alias", "add", "pf", "printf %s-%s"]);

    let output = env.run(&["do", "pf", "--", "-a", "-b"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "-a--b");
}

#[test]
fn test_do_without_separator() {
    let env = TestEnv::new();
    env.run(&["alias", "add", "say", "echo $@"]);

    let output = env.run(&["do", "say", "one", "two"]);
    assert_eq!(stdout(&output), "one two\n");
}

#[test]
fn test_do_propagates_exit_code() {
    let env = TestEnv::new();
    env.run(&["alias", "add", "fail", "exit $1"]);

    let output = env.run(&["do", "fail", "3"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_do_missing_alias() {
    let env = TestEnv::new();

    let output = env.run(&["do", "missing"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output)
        .contains("alias 'missing' not found. Use 'mantrid alias list' to see available aliases"));
}

#[test]
fn test_do_corrupt_alias_file() {
    let env = TestEnv::new();
    std::fs::create_dir_all(env.alias_file().parent().unwrap()).unwrap();
    std::fs::write(env.alias_file(), "{ not json").unwrap();

    let output = env.run(&["do", "x"]);
    assert_eq!(output.status.code(), Some(1));

    let text = stderr(&output);
    let expected = format!(
        "Error: failed to get alias: storage error: {}: Failed to parse alias file: ",
        env.alias_file().display()
    );
    assert!(text.contains(&expected), "stderr: {text}");
    assert_eq!(text.matches("Failed to parse alias file").count(), 1);
}
