// alias サブコマンドの統合テスト
use crate::fixtures::{stderr, stdout, TestEnv};

#[test]
fn test_cli_help() {
    let env = TestEnv::new();
    let output = env.run(&["--help"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("mantrid"));
    assert!(text.contains("alias"));
    assert!(text.contains("do"));
}

#[test]
fn test_config_example() {
    let env = TestEnv::new();
    let output = env.run(&["config", "example"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("storage_type: \"json\""));
}

#[test]
fn test_alias_lifecycle() {
    let env = TestEnv::new();

    let output = env.run(&["alias", "list"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "No aliases found\n");

    let output = env.run(&["alias", "add", "greet", "echo Hello, $1!"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Alias 'greet' created successfully\n");
    assert!(env.alias_file().exists());

    let output = env.run(&["alias", "list"]);
    let text = stdout(&output);
    assert!(text.starts_with("NAME"));
    assert!(text.contains("greet"));
    assert!(text.contains("echo Hello, $1!"));

    let output = env.run(&["alias", "edit", "greet", "echo Hi, $1!"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Alias 'greet' updated successfully\n");

    let output = env.run(&["alias", "remove", "greet", "--force"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Alias 'greet' removed successfully\n");

    let output = env.run(&["alias", "list"]);
    assert_eq!(stdout(&output), "No aliases found\n");
}

#[test]
fn test_alias_file_format() {
    let env = TestEnv::new();
    env.run(&["alias", "add", "ll", "ls -la"]);

    let content = std::fs::read_to_string(env.alias_file()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let entries = value.as_array().unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "ll");
    assert_eq!(entries[0]["command"], "ls -la");
    assert!(entries[0]["created_at"].is_string());
}

#[test]
fn test_add_duplicate_fails() {
    let env = TestEnv::new();
    env.run(&["alias", "add", "ll", "ls -la"]);

    let output = env.run(&["alias", "add", "ll", "ls"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"));
}

#[test]
fn test_remove_prompt_cancelled() {
    let env = TestEnv::new();
    env.run(&["alias", "add", "ll", "ls -la"]);

    let output = env.run_with_input(&["alias", "remove", "ll"], "n\n");
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Are you sure you want to remove alias 'll'? (y/N): "));
    assert!(text.ends_with("Removal cancelled\n"));

    let output = env.run(&["alias", "list"]);
    assert!(stdout(&output).contains("ll"));
}

#[test]
fn test_remove_prompt_confirmed() {
    let env = TestEnv::new();
    env.run(&["alias", "add", "ll", "ls -la"]);

    let output = env.run_with_input(&["alias", "remove", "ll"], "yes\n");
    assert!(output.status.success());
    assert!(stdout(&output).ends_with("Alias 'll' removed successfully\n"));
}

#[test]
fn test_invalid_config_is_reported() {
    let env = TestEnv::new();
    let output = env.run_with_env(&["alias", "list"], &[("MANTRID_LOG_LEVEL", "verbose")]);

    assert_eq!(output.status.code(), Some(1));
    let text = stderr(&output);
    assert!(text.contains("failed to load config"));
    assert!(text.contains("invalid log level: verbose"));
}

#[test]
fn test_config_example_ignores_invalid_config() {
    let env = TestEnv::new();
    let output = env.run_with_env(&["config", "example"], &[("MANTRID_LOG_LEVEL", "verbose")]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("log_level: \"info\""));
}

#[test]
fn test_corrupt_alias_file_reports_cause_once() {
    let env = TestEnv::new();
    std::fs::create_dir_all(env.alias_file().parent().unwrap()).unwrap();
    std::fs::write(env.alias_file(), "{ not json").unwrap();

    let output = env.run(&["alias", "list"]);
    assert_eq!(output.status.code(), Some(1));

    let text = stderr(&output);
    let expected = format!(
        "Error: failed to list aliases: storage error: {}: Failed to parse alias file: ",
        env.alias_file().display()
    );
    assert!(text.contains(&expected), "stderr: {text}");
    assert_eq!(text.matches("Failed to parse alias file").count(), 1);
}
