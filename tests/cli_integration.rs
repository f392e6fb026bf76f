//! Exit behaviour of the `mockgen` binary as run by `go generate`.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn mockgen(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mockgen").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("GOFILE")
        .env_remove("GOPACKAGE")
        .env_remove("MOCKGEN_LOG");
    cmd
}

#[test]
fn test_gofile_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("foo.go"),
        "package foo\n\n//go:generate mockgen\ntype Foo interface {\n\tBar(x int) (string, error)\n}\n",
    )
    .unwrap();

    mockgen(&temp_dir)
        .env("GOFILE", "foo.go")
        .env("GOPACKAGE", "foo")
        .assert()
        .success();

    let generated = fs::read_to_string(temp_dir.path().join("foo_test.go")).unwrap();
    assert!(generated.contains("func (m *FooMock) Bar(x int) (string, error) {"));
}

#[test]
fn test_positional_source() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("empty.go"),
        "package foo\n\ntype Empty interface{}\n",
    )
    .unwrap();

    mockgen(&temp_dir).arg("empty.go").assert().success();

    assert!(temp_dir.path().join("empty_test.go").exists());
}

#[test]
fn test_config_file_is_honoured() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".mockgen.toml"),
        "mock_suffix = \"Fake\"\nfile_suffix = \"_fake_test\"\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("foo.go"),
        "package foo\n\ntype Foo interface {\n\tPing() error\n}\n",
    )
    .unwrap();

    mockgen(&temp_dir).env("GOFILE", "foo.go").assert().success();

    let generated = fs::read_to_string(temp_dir.path().join("foo_fake_test.go")).unwrap();
    assert!(generated.contains("type FooFake struct"));
}

#[test]
fn test_invalid_config_aborts_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".mockgen.toml"),
        "file_suffix = \"_mock\"\nmock_sufix = \"Fake\"\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("foo.go"),
        "package foo\n\ntype Foo interface {\n\tPing() error\n}\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("foo_test.go"), "// hand-written tests\n").unwrap();

    let assert = mockgen(&temp_dir).env("GOFILE", "foo.go").assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();

    assert!(stderr.contains("mock_sufix"));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("foo_test.go")).unwrap(),
        "// hand-written tests\n"
    );
    assert!(!temp_dir.path().join("foo_mock.go").exists());
}

#[test]
fn test_embedded_interface_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("foo.go"),
        "package foo\n\nimport \"io\"\n\ntype Foo interface {\n\tio.Reader\n}\n",
    )
    .unwrap();

    let assert = mockgen(&temp_dir).env("GOFILE", "foo.go").assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();

    assert!(stderr.contains("Failed to generate mocks for foo.go"));
    assert!(stderr.contains("io.Reader"));
    assert!(!temp_dir.path().join("foo_test.go").exists());
}

#[test]
fn test_missing_source_fails() {
    let temp_dir = TempDir::new().unwrap();

    mockgen(&temp_dir).env("GOFILE", "nope.go").assert().failure();

    assert!(!temp_dir.path().join("nope_test.go").exists());
}

#[test]
fn test_no_source_is_a_usage_error() {
    let temp_dir = TempDir::new().unwrap();

    mockgen(&temp_dir).assert().failure().code(2);
}
