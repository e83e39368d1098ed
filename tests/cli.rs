use std::io::Write;
use std::process::{Command, Output};

fn greeter(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_greeter"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn greeter")
}

#[test]
fn default_run_prints_two_lines() {
    let out = greeter(&[]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "hello world\n17 items are made of wool\n"
    );
}

#[test]
fn custom_record_fields() {
    let out = greeter(&["--material", "cotton", "--count", "4"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "hello world\n4 items are made of cotton\n"
    );
}

#[test]
fn record_as_json() {
    let out = greeter(&["--record", r#"{"Material": "silk", "Count": 8}"#]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "hello world\n8 items are made of silk\n"
    );
}

#[test]
fn unknown_field_exits_with_error() {
    let out = greeter(&["--template", "{{ Count }} of {{ Colour }}\n"]);
    assert!(!out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "hello world\n");
    assert!(!out.stderr.is_empty());
}

#[test]
fn malformed_template_exits_before_greeting() {
    let out = greeter(&["--template", "{{ Count"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn config_file_overrides_greeting() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "greeting: good evening").unwrap();
    writeln!(file, "log:\n  level: error").unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let out = greeter(&["--config", &path]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "good evening\n17 items are made of wool\n"
    );
}
