use std::process::Command;

fn ssmps() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ssmps"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_arguments_exits_with_failure() {
    let output = ssmps().output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Too few arguments"));
}

#[test]
fn test_version_flag() {
    let output = ssmps().arg("--version").output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        format!("ssmps {}", env!("CARGO_PKG_VERSION"))
    );
}
