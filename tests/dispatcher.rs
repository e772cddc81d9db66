use std::process::Command;

#[test]
fn unknown_architecture_exits_nonzero() {
    let output = Command::new(env!("CARGO_BIN_EXE_compiler-dispatcher"))
        .args(["-arch=mips", "-c", "main.c++"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Cannot interpret architecture \"mips\""));
    assert!(stdout.contains("\"-c\""));
    assert!(stdout.contains("\"main.c++\""));
}

#[test]
fn missing_architecture_exits_nonzero() {
    let output = Command::new(env!("CARGO_BIN_EXE_compiler-dispatcher"))
        .args(["-c", "main.c++"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Cannot interpret architecture \"\""));
}

#[cfg(unix)]
#[test]
fn compiler_owns_exit_status_and_arguments() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let compiler = dir.path().join("aarch64-linux-gnu-g++");
    fs::write(&compiler, "#!/bin/sh\necho \"ARGS:$*\"\nexit 7\n").unwrap();
    fs::set_permissions(&compiler, fs::Permissions::from_mode(0o755)).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_compiler-dispatcher"))
        .args(["-O2", "-arch=aa64", "-c", "x.c++"])
        .env("PATH", dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(7));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "ARGS:-O2 -c x.c++\n");
}
