use std::process::Command;

fn demo() -> Command {
    Command::new(env!("CARGO_BIN_EXE_argmap-cli"))
}

#[test]
fn greets_with_attached_name() {
    let out = demo()
        .args(["greet", "Ada"])
        .output()
        .expect("failed to run argmap-cli greet");
    assert!(
        out.status.success(),
        "greet failed:\nstatus: {}\nstderr:\n{}",
        out.status,
        String::from_utf8_lossy(&out.stderr),
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("Hello, Ada!"),
        "unexpected greet output:\n{stdout}"
    );
}

#[test]
fn greets_via_name_option() {
    let out = demo()
        .args(["greet", "--name", "World"])
        .output()
        .expect("failed to run argmap-cli greet --name");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("Hello, World!"),
        "unexpected greet output:\n{stdout}"
    );
}

#[test]
fn clustered_flags_compose() {
    let out = demo()
        .args(["greet", "Ada", "-lc", "2"])
        .output()
        .expect("failed to run argmap-cli with clustered flags");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout.matches("HELLO, ADA!").count(),
        2,
        "unexpected clustered-flag output:\n{stdout}"
    );
}

#[test]
fn command_alias_reaches_the_same_handler() {
    let out = demo()
        .args(["hi", "Grace"])
        .output()
        .expect("failed to run argmap-cli hi");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("Hello, Grace!"),
        "unexpected alias output:\n{stdout}"
    );
}

#[test]
fn unrecognized_option_exits_with_one() {
    let out = demo()
        .arg("--wat")
        .output()
        .expect("failed to run argmap-cli --wat");
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("Unrecognized option \"--wat\""),
        "missing diagnostic:\n{stdout}"
    );
}

#[test]
fn unrecognized_command_exits_with_one() {
    let out = demo()
        .arg("wat")
        .output()
        .expect("failed to run argmap-cli wat");
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("Unrecognized command \"wat\""),
        "missing diagnostic:\n{stdout}"
    );
}

#[test]
fn help_flag_lists_registrations() {
    let out = demo()
        .arg("--help")
        .output()
        .expect("failed to run argmap-cli --help");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("[greet, hi]") && stdout.contains("[-h, --help]"),
        "unexpected help output:\n{stdout}"
    );
}

#[test]
fn no_arguments_exits_with_two() {
    let out = demo().output().expect("failed to run argmap-cli");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("nothing to do"),
        "missing hint:\n{stderr}"
    );
}
