use std::process::Command;

#[test]
fn scripted_demo_session_exits_cleanly() {
    let output = Command::new(env!("CARGO_BIN_EXE_homestead"))
        .output()
        .expect("can spawn demo binary");
    assert!(
        output.status.success(),
        "demo failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
