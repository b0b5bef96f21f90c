use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["7"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["dimension"], 3);
    assert!(v["winner"].is_string() || v["winner"].is_null());
    assert!(v["turns"].as_u64().unwrap() >= 5);
    assert_eq!(v["board"].as_str().unwrap().lines().count(), 3);
}

#[test]
fn sim_binary_custom_dimension() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["42", "5"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let v: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("invalid json");
    assert_eq!(v["dimension"], 5);
}

#[test]
fn sim_binary_rejects_missing_seed() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
