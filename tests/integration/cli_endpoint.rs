use std::process::Command as StdCommand;

use crate::common::BINARY_PATH;

fn run_endpoint(args: &[&str]) -> (bool, String) {
    let output = StdCommand::new(BINARY_PATH)
        .arg("endpoint")
        .args(args)
        .output()
        .expect("process should start");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).trim_end().to_string(),
    )
}

#[test]
fn local_hostname_prints_http_endpoint() {
    let (success, stdout) = run_endpoint(&["--hostname", "localhost", "--port", "3000"]);
    assert!(success);
    assert_eq!(stdout, "http://localhost:3000/mcp");
}

#[test]
fn default_https_port_is_suppressed() {
    let (success, stdout) = run_endpoint(&["--hostname", "example.com", "--port", "443"]);
    assert!(success);
    assert_eq!(stdout, "https://example.com/mcp");
}

#[test]
fn empty_hostname_prints_nothing_and_succeeds() {
    let (success, stdout) = run_endpoint(&["--hostname", "", "--port", "3000"]);
    assert!(success);
    assert_eq!(stdout, "");
}

#[test]
fn malformed_url_prints_nothing_and_succeeds() {
    let (success, stdout) = run_endpoint(&["--url", "http://bad host/"]);
    assert!(success);
    assert_eq!(stdout, "");
}

#[test]
fn json_output_includes_availability() {
    let (success, stdout) = run_endpoint(&["--url", "https://api.example.com:8443/", "--json"]);
    assert!(success);
    let payload: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(payload["url"], "https://api.example.com:8443/mcp");
    assert_eq!(payload["available"], true);
}
