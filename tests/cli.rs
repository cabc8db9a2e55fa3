use rideboard::ui::helpers::strip_ansi;
use rideboard::Vehicle;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Runs the binary against an empty config file so the user's own config
/// never leaks in.
fn rideboard(args: &[&str], stdin: Option<&str>) -> Output {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "").unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_rideboard"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).unwrap();
        }
    }
    child.wait_with_output().unwrap()
}

#[test]
fn list_prints_matching_vehicles() {
    let output = rideboard(&["list", "--max-price", "30"], None);
    assert!(output.status.success());

    let text = strip_ansi(&String::from_utf8(output.stdout).unwrap());
    assert!(text.contains("2 vehicles found"));
    assert!(text.contains("Economy Sedan"));
    assert!(text.contains("Economy Compact"));
    assert!(!text.contains("Standard SUV"));
}

#[test]
fn list_json_is_machine_readable() {
    let output = rideboard(&["list", "--type", "luxury", "--sort", "price-desc", "--json"], None);
    assert!(output.status.success());

    let vehicles: Vec<Vehicle> = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<_> = vehicles.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["Luxury Limousine", "Luxury SUV"]);
}

#[test]
fn list_rejects_out_of_range_price() {
    let output = rideboard(&["list", "--min-price", "120"], None);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("outside 0 - 100"));
}

#[test]
fn missing_catalog_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.json");
    let output = rideboard(&["--catalog", missing.to_str().unwrap(), "list"], None);
    assert!(!output.status.success());
}

#[test]
fn browse_session_survives_bad_commands() {
    let output = rideboard(
        &["browse", "--rows", "30"],
        Some("price 50 10\nwarp 9\nsort price-desc\nselect 8\nquit\n"),
    );
    assert!(output.status.success());

    let text = strip_ansi(&String::from_utf8(output.stdout).unwrap());
    assert!(text.contains("price minimum 50 exceeds maximum 10"));
    assert!(text.contains("unknown command 'warp'"));
    assert!(text.contains("Sorted: Price: High to Low"));
    assert!(text.contains("Booking requested: Luxury Limousine ($95/ride)"));
}
