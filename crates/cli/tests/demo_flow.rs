// Black-box tests for the demonstration routine: console transcript and
// the stock file it leaves behind.

use stockbook_cli::{DemoConfig, run};
use stockbook_inventory::{BufferConsole, StockLedger};
use tempfile::TempDir;

fn run_demo(config: &DemoConfig) -> (anyhow::Result<()>, Vec<String>) {
    let console = BufferConsole::new();
    let mut ledger = StockLedger::with_console(console.clone());
    let result = run(&mut ledger, config);
    (result, console.lines())
}

/// Activity lines start with a timestamp; compare only the part after it.
fn strip_timestamp(line: &str) -> &str {
    line.split_once(": ").map(|(_, rest)| rest).unwrap_or(line)
}

#[test]
fn demo_prints_expected_transcript() {
    let dir = TempDir::new().unwrap();
    let config = DemoConfig::new(dir.path().join("inventory.json"));

    let (result, lines) = run_demo(&config);
    result.unwrap();

    assert_eq!(lines.len(), 10);
    assert_eq!(strip_timestamp(&lines[0]), "Added 10 of apple");
    assert_eq!(strip_timestamp(&lines[1]), "Added 2 of banana");
    assert_eq!(strip_timestamp(&lines[2]), "Added 1 of orange");
    assert_eq!(
        &lines[3..],
        &[
            "Apple stock: 7",
            "Low items: [\"banana\", \"orange\"]",
            "Items Report",
            "apple -> 7",
            "banana -> 2",
            "orange -> 1",
            "{\"status\":\"ok\"}",
        ]
    );
}

#[test]
fn demo_leaves_pretty_stock_file() {
    let dir = TempDir::new().unwrap();
    let config = DemoConfig::new(dir.path().join("inventory.json"));

    run_demo(&config).0.unwrap();

    let saved = std::fs::read_to_string(&config.data_path).unwrap();
    assert_eq!(
        saved,
        "{\n    \"apple\": 7,\n    \"banana\": 2,\n    \"orange\": 1\n}"
    );
}

#[test]
fn demo_fails_when_stock_file_cannot_be_written() {
    let dir = TempDir::new().unwrap();
    let config = DemoConfig::new(dir.path().join("missing").join("inventory.json"));

    let (result, lines) = run_demo(&config);
    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("could not be used"));

    // The scenario got as far as the low-stock line, then stopped.
    assert_eq!(lines.last().unwrap(), "Low items: [\"banana\", \"orange\"]");
    assert!(!lines.iter().any(|l| l == "Items Report"));
}
