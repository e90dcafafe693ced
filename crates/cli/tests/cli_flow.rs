use std::fs;

use stockroom_cli::{AppConfig, Command, Status, execute};
use stockroom_infra::{InMemoryRepository, JsonFileRepository, StockRepository};
use tempfile::TempDir;

fn run<R: StockRepository>(repo: &R, command: Command) -> (Status, String) {
    let mut out = Vec::new();
    let status = execute(&command, &AppConfig::default(), repo, &mut out).expect("command failed");
    (status, String::from_utf8(out).expect("utf-8 output"))
}

fn add(item: &str, qty: &str) -> Command {
    Command::Add {
        item: item.to_string(),
        qty: qty.to_string(),
    }
}

fn remove(item: &str, qty: &str) -> Command {
    Command::Remove {
        item: item.to_string(),
        qty: qty.to_string(),
    }
}

#[test]
fn demo_flow_prints_quantities_and_report() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("inventory.json"));

    let (status, out) = run(&repo, Command::Demo);

    assert_eq!(status, Status::Success);
    assert_eq!(
        out,
        "Apple stock: 7\nLow items: [banana]\nItems Report:\napple -> 7\nbanana -> -2\n"
    );

    let saved = fs::read_to_string(repo.path()).unwrap();
    assert_eq!(saved, "{\n    \"apple\": 7,\n    \"banana\": -2\n}");
}

#[test]
fn demo_survives_unwritable_file() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("missing").join("inventory.json"));

    let (status, out) = run(&repo, Command::Demo);

    assert_eq!(status, Status::Success);
    assert!(out.ends_with("Items Report:\n"));
}

#[test]
fn add_then_remove_persists_between_commands() {
    let repo = InMemoryRepository::new();

    assert_eq!(run(&repo, add("apple", "10")), (Status::Success, "apple -> 10\n".to_string()));
    assert_eq!(run(&repo, remove("apple", "3")), (Status::Success, "apple -> 7\n".to_string()));
    assert_eq!(
        run(&repo, Command::Qty { item: "apple".to_string() }),
        (Status::Success, "apple stock: 7\n".to_string())
    );

    assert_eq!(run(&repo, remove("apple", "7")), (Status::Success, "apple removed\n".to_string()));
    assert!(repo.load().is_empty());
}

#[test]
fn non_integer_qty_is_rejected_without_saving() {
    let repo = InMemoryRepository::new();

    let (status, out) = run(&repo, add("apple", "ten"));

    assert_eq!(status, Status::Rejected);
    assert!(out.is_empty());
    assert_eq!(repo.contents(), None);
}

#[test]
fn removing_missing_item_is_only_a_warning() {
    let repo = InMemoryRepository::new();
    run(&repo, add("apple", "10"));

    let (status, out) = run(&repo, remove("orange", "1"));

    assert_eq!(status, Status::Success);
    assert!(out.is_empty());
    assert_eq!(repo.load().quantity_of("apple"), 10);
}

#[test]
fn remove_with_bad_qty_on_present_item_is_rejected() {
    let repo = InMemoryRepository::new();
    run(&repo, add("apple", "10"));

    assert_eq!(run(&repo, remove("apple", "three")).0, Status::Rejected);
    assert_eq!(run(&repo, remove("apple", "-4")).0, Status::Rejected);
    assert_eq!(repo.load().quantity_of("apple"), 10);
}

#[test]
fn low_and_report_read_the_saved_stock() {
    let repo = InMemoryRepository::with_contents(r#"{"apple": 3, "banana": 10}"#);

    assert_eq!(
        run(&repo, Command::Low { threshold: None }),
        (Status::Success, "Low items: [apple]\n".to_string())
    );
    assert_eq!(
        run(&repo, Command::Low { threshold: Some(11) }),
        (Status::Success, "Low items: [apple, banana]\n".to_string())
    );
    assert_eq!(
        run(&repo, Command::Report),
        (Status::Success, "Items Report:\napple -> 3\nbanana -> 10\n".to_string())
    );
}

#[test]
fn corrupt_file_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(&path, "not json at all").unwrap();
    let repo = JsonFileRepository::new(&path);

    assert_eq!(run(&repo, Command::Report).1, "Items Report:\n");
    assert_eq!(run(&repo, add("pear", "2")).1, "pear -> 2\n");
    assert_eq!(fs::read_to_string(&path).unwrap(), "{\n    \"pear\": 2\n}");
}

#[test]
fn add_keeps_valid_entries_next_to_bad_ones() {
    let repo = InMemoryRepository::with_contents(r#"{"apple": 5, "pear": 2.0, "": 3}"#);

    assert_eq!(run(&repo, add("fig", "1")), (Status::Success, "fig -> 1\n".to_string()));
    assert_eq!(
        repo.contents().as_deref(),
        Some("{\n    \"apple\": 5,\n    \"fig\": 1\n}")
    );
}

#[test]
fn remove_keeps_valid_entries_next_to_bad_ones() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(&path, r#"{"apple": 5, "banana": 4, "pear": "lots"}"#).unwrap();
    let repo = JsonFileRepository::new(&path);

    assert_eq!(run(&repo, remove("banana", "1")).1, "banana -> 3\n");
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\n    \"apple\": 5,\n    \"banana\": 3\n}"
    );
}

#[test]
fn add_to_unwritable_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("missing").join("inventory.json"));

    let mut out = Vec::new();
    let err = execute(&add("apple", "1"), &AppConfig::default(), &repo, &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("failed to save stock"));
}
