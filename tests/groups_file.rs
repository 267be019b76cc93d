// Format tests for the TOML group-file override
//
// These tests feed raw file text to the parser (independent of how the
// binary loads files from disk) and check what it accepts and rejects.

use bulbctl::GroupTable;

#[test]
fn valid_file_parses() {
    let table = GroupTable::from_toml_str(
        r#"
        [groups]
        kitchen = ["10.0.0.2", "10.0.0.3"]
        hall = ["10.0.0.9"]
        "#,
    )
    .unwrap();

    assert_eq!(table.resolve("kitchen").unwrap(), &["10.0.0.2", "10.0.0.3"]);
    assert_eq!(table.resolve("hall").unwrap(), &["10.0.0.9"]);
    assert!(table.resolve("garage").is_none());
}

#[test]
fn host_order_is_preserved() {
    // Hosts are switched in listed order, so parsing must not reorder them
    let table = GroupTable::from_toml_str(
        r#"
        [groups]
        all = ["10.0.0.9", "10.0.0.1", "10.0.0.5"]
        "#,
    )
    .unwrap();

    assert_eq!(
        table.resolve("all").unwrap(),
        &["10.0.0.9", "10.0.0.1", "10.0.0.5"]
    );
}

#[test]
fn empty_group_rejected() {
    let err = GroupTable::from_toml_str(
        r#"
        [groups]
        kitchen = []
        "#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("kitchen"));
    assert!(err.to_string().contains("has no hosts"));
}

#[test]
fn blank_host_rejected() {
    let err = GroupTable::from_toml_str(
        r#"
        [groups]
        kitchen = ["10.0.0.2", ""]
        "#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("blank host"));
}

#[test]
fn missing_groups_table_rejected() {
    assert!(GroupTable::from_toml_str("kitchen = [\"10.0.0.2\"]\n").is_err());
}

#[test]
fn invalid_toml_rejected() {
    assert!(GroupTable::from_toml_str("[groups\nkitchen = [").is_err());
}

#[test]
fn wrong_value_type_rejected() {
    assert!(
        GroupTable::from_toml_str(
            r#"
            [groups]
            kitchen = "10.0.0.2"
            "#,
        )
        .is_err()
    );
}

#[test]
fn shipped_example_file_parses() {
    let path = format!("{}/groups.example.toml", env!("CARGO_MANIFEST_DIR"));
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));
    let table = GroupTable::from_toml_str(&text)
        .unwrap_or_else(|e| panic!("Failed to parse {path}: {e}"));

    // The example mirrors the built-in table
    assert_eq!(table.resolve("decke").unwrap().len(), 4);
    assert_eq!(table.resolve("bogenlampe").unwrap(), &["192.168.0.143"]);
}
