use pretty_assertions::assert_eq;

use profile_editor_store::prelude::*;

#[test]
fn test_values_survive_reopening_sqlite_store() -> Result<(), Error> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("storage.sqlite");

    {
        let store = Store::open(SqliteDriver::new(&path))?;
        store.set("profile", r#"[{"name":"Phone","value":"+79999999999"}]"#)?;
    }

    let store = Store::open(SqliteDriver::new(&path))?;
    assert_eq!(
        store.get("profile")?,
        Some(r#"[{"name":"Phone","value":"+79999999999"}]"#.to_string())
    );

    Ok(())
}

#[test]
fn test_delete_removes_value_for_later_sessions() -> Result<(), Error> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("storage.sqlite");

    {
        let store = Store::open(SqliteDriver::new(&path))?;
        store.set("profile", "[]")?;
        store.set("other", "1")?;
        store.delete("profile")?;
    }

    let store = Store::open(SqliteDriver::new(&path))?;
    assert!(!store.contains_key("profile")?);
    assert_eq!(store.keys()?, vec!["other".to_string()]);

    Ok(())
}

#[test]
fn test_cloned_handles_share_the_database() {
    let store = Store::open(MemoryDriver::new()).unwrap();
    let other = store.clone();

    store.set("profile", "[]").unwrap();
    assert_eq!(other.get("profile").unwrap(), Some("[]".to_string()));

    other.truncate().unwrap();
    assert_eq!(store.get("profile").unwrap(), None);
}

#[test]
fn test_memory_driver_seeds_items() {
    let store = Store::open(MemoryDriver::new().with_item("profile", "{}")).unwrap();
    assert_eq!(store.get("profile").unwrap(), Some("{}".to_string()));
    assert_eq!(store.get("missing").unwrap(), None);
}
