use lookout_core::announce::{load_feed, next_unseen, Notice};
use lookout_core::dismissal::DismissalLog;
use tempfile::TempDir;

fn notice(id: &str) -> Notice {
    Notice {
        id: id.into(),
        title: format!("Notice {id}"),
        body: Some("text".into()),
        url: None,
        force: false,
    }
}

#[test]
fn test_load_feed_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    assert!(load_feed(&dir.path().join("notices.json")).is_empty());
}

#[test]
fn test_load_feed_malformed_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notices.json");
    std::fs::write(&path, "not json at all").unwrap();
    assert!(load_feed(&path).is_empty());
}

#[test]
fn test_load_feed_parses_optional_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notices.json");
    std::fs::write(
        &path,
        r#"[
            {"id": "a", "title": "Hello", "body": "Welcome"},
            {"id": "b", "title": "Page", "url": "https://example.com", "force": true}
        ]"#,
    )
    .unwrap();

    let feed = load_feed(&path);
    assert_eq!(feed.len(), 2);

    assert_eq!(feed[0].id, "a");
    assert_eq!(feed[0].body.as_deref(), Some("Welcome"));
    assert!(feed[0].url.is_none());
    assert!(!feed[0].force);

    assert_eq!(feed[1].url.as_deref(), Some("https://example.com"));
    assert!(feed[1].body.is_none());
    assert!(feed[1].force);
}

#[test]
fn test_next_unseen_skips_dismissed() {
    let dir = TempDir::new().unwrap();
    let mut log = DismissalLog::open(dir.path().join("dismissed.json"));
    log.mark_shown("a");

    let feed = vec![notice("a"), notice("b")];
    let next = next_unseen(&feed, &log).unwrap();
    assert_eq!(next.id, "b");
}

#[test]
fn test_next_unseen_none_when_all_dismissed() {
    let dir = TempDir::new().unwrap();
    let mut log = DismissalLog::open(dir.path().join("dismissed.json"));
    log.mark_shown("a");
    log.mark_shown("b");

    let feed = vec![notice("a"), notice("b")];
    assert!(next_unseen(&feed, &log).is_none());
}

#[test]
fn test_force_notice_shows_even_when_dismissed() {
    let dir = TempDir::new().unwrap();
    let mut log = DismissalLog::open(dir.path().join("dismissed.json"));
    log.mark_shown("a");

    let mut forced = notice("a");
    forced.force = true;
    let feed = vec![forced];
    assert_eq!(next_unseen(&feed, &log).unwrap().id, "a");
}

#[test]
fn test_feed_order_decides_priority() {
    let dir = TempDir::new().unwrap();
    let log = DismissalLog::open(dir.path().join("dismissed.json"));

    let feed = vec![notice("first"), notice("second")];
    assert_eq!(next_unseen(&feed, &log).unwrap().id, "first");
}
