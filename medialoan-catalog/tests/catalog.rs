use std::fs;

use medialoan_catalog::{append_summary_file, CatalogError, CatalogManager};
use medialoan_core::Member;
use tempfile::TempDir;

const SAMPLE: &str = "\
1|Movie|Inception|Christopher Nolan|A thief enters dreams|Sci-Fi;Thriller|2010|true|148|false
2|Series|Breaking Bad|Vince Gilligan|Chemistry teacher turns|Crime;Drama|2008|true|62|1=7,2=13,3=13,4=13,5=16
3|Movie|The Grand Budapest Hotel|Wes Anderson|A concierge and his lobby boy|Comedy|2014|false|99|true
";

#[test]
fn load_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("catalog.txt");
    fs::write(&path, SAMPLE).unwrap();

    let mgr = CatalogManager::load(&path).unwrap();
    assert_eq!(mgr.len(), 3);
    assert_eq!(mgr.content_by_id(2).unwrap().title, "Breaking Bad");
    assert_eq!(mgr.content_by_id(2).unwrap().episodes_in_season(2), Some(13));
}

#[test]
fn missing_file_is_an_io_error() {
    let tmp = TempDir::new().unwrap();
    let result = CatalogManager::load(&tmp.path().join("nope.txt"));
    assert!(matches!(result, Err(CatalogError::Io(_))));
}

#[test]
fn malformed_file_produces_no_manager() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("catalog.txt");
    fs::write(
        &path,
        "1|Movie|Inception|Nolan|Dreams|Sci-Fi|2010|true|not-a-number|false\n",
    )
    .unwrap();

    assert!(matches!(
        CatalogManager::load(&path),
        Err(CatalogError::Parse { line: 1, .. })
    ));
}

#[test]
fn borrow_return_cycle_through_a_loaded_catalog() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("catalog.txt");
    fs::write(&path, SAMPLE).unwrap();

    let mut mgr = CatalogManager::load(&path).unwrap();
    let mut member = Member::new("Dana");

    mgr.borrow_content(1, &mut member).unwrap();
    assert!(!mgr.content_by_id(1).unwrap().is_available());
    assert_eq!(member.rentals.len(), 1);
    assert_eq!(member.rentals[0].customer_name, "Dana");

    mgr.process_return(1, &mut member).unwrap();
    assert!(mgr.content_by_id(1).unwrap().is_available());
    assert_eq!(member.history.len(), 1);
}

#[test]
fn export_is_append_only_and_lossy() {
    let tmp = TempDir::new().unwrap();
    let catalog_path = tmp.path().join("catalog.txt");
    let export_path = tmp.path().join("summary.txt");
    fs::write(&catalog_path, SAMPLE).unwrap();

    let mut mgr = CatalogManager::load(&catalog_path).unwrap();
    append_summary_file(&export_path, mgr.inventory()).unwrap();

    let mut member = Member::new("Dana");
    mgr.borrow_content(1, &mut member).unwrap();
    append_summary_file(&export_path, mgr.inventory()).unwrap();

    let text = fs::read_to_string(&export_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    // Two snapshots, three lines each
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "1, Inception, true");
    assert_eq!(lines[3], "1, Inception, false");

    // Each line is exactly id, title, availability — nothing more
    for line in &lines {
        assert_eq!(line.split(", ").count(), 3);
    }

    // The dump is not a loadable catalog
    assert!(CatalogManager::load(&export_path).is_err());
}
