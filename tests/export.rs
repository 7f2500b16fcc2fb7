// tests/export.rs
//
// Export text + file writing. The export is a fixed table; table state
// never leaks into it.

use std::fs;
use std::path::PathBuf;

use turin_watch::config::options::{ExportFormat, ExportOptions};
use turin_watch::csv::to_export_string;
use turin_watch::data::{ListingTable, SortKey};
use turin_watch::error::ExportError;
use turin_watch::file::{export_text, write_export};
use turin_watch::store::Dataset;

fn tmp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("turin_watch_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn export_has_header_plus_five_rows() {
    let ds = Dataset::sample();
    let txt = export_text(&ds, &ExportOptions::default());
    let lines: Vec<&str> = txt.lines().collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Property Title,Price,Location,Date Added,Source");
    assert_eq!(lines[1], "Bilocale Centro Storico,580,Centro,2025-08-04 10:45,Idealista");
    assert_eq!(lines[5], "Appartamento Borgo Po,850,Borgo Po,2025-08-03 14:15,Subito");
    assert!(!txt.ends_with('\n'));
}

#[test]
fn export_ignores_table_filter_and_sort() {
    let ds = Dataset::sample();
    let before = export_text(&ds, &ExportOptions::default());

    let mut table = ListingTable::new(&ds.history_listings);
    table.filter("crocetta");
    table.sort(SortKey::Price);
    assert_eq!(table.visible_count(), 1);

    assert_eq!(export_text(&ds, &ExportOptions::default()), before);
}

#[test]
fn tsv_uses_tabs_and_extension() {
    let ds = Dataset::sample();
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;

    let txt = export_text(&ds, &opts);
    assert!(txt.starts_with("Property Title\tPrice\tLocation\tDate Added\tSource\n"));
    assert!(opts.out_path().to_string_lossy().ends_with("property_listings.tsv"));
}

#[test]
fn fields_with_separator_or_quotes_are_quoted() {
    let headers = vec!["a".to_string(), "b".to_string()];
    let rows = vec![vec!["x, y".to_string(), "say \"hi\"".to_string()]];
    let txt = to_export_string(&headers, &rows, ',');
    assert_eq!(txt, "a,b\n\"x, y\",\"say \"\"hi\"\"\"");
}

#[test]
fn set_path_keeps_extension_tied_to_format() {
    let mut opts = ExportOptions::default();
    opts.set_path("reports/august.txt");
    assert_eq!(opts.out_path(), PathBuf::from("reports").join("august.csv"));
    opts.format = ExportFormat::Tsv;
    assert_eq!(opts.out_path(), PathBuf::from("reports").join("august.tsv"));
}

#[test]
fn write_export_creates_directories_and_writes_file() {
    let ds = Dataset::sample();
    let dir = tmp_dir("write");
    let mut opts = ExportOptions::default();
    opts.set_path(&dir.join("nested").join("listings").to_string_lossy());

    let path = write_export(&ds, &opts).expect("export should succeed");
    assert_eq!(path, dir.join("nested").join("listings.csv"));

    let on_disk = fs::read_to_string(&path).expect("file written");
    assert_eq!(on_disk, export_text(&ds, &opts));
    assert_eq!(on_disk.lines().count(), 6);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn write_export_refuses_a_file_as_directory() {
    let ds = Dataset::sample();
    let dir = tmp_dir("blocked");
    fs::create_dir_all(&dir).expect("tmp dir");
    let blocker = dir.join("not_a_dir");
    fs::write(&blocker, "x").expect("blocker file");

    let mut opts = ExportOptions::default();
    opts.set_path(&blocker.join("out").to_string_lossy());

    match write_export(&ds, &opts) {
        Err(ExportError::NotADirectory(p)) => assert_eq!(p, blocker),
        other => panic!("expected NotADirectory, got {other:?}"),
    }

    let _ = fs::remove_dir_all(&dir);
}
