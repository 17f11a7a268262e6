//! Checkpoint log, output tables and run log on disk

use district_scrape::content_saver::{
    CheckpointStore, OutputTables, RunLog, TableWriter, latest_log_tail,
};
use district_scrape::crawl_engine::ChildKind;

mod common;

#[test]
fn checkpoints_survive_reload() {
    let dir = common::create_test_dir().unwrap();
    let path = dir.path().join("progress.txt");

    let mut store = CheckpointStore::load(&path).unwrap();
    assert!(store.is_empty());
    store.mark_done("Goa").unwrap();
    store.mark_done("  Kerala ").unwrap();
    assert!(store.is_done("Goa"));

    let reloaded = CheckpointStore::load(&path).unwrap();
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.is_done("Kerala"));
    assert!(!reloaded.is_done("Assam"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Goa\nKerala\n");
}

#[test]
fn checkpoint_lines_are_trimmed_and_blanks_ignored() {
    let dir = common::create_test_dir().unwrap();
    let path = dir.path().join("progress.txt");
    std::fs::write(&path, "Goa\r\n\n   \n Punjab \n").unwrap();

    let store = CheckpointStore::load(&path).unwrap();

    assert_eq!(store.len(), 2);
    assert!(store.is_done("Punjab"));
}

#[test]
fn header_is_written_once_across_reopens() {
    let dir = common::create_test_dir().unwrap();
    let path = dir.path().join("blocks.csv");

    {
        let mut table = TableWriter::open(&path, ["state", "district", "block"]).unwrap();
        table.write_row("Goa", "North Goa", "Bardez").unwrap();
        table.flush().unwrap();
        assert_eq!(table.rows_written(), 1);
    }
    {
        let mut table = TableWriter::open(&path, ["state", "district", "block"]).unwrap();
        table.write_row("Goa", "South Goa", "Salcete, Margao").unwrap();
        table.flush().unwrap();
        assert_eq!(table.rows_written(), 1);
    }

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "state,district,block\nGoa,North Goa,Bardez\nGoa,South Goa,\"Salcete, Margao\"\n"
    );
}

#[test]
fn district_without_children_still_gets_a_row() {
    let dir = common::create_test_dir().unwrap();
    let sub_path = dir.path().join("sub.csv");
    let block_path = dir.path().join("blocks.csv");
    let mut tables = OutputTables::open(&sub_path, &block_path).unwrap();

    let children = vec!["Tiswadi".to_string(), "Bardez".to_string()];
    let written = tables
        .write_children(ChildKind::Subdistrict, "Goa", "North Goa", &children)
        .unwrap();
    let empty = tables
        .write_children(ChildKind::Block, "Goa", "North Goa", &[])
        .unwrap();
    tables.flush().unwrap();

    assert_eq!(written, 2);
    assert_eq!(empty, 1);
    assert_eq!(tables.table(ChildKind::Block).rows_written(), 1);
    assert_eq!(
        std::fs::read_to_string(&block_path).unwrap(),
        "state,district,block\nGoa,North Goa,\n"
    );
}

#[test]
fn run_log_lines_are_timestamped() {
    let dir = common::create_test_dir().unwrap();
    let path = dir.path().join("20250101_IGOD.log");
    let mut log = RunLog::open(&path).unwrap();

    log.info("== Goa ==");
    log.warn("[WARN] Block mismatch");

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with('['));
    assert_eq!(&lines[0][9..], "] == Goa ==");
    assert!(lines[1].ends_with("[WARN] Block mismatch"));
}

#[test]
fn log_tail_reads_most_recent_log() {
    let dir = common::create_test_dir().unwrap();
    let old: String = (1..=5).map(|n| format!("old {n}\n")).collect();
    let new: String = (1..=50).map(|n| format!("line {n}\n")).collect();
    std::fs::write(dir.path().join("20240101_IGOD.log"), old).unwrap();
    std::fs::write(dir.path().join("20250101_IGOD.log"), new).unwrap();
    std::fs::write(dir.path().join("20990101_OTHER.log"), "other\n").unwrap();

    let tail = latest_log_tail(dir.path(), "IGOD", 40).unwrap();

    let lines: Vec<&str> = tail.lines().collect();
    assert_eq!(lines.len(), 40);
    assert_eq!(lines[0], "line 11");
    assert_eq!(lines[39], "line 50");
}

#[test]
fn log_tail_is_empty_without_logs() {
    let dir = common::create_test_dir().unwrap();
    assert_eq!(latest_log_tail(dir.path(), "IGOD", 40).unwrap(), "");
    assert_eq!(
        latest_log_tail(&dir.path().join("missing"), "IGOD", 40).unwrap(),
        ""
    );
}
