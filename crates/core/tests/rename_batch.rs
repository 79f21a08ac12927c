use seqrename_core::{rename, EventLog, PlanStats, RenameEvent, RenameOptions, RenameOutcome};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), name.as_bytes()).expect("create fixture");
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read_dir")
        .map(|entry| {
            entry
                .expect("entry")
                .file_name()
                .to_string_lossy()
                .to_string()
        })
        .collect();
    names.sort();
    names
}

fn planned(log: &EventLog) -> Vec<(String, String)> {
    log.entries()
        .map(|(from, to, _)| (from.to_string(), to.to_string()))
        .collect()
}

#[test]
fn renames_in_name_order_regardless_of_creation_order() {
    let temp = tempdir().expect("tempdir");
    for name in ["c.png", "a.jpg", "B.gif"] {
        touch(temp.path(), name);
    }

    let options = RenameOptions {
        prefix: "img".to_string(),
        num_digits: 2,
        ..RenameOptions::with_directory(temp.path())
    };
    let mut log = EventLog::new();
    let summary = rename(&options, &mut log);

    assert_eq!(summary.renamed, 3);
    // ordinal order puts uppercase first
    assert_eq!(
        planned(&log),
        vec![
            ("B.gif".to_string(), "img_01.gif".to_string()),
            ("a.jpg".to_string(), "img_02.jpg".to_string()),
            ("c.png".to_string(), "img_03.png".to_string()),
        ]
    );
    assert_eq!(listing(temp.path()), vec!["img_01.gif", "img_02.jpg", "img_03.png"]);
    assert_eq!(
        fs::read(temp.path().join("img_02.jpg")).expect("content"),
        b"a.jpg"
    );
}

#[test]
fn non_images_and_directories_are_left_alone() {
    let temp = tempdir().expect("tempdir");
    touch(temp.path(), "notes.txt");
    touch(temp.path(), "photo.JPEG");
    fs::create_dir(temp.path().join("album.png")).expect("dir");

    let mut log = EventLog::new();
    let summary = rename(&RenameOptions::with_directory(temp.path()), &mut log);

    assert_eq!(summary.found, 1);
    assert_eq!(
        listing(temp.path()),
        vec!["album.png", "image_0001.JPEG", "notes.txt"]
    );
}

#[test]
fn extension_case_is_preserved() {
    let temp = tempdir().expect("tempdir");
    touch(temp.path(), "A.PNG");

    let options = RenameOptions {
        prefix: "img".to_string(),
        ..RenameOptions::with_directory(temp.path())
    };
    rename(&options, &mut EventLog::new());

    assert_eq!(listing(temp.path()), vec!["img_0001.PNG"]);
}

#[test]
fn wide_index_overflows_padding() {
    let temp = tempdir().expect("tempdir");
    touch(temp.path(), "a.webp");
    touch(temp.path(), "b.webp");

    let options = RenameOptions {
        start_num: 99,
        num_digits: 2,
        ..RenameOptions::with_directory(temp.path())
    };
    rename(&options, &mut EventLog::new());

    assert_eq!(listing(temp.path()), vec!["image_100.webp", "image_99.webp"]);
}

#[test]
fn preview_twice_is_stable_and_touches_nothing() {
    let temp = tempdir().expect("tempdir");
    for name in ["x.svg", "y.bmp", "z.tiff"] {
        touch(temp.path(), name);
    }
    let before = listing(temp.path());
    let options = RenameOptions {
        preview: true,
        ..RenameOptions::with_directory(temp.path())
    };

    let mut first = EventLog::new();
    let mut second = EventLog::new();
    let summary = rename(&options, &mut first);
    rename(&options, &mut second);

    assert_eq!(summary.previewed, 3);
    assert_eq!(summary.renamed, 0);
    assert_eq!(first.events, second.events);
    assert!(first
        .entries()
        .all(|(_, _, outcome)| *outcome == RenameOutcome::Previewed));
    assert_eq!(listing(temp.path()), before);
}

#[test]
fn existing_target_is_never_overwritten() {
    let temp = tempdir().expect("tempdir");
    touch(temp.path(), "a.jpg");
    touch(temp.path(), "image_0001.jpg");

    let mut log = EventLog::new();
    let summary = rename(&RenameOptions::with_directory(temp.path()), &mut log);

    assert_eq!(summary.skipped_exists, 1);
    assert_eq!(fs::read(temp.path().join("a.jpg")).expect("source"), b"a.jpg");
    assert_eq!(
        fs::read(temp.path().join("image_0001.jpg")).expect("occupant"),
        b"image_0001.jpg"
    );
}

#[test]
fn only_text_files_reports_no_images() {
    let temp = tempdir().expect("tempdir");
    touch(temp.path(), "a.txt");
    touch(temp.path(), "b.txt");

    let mut log = EventLog::new();
    let summary = rename(&RenameOptions::with_directory(temp.path()), &mut log);

    assert_eq!(summary.found, 0);
    assert!(!summary.aborted);
    assert_eq!(
        log.events,
        vec![RenameEvent::NoImages {
            path: temp.path().to_path_buf()
        }]
    );
    assert_eq!(listing(temp.path()), vec!["a.txt", "b.txt"]);
}

#[test]
fn nonexistent_directory_is_fatal_without_entries() {
    let temp = tempdir().expect("tempdir");
    let missing = temp.path().join("does-not-exist");

    let mut log = EventLog::new();
    let summary = rename(&RenameOptions::with_directory(&missing), &mut log);

    assert!(summary.aborted);
    assert_eq!(log.entries().count(), 0);
    assert!(matches!(
        log.events.as_slice(),
        [RenameEvent::InvalidDirectory { .. }]
    ));
}

#[test]
fn run_is_bracketed_by_start_and_finish() {
    let temp = tempdir().expect("tempdir");
    touch(temp.path(), "a.gif");

    let mut log = EventLog::new();
    let summary = rename(&RenameOptions::with_directory(temp.path()), &mut log);

    assert_eq!(
        log.events.first(),
        Some(&RenameEvent::Started {
            count: 1,
            preview: false,
            stats: PlanStats {
                scanned_entries: 1,
                image_files: 1,
                skipped_non_image: 0,
                skipped_non_file: 0,
            },
        })
    );
    assert_eq!(log.events.last(), Some(&RenameEvent::Finished { summary }));
}

#[test]
fn oversized_padding_is_reported_as_failure() {
    let temp = tempdir().expect("tempdir");
    touch(temp.path(), "a.jpg");
    touch(temp.path(), "b.jpg");

    let options = RenameOptions {
        num_digits: 70_000,
        ..RenameOptions::with_directory(temp.path())
    };
    let mut log = EventLog::new();
    let summary = rename(&options, &mut log);

    assert_eq!(summary.failed, 2);
    assert!(log
        .entries()
        .all(|(_, _, outcome)| matches!(outcome, RenameOutcome::Failed { .. })));
    assert_eq!(listing(temp.path()), vec!["a.jpg", "b.jpg"]);
    assert!(matches!(log.events.last(), Some(RenameEvent::Finished { .. })));
}

#[test]
fn negative_start_num_counts_up_through_zero() {
    let temp = tempdir().expect("tempdir");
    touch(temp.path(), "a.png");
    touch(temp.path(), "b.png");
    touch(temp.path(), "c.png");

    let options = RenameOptions {
        start_num: -1,
        num_digits: 2,
        ..RenameOptions::with_directory(temp.path())
    };
    rename(&options, &mut EventLog::new());

    assert_eq!(
        listing(temp.path()),
        vec!["image_-1.png", "image_00.png", "image_01.png"]
    );
}
