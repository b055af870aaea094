use super::*;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

struct SkipNames(Vec<&'static str>);

impl ScriptPolicy for SkipNames {
    fn keep(&self, entry: &FileEntry) -> bool {
        entry
            .file_name()
            .is_none_or(|name| !self.0.iter().any(|skip| OsStr::new(skip) == name))
    }

    fn format(&self, file: &FileEntry, folder: &Folder) -> String {
        format!(
            "cp \"{}\" \"{}\"\n",
            file.file_name().unwrap_or_default().display(),
            folder.destination.display()
        )
    }
}

fn listing_order(dir: &Path) -> Vec<std::ffi::OsString> {
    fs::read_dir(dir)
        .expect("read_dir")
        .map(|entry| entry.expect("entry").file_name())
        .collect()
}

#[test]
fn queue_is_first_in_first_out() {
    let mut queue = ScanQueue::new();
    assert!(queue.is_empty());

    queue.enqueue("/a", "/out/a");
    queue.enqueue("/b", "/out/b");
    assert_eq!(queue.len(), 2);

    let first = queue.dequeue().expect("first item");
    assert_eq!(first.source, PathBuf::from("/a"));
    assert_eq!(first.destination, PathBuf::from("/out/a"));

    let second = queue.dequeue().expect("second item");
    assert_eq!(second.source, PathBuf::from("/b"));
    assert!(queue.dequeue().is_none());
}

#[test]
fn queue_clear_drops_everything() {
    let mut queue = ScanQueue::new();
    queue.enqueue("/a", "/out/a");
    queue.enqueue("/b", "/out/b");
    queue.clear();
    assert!(queue.is_empty());
    assert!(queue.dequeue().is_none());
}

#[test]
fn scan_missing_folder_reports_read_dir_error() {
    let mut queue = ScanQueue::new();
    let missing = Path::new("/nonexistent/path/for/scanner");
    let error = scan_folder(&mut queue, missing, Path::new("/out"), "run", &KeepAll)
        .expect_err("missing folder should fail");
    assert!(matches!(error.kind(), ScanErrorKind::ReadDir { .. }));
    assert_eq!(error.path(), missing);
}

#[test]
fn scan_records_kept_entries_in_listing_order() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    fs::create_dir(&root).expect("create root");
    fs::write(root.join("a.txt"), b"a").expect("write a");
    fs::write(root.join("b.txt"), b"b").expect("write b");
    fs::create_dir(root.join("sub")).expect("create sub");

    let mut queue = ScanQueue::new();
    let folder = scan_folder(&mut queue, &root, Path::new("/out/root"), "run", &KeepAll)
        .expect("scan succeeds");

    assert_eq!(folder.source, root);
    assert_eq!(folder.destination, PathBuf::from("/out/root"));
    assert_eq!(folder.script_name, "run");
    assert!(folder.script.is_empty());
    assert_eq!(folder.children, vec![root.join("sub")]);

    let expected: Vec<_> = listing_order(&root)
        .into_iter()
        .filter(|name| name.as_os_str() != OsStr::new("sub"))
        .collect();
    let recorded: Vec<_> = folder
        .files
        .iter()
        .map(|file| file.file_name().expect("file name").to_os_string())
        .collect();
    assert_eq!(recorded, expected);
}

#[test]
fn scan_enqueues_kept_subfolders_with_joined_destination() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    fs::create_dir_all(root.join("kept")).expect("create kept");
    fs::create_dir_all(root.join("skip")).expect("create skip");

    let mut queue = ScanQueue::new();
    let folder = scan_folder(
        &mut queue,
        &root,
        Path::new("/out/root"),
        "run",
        &SkipNames(vec!["skip"]),
    )
    .expect("scan succeeds");

    assert_eq!(folder.children, vec![root.join("kept")]);
    assert_eq!(queue.len(), 1);
    let item = queue.dequeue().expect("queued child");
    assert_eq!(item.source, root.join("kept"));
    assert_eq!(item.destination, PathBuf::from("/out/root/kept"));
}

#[test]
fn dropped_entries_never_surface_anywhere() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    fs::create_dir_all(root.join("skip")).expect("create skip");
    fs::write(root.join("skip.txt"), b"x").expect("write skip.txt");
    fs::write(root.join("keep.txt"), b"x").expect("write keep.txt");

    let mut queue = ScanQueue::new();
    let folder = scan_folder(
        &mut queue,
        &root,
        Path::new("/out/root"),
        "run",
        &SkipNames(vec!["skip", "skip.txt"]),
    )
    .expect("scan succeeds");

    assert!(queue.is_empty());
    assert!(folder.children.is_empty());
    let names: Vec<_> = folder
        .files
        .iter()
        .map(|file| file.file_name().expect("file name").to_os_string())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("keep.txt")]);
}

#[test]
fn draining_the_queue_visits_breadth_first() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    fs::create_dir_all(root.join("a/deep")).expect("create a/deep");
    fs::create_dir_all(root.join("b")).expect("create b");

    let mut queue = ScanQueue::new();
    queue.enqueue(root.clone(), PathBuf::from("/out/root"));

    let mut visited = Vec::new();
    while let Some(item) = queue.dequeue() {
        let folder = scan_folder(&mut queue, &item.source, &item.destination, "run", &KeepAll)
            .expect("scan succeeds");
        visited.push(folder.source.clone());
    }

    assert_eq!(visited.len(), 4);
    assert_eq!(visited[0], root);
    // Both depth-1 folders precede the only depth-2 folder.
    assert_eq!(visited[3], root.join("a/deep"));
    assert!(visited[1..3].contains(&root.join("a")));
    assert!(visited[1..3].contains(&root.join("b")));
}

#[test]
fn folder_script_path_joins_name_onto_source() {
    let folder = Folder::new("/library", "/out/library", "run");
    assert_eq!(folder.script_path(), PathBuf::from("/library/run"));
}
