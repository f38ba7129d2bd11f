use renumber_core::{
    apply_mapping, build_mapping, list_files, rename_operation, undo_operation, Direction,
    TransactionOptions,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch_all(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), name).unwrap();
    }
}

#[test]
fn full_flow_scan_map_rename_undo() {
    let temp_dir = TempDir::new().unwrap();
    touch_all(temp_dir.path(), &["b.txt", "a.png", "c"]);

    let options = TransactionOptions::default();
    let (outcome, mapping) =
        rename_operation(temp_dir.path(), "Vacation", false, false, &options).unwrap();

    assert_eq!(outcome.renamed, 3);
    assert!(!outcome.rolled_back);

    // Numbering follows the lexicographic scan order, not creation order.
    let pairs: Vec<(&str, &str)> = mapping
        .iter()
        .map(|p| (p.generated.as_str(), p.original.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Vacation 1", "a.png"),
            ("Vacation 2", "b.txt"),
            ("Vacation 3", "c"),
        ]
    );

    assert!(temp_dir.path().join("Vacation 1.png").exists());
    assert!(temp_dir.path().join("Vacation 2.txt").exists());
    assert!(temp_dir.path().join("Vacation 3").exists());

    let undo = undo_operation(temp_dir.path(), &mapping, &options).unwrap();
    assert_eq!(undo.reverted, 3);

    let restored = list_files(temp_dir.path()).unwrap();
    let names: Vec<_> = restored.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a.png", "b.txt", "c"]);
}

#[test]
fn the_same_mapping_instance_drives_both_directions() {
    let temp_dir = TempDir::new().unwrap();
    touch_all(temp_dir.path(), &["one.jpg", "two.jpg"]);

    let files = list_files(temp_dir.path()).unwrap();
    let mapping = build_mapping(&files, "Shot");
    let options = TransactionOptions::default();

    let forward =
        apply_mapping(temp_dir.path(), &mapping, Direction::Forward, &options).unwrap();
    let undo = apply_mapping(temp_dir.path(), &mapping, Direction::Undo, &options).unwrap();

    assert_eq!(forward.renamed, 2);
    assert_eq!(undo.renamed, 2);
    assert!(temp_dir.path().join("one.jpg").exists());
    assert!(temp_dir.path().join("two.jpg").exists());
}

#[test]
fn rollback_leaves_directory_in_original_state() {
    let temp_dir = TempDir::new().unwrap();
    touch_all(temp_dir.path(), &["real-1.txt", "real-2.txt"]);

    // Build the mapping from a stale snapshot containing three files that no
    // longer exist.
    let mut files = list_files(temp_dir.path()).unwrap();
    files.push(renumber_core::FileEntry::new("stale-1.txt"));
    files.push(renumber_core::FileEntry::new("stale-2.txt"));
    files.push(renumber_core::FileEntry::new("stale-3.txt"));
    let mapping = build_mapping(&files, "Num");

    let result = apply_mapping(
        temp_dir.path(),
        &mapping,
        Direction::Forward,
        &TransactionOptions::default(),
    )
    .unwrap();

    assert!(result.rolled_back);
    let names: Vec<_> = list_files(temp_dir.path())
        .unwrap()
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec!["real-1.txt", "real-2.txt"]);
}
