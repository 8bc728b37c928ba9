use bison::ignore::{parse_bisonignore_file, IGNORE_FILE};
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_parse_bisonignore_file() {
    let temp_dir = TempDir::new().unwrap();
    let ignore_path = temp_dir.path().join(IGNORE_FILE);

    // Without .bisonignore only the defaults apply
    let glob_set = parse_bisonignore_file(&ignore_path, &[]).unwrap();
    assert!(glob_set.is_match(".DS_Store"));
    assert!(glob_set.is_match("src/.DS_Store"));
    assert!(glob_set.is_match(".git/HEAD"));
    assert!(glob_set.is_match("bison.yaml"));
    assert!(glob_set.is_match(IGNORE_FILE));
    assert!(!glob_set.is_match("package.json.j2"));

    let mut file = File::create(&ignore_path).unwrap();
    writeln!(file, "# editor files\n*.swp\n\nnode_modules").unwrap();

    let glob_set = parse_bisonignore_file(&ignore_path, &["*.log".to_string()]).unwrap();
    assert!(glob_set.is_match("notes.swp"));
    assert!(glob_set.is_match("node_modules"));
    assert!(glob_set.is_match("debug.log"));
    assert!(glob_set.is_match(".DS_Store"));
    assert!(!glob_set.is_match("# editor files"));
}

#[test]
fn test_invalid_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let result = parse_bisonignore_file(temp_dir.path().join(IGNORE_FILE), &["a[".to_string()]);
    assert!(matches!(result, Err(bison::error::Error::BisonIgnoreError(_))));
}
