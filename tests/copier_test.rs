use std::fs;
use std::path::{Path, PathBuf};

use bison::copier::{
    ensure_output_dir, is_jinja_template, is_rendered_path_valid, resolve_target_path, Copier,
};
use bison::error::Error;
use bison::ignore::{parse_bisonignore_file, IGNORE_FILE};
use bison::renderer::MiniJinjaRenderer;
use serde_json::json;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn copy(template: &Path, target: &Path, context: serde_json::Value) -> Vec<PathBuf> {
    let renderer = MiniJinjaRenderer::new();
    let ignored = parse_bisonignore_file(template.join(IGNORE_FILE), &[]).unwrap();
    Copier::new(&renderer, template, target, &ignored).copy(&context).unwrap()
}

#[test]
fn test_ensure_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    // Non-existent directory is created
    let new_dir = path.join("new_dir");
    assert!(ensure_output_dir(&new_dir, false).is_ok());
    assert!(new_dir.is_dir());

    // Existing but empty directory is fine
    assert!(ensure_output_dir(&new_dir, false).is_ok());

    // Existing non-empty directory needs force
    write(&new_dir, "file.txt", "x");
    assert!(matches!(
        ensure_output_dir(&new_dir, false),
        Err(Error::OutputDirectoryExistsError { .. })
    ));
    assert!(ensure_output_dir(&new_dir, true).is_ok());
}

#[test]
fn test_is_jinja_template() {
    assert!(is_jinja_template("template.html.j2"));
    assert!(is_jinja_template("file.txt.j2"));
    assert!(is_jinja_template(".env.j2"));
    assert!(!is_jinja_template("regular.html"));
    assert!(!is_jinja_template("file.j2txt"));
    assert!(!is_jinja_template("macro.j2"));
}

#[test]
fn test_resolve_target_path() {
    let (path, should_process) = resolve_target_path("template.html.j2", "output");
    assert_eq!(path, PathBuf::from("output/template.html"));
    assert!(should_process);

    let (path, should_process) = resolve_target_path("regular.txt", "output");
    assert_eq!(path, PathBuf::from("output/regular.txt"));
    assert!(!should_process);
}

#[test]
fn test_is_rendered_path_valid() {
    assert!(!is_rendered_path_valid(""));
    assert!(!is_rendered_path_valid("output//filename.txt"));
    assert!(!is_rendered_path_valid("/filename.txt"));
    assert!(!is_rendered_path_valid("../filename.txt"));
    assert!(!is_rendered_path_valid("output/../../filename.txt"));
    assert!(!is_rendered_path_valid("./filename.txt"));
    assert!(is_rendered_path_valid("..hidden/file.txt"));
    assert!(is_rendered_path_valid("filename.txt"));
    assert!(is_rendered_path_valid("output/filename.txt"));
}

#[test]
fn test_renders_paths_and_template_contents() {
    let template = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    write(template.path(), "package.json.j2", "{\"name\": \"{{ name }}\"}\n");
    write(template.path(), "src/{{ name }}/index.ts", "export const x = \"{{ name }}\";\n");
    write(template.path(), "README.md", "# {{ name }}\n");

    let written = copy(template.path(), target.path(), json!({"name": "my-app"}));

    assert_eq!(written.len(), 3);
    assert_eq!(
        fs::read_to_string(target.path().join("package.json")).unwrap(),
        "{\"name\": \"my-app\"}\n"
    );
    // Plain files are copied verbatim, even below rendered directories
    assert_eq!(
        fs::read_to_string(target.path().join("src/my-app/index.ts")).unwrap(),
        "export const x = \"{{ name }}\";\n"
    );
    assert_eq!(fs::read_to_string(target.path().join("README.md")).unwrap(), "# {{ name }}\n");
    assert!(!target.path().join("package.json.j2").exists());
}

#[test]
fn test_conditional_paths_and_ignored_files() {
    let template = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    write(template.path(), "{% if tests %}jest.config.js{% endif %}", "module.exports = {};\n");
    write(template.path(), "bison.yaml", "questions: {}\n");
    write(template.path(), IGNORE_FILE, "cache\n");
    write(template.path(), "cache/blob.bin", "x");
    write(template.path(), ".DS_Store", "x");
    write(template.path(), "keep.txt", "kept");

    copy(template.path(), target.path(), json!({"name": "a", "tests": false}));

    assert!(target.path().join("keep.txt").exists());
    assert!(!target.path().join("jest.config.js").exists());
    assert!(!target.path().join("bison.yaml").exists());
    assert!(!target.path().join(IGNORE_FILE).exists());
    assert!(!target.path().join("cache").exists());
    assert!(!target.path().join(".DS_Store").exists());

    let target = TempDir::new().unwrap();
    copy(template.path(), target.path(), json!({"name": "a", "tests": true}));
    assert!(target.path().join("jest.config.js").exists());
}

#[test]
fn test_plain_tree_is_copied_identically() {
    let template = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    write(template.path(), "a.txt", "alpha");
    write(template.path(), "nested/deeper/b.txt", "beta");
    fs::create_dir_all(template.path().join("empty")).unwrap();

    copy(template.path(), target.path(), json!({"name": "a"}));

    assert!(!dir_diff::is_different(template.path(), target.path()).unwrap());
}

#[test]
fn test_rendered_path_cannot_leave_target() {
    let template = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let target = workspace.path().join("app");
    write(template.path(), "{{ docs }}/escape.txt", "out");
    write(template.path(), "{{ docs }}/nested/inner.txt", "out");
    write(template.path(), "kept.txt", "in");

    let written = copy(template.path(), &target, json!({"name": "app", "docs": ".."}));

    assert_eq!(written, vec![target.join("kept.txt")]);
    assert!(!workspace.path().join("escape.txt").exists());
    assert!(!workspace.path().join("nested").exists());
    assert!(written.iter().all(|path| path.starts_with(&target)));
}

#[test]
fn test_render_error_aborts_copy() {
    let template = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    write(template.path(), "broken.txt.j2", "{% if %}");

    let renderer = MiniJinjaRenderer::new();
    let ignored = parse_bisonignore_file(template.path().join(IGNORE_FILE), &[]).unwrap();
    let result = Copier::new(&renderer, template.path(), target.path(), &ignored)
        .copy(&json!({"name": "a"}));

    assert!(matches!(result, Err(Error::MinijinjaError(_))));
}

#[test]
fn test_missing_template_dir() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");
    let renderer = MiniJinjaRenderer::new();
    let ignored = parse_bisonignore_file(missing.join(IGNORE_FILE), &[]).unwrap();

    let result = Copier::new(&renderer, &missing, temp_dir.path(), &ignored).copy(&json!({}));
    assert!(matches!(result, Err(Error::TemplateDoesNotExistsError { .. })));
}
