use bison::report::{print_post_install, render_post_install};
use bison::variables::{Answers, Variables};
use serde_json::json;

fn variables(value: serde_json::Value) -> Variables {
    let answers: Answers = serde_json::from_value(value).unwrap();
    Variables::build(&answers, "1.0.0")
}

#[test]
fn test_mentions_project_and_version() {
    let text = render_post_install(&variables(json!({"name": "My App"}))).unwrap();

    assert!(text.contains("my-app"));
    assert!(text.contains("1.0.0"));
    assert!(!text.contains("git push"));
}

#[test]
fn test_mentions_test_command_only_with_tests() {
    let without = render_post_install(&variables(json!({"name": "a", "tests": false}))).unwrap();
    assert!(!without.contains("yarn test"));
    assert!(without.contains("yarn build"));

    let missing = render_post_install(&variables(json!({"name": "a"}))).unwrap();
    assert!(!missing.contains("yarn test"));

    let with = render_post_install(&variables(json!({"name": "a", "tests": true}))).unwrap();
    assert!(with.contains("yarn test"));
    assert!(with.contains("Runs the test suites."));
}

#[test]
fn test_mentions_remote_when_given() {
    let text = render_post_install(&variables(json!({
        "name": "a",
        "githubRepo": "https://example.com/r.git"
    })))
    .unwrap();

    assert!(text.contains("https://example.com/r.git"));
    assert!(text.contains("git push"));
}

#[test]
fn test_writes_to_stream() {
    let mut out = Vec::new();
    print_post_install(&variables(json!({"name": "a"})), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Happy hacking!"));
    assert!(text.ends_with('\n'));
}
