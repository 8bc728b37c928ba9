use bison::variables::{Answers, Variables, BISON_VERSION, GITHUB_REPO_KEY};
use serde_json::json;

fn answers(value: serde_json::Value) -> Answers {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_name_is_normalized() {
    let vars = Variables::build(&answers(json!({"name": "My App"})), "1.2.3");

    assert_eq!(vars.name(), "my-app");
    assert_eq!(vars.get("name"), Some(&json!("my-app")));
    assert_eq!(vars.get("bisonVersion"), Some(&json!("1.2.3")));
    assert_eq!(vars.len(), 2);
}

#[test]
fn test_order_and_answers_are_kept() {
    let vars = Variables::build(
        &answers(json!({
            "githubRepo": "https://example.com/r.git",
            "name": "Shop Front",
            "tests": true
        })),
        BISON_VERSION,
    );

    let keys: Vec<&str> = vars.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["name", "bisonVersion", GITHUB_REPO_KEY, "tests"]);
    assert_eq!(vars.get("tests"), Some(&json!(true)));
    assert_eq!(vars.name(), "shop-front");
}

#[test]
fn test_answer_can_replace_version_but_not_name() {
    let vars = Variables::build(
        &answers(json!({"name": "A B", "bisonVersion": "0.0.1"})),
        "9.9.9",
    );
    assert_eq!(vars.name(), "a-b");
    assert_eq!(vars.get("bisonVersion"), Some(&json!("0.0.1")));
}

#[test]
fn test_to_context() {
    let vars = Variables::build(&answers(json!({"name": "x", "db": "postgres"})), "1.0.0");
    assert_eq!(
        vars.to_context(),
        json!({"name": "x", "bisonVersion": "1.0.0", "db": "postgres"})
    );
}

#[test]
fn test_serializes_as_flat_object() {
    let vars = Variables::build(&answers(json!({"name": "x"})), "1.0.0");
    let text = serde_json::to_string(&vars).unwrap();
    assert_eq!(text, r#"{"name":"x","bisonVersion":"1.0.0"}"#);
}
