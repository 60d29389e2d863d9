use rstest::rstest;
use yamlnav::document::tree::YamlFile;
use yamlnav::query::finder::find_all;
use yamlnav::query::suggestion::{complete, suggestions};

#[test]
fn test_suggestions_are_sorted_and_unique() {
    let file = YamlFile::parse("b:\n  - x\n  - y\na: 1\n---\na: 2\n").unwrap();
    let all = suggestions(&file);
    assert_eq!(all, vec!["a", "b", "b.0", "b.1"]);
}

#[rstest]
#[case("spec:\n  containers:\n    - name: web\n      ports: [80, 443]\n")]
#[case("? [a, b]\n: c\nd: 1\n")]
#[case("? |\n  blk\n: c\nd: [x]\n")]
#[case("? {k: v}\n: c\nk: 2\n")]
fn test_every_suggestion_finds_a_node(#[case] source: &str) {
    let file = YamlFile::parse(source).unwrap();
    let all = suggestions(&file);
    assert!(!all.is_empty());
    for path in all {
        assert!(!find_all(&file, &path).is_empty(), "{path} found nothing");
    }
}

#[test]
fn test_complete_extends_prefix() {
    let file = YamlFile::parse("spec:\n  containers:\n    - name: web\n").unwrap();
    let all = suggestions(&file);
    assert_eq!(
        complete(&all, "spec.c"),
        vec!["spec.containers", "spec.containers.0", "spec.containers.0.name"]
    );
    assert!(complete(&all, "").is_empty());
    assert!(complete(&all, "nope").is_empty());
}
