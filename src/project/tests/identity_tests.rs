//! Tests for root normalization, project identifiers and the dev-mode marker.

use crate::project::domain::{DevMode, ProjectError, ProjectId, ProjectRoot};
use camino::Utf8Path;
use rstest::rstest;
use std::collections::HashSet;

#[rstest]
#[case("/srv/app", "/srv/app")]
#[case("/srv/app/", "/srv/app")]
#[case("/srv/./app", "/srv/app")]
#[case("/srv/tmp/../app", "/srv/app")]
#[case("/..", "/")]
fn absolute_roots_are_normalized_lexically(#[case] input: &str, #[case] expected: &str) {
    let root = ProjectRoot::new(input).expect("valid root");
    assert_eq!(root.as_path(), Utf8Path::new(expected));
}

#[rstest]
fn relative_roots_become_absolute() {
    let root = ProjectRoot::new("some/project").expect("valid root");
    assert!(root.as_path().is_absolute());
    assert!(root.as_path().ends_with("some/project"));
}

#[rstest]
#[case("")]
#[case("  ")]
fn empty_root_is_rejected(#[case] input: &str) {
    assert_eq!(ProjectRoot::new(input), Err(ProjectError::EmptyRoot));
}

#[rstest]
fn project_id_is_sixteen_lowercase_hex_chars() {
    let root = ProjectRoot::new("/srv/app").expect("valid root");
    let id = ProjectId::for_root(&root);

    assert_eq!(id.as_str().len(), 16);
    assert!(
        id.as_str()
            .chars()
            .all(|ch| ch.is_ascii_hexdigit() && !ch.is_ascii_uppercase())
    );
}

#[rstest]
fn project_id_is_a_pure_function_of_the_normalized_path() {
    let first = ProjectRoot::new("/srv/app").expect("valid root");
    let second = ProjectRoot::new("/srv/other/../app/").expect("valid root");

    assert_eq!(ProjectId::for_root(&first), ProjectId::for_root(&second));
}

#[rstest]
fn distinct_paths_yield_distinct_ids() {
    let ids: HashSet<_> = (0..256)
        .map(|index| {
            let root = ProjectRoot::new(format!("/projects/p{index}")).expect("valid root");
            ProjectId::for_root(&root)
        })
        .collect();

    assert_eq!(ids.len(), 256);
}

#[rstest]
fn parse_round_trips_derived_ids() {
    let root = ProjectRoot::new("/srv/app").expect("valid root");
    let id = ProjectId::for_root(&root);

    assert_eq!(ProjectId::parse(id.as_str()), Ok(id));
}

#[rstest]
#[case("short")]
#[case("0123456789ABCDEF")]
#[case("0123456789abcdeg")]
#[case("0123456789abcdef0")]
fn parse_rejects_malformed_ids(#[case] input: &str) {
    assert!(matches!(
        ProjectId::parse(input),
        Err(ProjectError::InvalidProjectId(_))
    ));
}

#[rstest]
#[case(Some("1"), DevMode::Enabled)]
#[case(Some("true"), DevMode::Enabled)]
#[case(Some("YES"), DevMode::Enabled)]
#[case(Some(" on "), DevMode::Enabled)]
#[case(Some("0"), DevMode::Disabled)]
#[case(Some("false"), DevMode::Disabled)]
#[case(Some(""), DevMode::Disabled)]
#[case(None, DevMode::Disabled)]
fn dev_mode_marker_values(#[case] value: Option<&str>, #[case] expected: DevMode) {
    assert_eq!(DevMode::from_env_value(value), expected);
}
