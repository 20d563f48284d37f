// tests/integration_test.rs
mod common;

use std::sync::Arc;

use bumptag::analyzer::{ChangeLogBuilder, RemoteInferer, TagResolver};
use bumptag::cli::orchestration::{run_bump_workflow, BumpWorkflowArgs, WorkflowResult};
use bumptag::config::Settings;
use bumptag::domain::{ChangeLog, Version, VersionBump};
use bumptag::git::{ConfigScope, VersionControl};
use bumptag::guard::{SignatureGuard, SHOW_SIGNATURE_KEY};
use bumptag::publisher::TagPublisher;
use bumptag::BumptagError;
use common::Fixture;

#[test]
fn test_resolve_highest_tag_in_real_history() {
    let mut fx = Fixture::new();
    for tag in ["v1.0.0", "not_a_version", "v2.0.0", "v2.0.1", "v2.1.0", "v3.0.0"] {
        fx.commit(&format!("release {}", tag));
        fx.tag(tag);
    }
    fx.commit("head");
    fx.tag("v3.0.1");
    fx.tag("v3.1.0");

    let git = fx.git();
    let resolved = TagResolver::new(&git, "v").resolve().unwrap();
    assert_eq!(resolved.version, Version::new(3, 1, 0));
    assert_eq!(resolved.name, "v3.1.0");
}

#[test]
fn test_resolve_without_tags() {
    let mut fx = Fixture::new();
    fx.commit("initial");
    let git = fx.git();
    let resolved = TagResolver::new(&git, "v").resolve().unwrap();
    assert!(resolved.is_none());
    assert_eq!(resolved.version, Version::zero());
}

#[test]
fn test_changelog_since_tag_newest_first() {
    let mut fx = Fixture::new();
    fx.commit("first");
    fx.tag("v1.0.0");
    fx.commit("second");
    fx.commit("third");

    let git = fx.git();
    let ChangeLog::Commits(lines) = ChangeLogBuilder::new(&git).build("v1.0.0").unwrap() else {
        panic!("expected commit changelog");
    };
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" third"), "got {:?}", lines);
    assert!(lines[1].ends_with(" second"), "got {:?}", lines);
}

#[test]
fn test_changelog_skips_merge_commits() {
    let mut fx = Fixture::new();
    let base = fx.commit("base");
    fx.tag("v1.0.0");
    let side = fx.side_commit(base, "side work");
    fx.commit("main work");
    fx.merge(side, "Merge side work");

    let git = fx.git();
    let ChangeLog::Commits(lines) = ChangeLogBuilder::new(&git).build("v1.0.0").unwrap() else {
        panic!("expected commit changelog");
    };
    assert_eq!(lines.len(), 2, "got {:?}", lines);
    assert!(lines.iter().any(|l| l.ends_with(" side work")));
    assert!(lines.iter().any(|l| l.ends_with(" main work")));
    assert!(!lines.iter().any(|l| l.contains("Merge")));
}

#[test]
fn test_changelog_whole_history() {
    let mut fx = Fixture::new();
    fx.commit("first");
    fx.commit("second");
    let git = fx.git();
    let log = ChangeLogBuilder::new(&git).build("").unwrap();
    assert!(matches!(log, ChangeLog::Commits(ref lines) if lines.len() == 2));
}

#[test]
fn test_changelog_empty_range() {
    let mut fx = Fixture::new();
    fx.commit("first");
    fx.tag("v1.0.0");
    let git = fx.git();
    assert!(ChangeLogBuilder::new(&git).build("v1.0.0").unwrap().is_empty());
}

#[test]
fn test_remote_inference() {
    let mut fx = Fixture::new();
    fx.commit("first");
    let git = fx.git();
    assert!(matches!(
        RemoteInferer::new(&git).resolve(),
        Err(BumptagError::RemoteNotFound)
    ));

    let _remote = fx.add_tracked_remote();
    assert_eq!(RemoteInferer::new(&git).resolve().unwrap(), "origin");
}

#[test]
fn test_create_show_and_push_tag() {
    let mut fx = Fixture::new();
    fx.commit("first");
    let remote = fx.add_tracked_remote();
    let git = fx.git();

    let publisher = TagPublisher::new(&git).unwrap();
    assert!(!publisher.signs());
    let annotation = bumptag::domain::Annotation::new(
        "v0.1.0",
        &ChangeLog::Commits(vec!["abc1234 first".to_string()]),
    );
    publisher.create_tag("v0.1.0", &annotation).unwrap();

    let message = fx.tag_message("v0.1.0").expect("annotated tag");
    assert!(message.starts_with("Bump version v0.1.0\n\n* abc1234 first"));
    assert!(publisher.show("v0.1.0").unwrap().contains("Bump version v0.1.0"));

    publisher.push_tag("origin", "v0.1.0").unwrap();
    let bare = git2::Repository::open_bare(remote.path()).unwrap();
    assert!(bare.find_reference("refs/tags/v0.1.0").is_ok());
}

#[test]
fn test_duplicate_tag_is_command_error() {
    let mut fx = Fixture::new();
    fx.commit("first");
    fx.tag("v1.0.0");
    let git = fx.git();
    let err = git.create_tag("v1.0.0", "Bump version v1.0.0\n", false).unwrap_err();
    match err {
        BumptagError::Command { command, message } => {
            assert_eq!(command, "git tag --cleanup=verbatim -F- v1.0.0");
            assert!(message.contains("already exists"), "got {}", message);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_config_get_unset_key() {
    let mut fx = Fixture::new();
    fx.commit("first");
    let git = fx.git();
    assert_eq!(
        git.config_get("bumptag.missing", ConfigScope::Local).unwrap(),
        None
    );
    assert_eq!(
        git.config_get("user.name", ConfigScope::Effective).unwrap(),
        Some("Test Author".to_string())
    );
}

#[test]
fn test_guard_restores_real_configuration() {
    let mut fx = Fixture::new();
    fx.commit("first");
    fx.set_local_config(SHOW_SIGNATURE_KEY, "true");

    let git = Arc::new(fx.git());
    let guard = SignatureGuard::arm(Arc::clone(&git)).unwrap();
    assert_eq!(fx.local_config(SHOW_SIGNATURE_KEY).as_deref(), Some("false"));
    guard.disarm().unwrap();
    assert_eq!(fx.local_config(SHOW_SIGNATURE_KEY).as_deref(), Some("true"));
}

#[test]
fn test_guard_unsets_when_previously_unset() {
    let mut fx = Fixture::new();
    fx.commit("first");
    let git = Arc::new(fx.git());
    {
        let _guard = SignatureGuard::arm(Arc::clone(&git)).unwrap();
        assert_eq!(fx.local_config(SHOW_SIGNATURE_KEY).as_deref(), Some("false"));
    }
    assert_eq!(fx.local_config(SHOW_SIGNATURE_KEY), None);
}

#[test]
fn test_full_workflow_with_push() {
    let mut fx = Fixture::new();
    fx.commit("first");
    fx.tag("v1.1.1");
    fx.commit("Add silent mode");
    let remote = fx.add_tracked_remote();
    let git = fx.git();

    let args = BumpWorkflowArgs {
        bump: Some(VersionBump::Major),
        auto_push: true,
        ..Default::default()
    };
    let mut out = Vec::new();
    let result = run_bump_workflow(&git, &args, &Settings::default(), &mut out).unwrap();
    assert_eq!(
        result,
        WorkflowResult::Created {
            tag: "v2.0.0".to_string(),
            pushed_to: Some("origin".to_string())
        }
    );

    let message = fx.tag_message("v2.0.0").unwrap();
    assert!(message.starts_with("Bump version v2.0.0\n\n* "));
    assert!(message.contains("Add silent mode"));
    assert!(!message.contains(" first"));

    let stdout = String::from_utf8(out).unwrap();
    assert!(stdout.contains("The tag 'v2.0.0' has been pushed to the remote 'origin'"));
    let bare = git2::Repository::open_bare(remote.path()).unwrap();
    assert!(bare.find_reference("refs/tags/v2.0.0").is_ok());
}

#[test]
fn test_malformed_explicit_version_leaves_no_tag() {
    let mut fx = Fixture::new();
    fx.commit("first");
    let git = fx.git();
    let args = BumpWorkflowArgs {
        tag_name: Some("v3.0".to_string()),
        ..Default::default()
    };
    let mut out = Vec::new();
    let err = run_bump_workflow(&git, &args, &Settings::default(), &mut out).unwrap_err();
    assert!(matches!(err, BumptagError::Parse(_)));
    assert!(fx.repo.tag_names(None).unwrap().is_empty());
}

#[test]
fn test_supplied_changelog_keeps_heading_lines() {
    let mut fx = Fixture::new();
    fx.commit("first");
    fx.tag("v1.0.0");
    fx.commit("second");
    let git = fx.git();

    let args = BumpWorkflowArgs {
        changelog: Some("## Highlights\n- faster\n# Breaking\n- none".to_string()),
        silent: true,
        ..Default::default()
    };
    let mut out = Vec::new();
    run_bump_workflow(&git, &args, &Settings::default(), &mut out).unwrap();

    let message = fx.tag_message("v1.1.0").unwrap();
    assert!(
        message.starts_with("Bump version v1.1.0\n\n## Highlights\n- faster\n# Breaking\n- none"),
        "got {:?}",
        message
    );
}

#[test]
fn test_remote_inference_ignores_color_setting() {
    let mut fx = Fixture::new();
    fx.commit("first");
    let _remote = fx.add_tracked_remote();
    fx.set_local_config("color.ui", "always");
    fx.set_local_config("color.branch", "always");

    let git = fx.git();
    assert_eq!(RemoteInferer::new(&git).resolve().unwrap(), "origin");
}
