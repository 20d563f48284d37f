//! Main workflow orchestration logic
//!
//! Resolution, bump, changelog, tag creation and push run strictly in
//! sequence; each step needs the previous one's result. Keeping the
//! sequence here, apart from `main.rs`, lets it run against any
//! [VersionControl] and any output sink.

use std::io::Write;

use tracing::info;

use crate::analyzer::{ChangeLogBuilder, RemoteInferer, TagResolver};
use crate::boundary::BoundaryWarning;
use crate::config::Settings;
use crate::domain::{Annotation, VersionBump};
use crate::editor;
use crate::error::Result;
use crate::git::VersionControl;
use crate::publisher::TagPublisher;
use crate::ui;

/// Arguments for the bump workflow
///
/// Mirrors the CLI flags in a form that does not depend on clap, so the
/// workflow can be driven programmatically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Explicit version to tag instead of bumping
    pub tag_name: Option<String>,

    /// Requested bump; `None` uses the configured default
    pub bump: Option<VersionBump>,

    /// Open the annotation in an editor before tagging
    pub edit: bool,

    /// Print the annotation and stop
    pub dry_run: bool,

    /// Skip the final tag display and push notice
    pub silent: bool,

    /// Push the new tag to the branch's upstream remote
    pub auto_push: bool,

    /// Print the latest tag name and stop
    pub find_tag: bool,

    /// Changelog text that replaces the commit history listing
    pub changelog: Option<String>,
}

/// Result of a successful workflow run
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowResult {
    /// `--find-tag`: the latest tag name (empty when there is none)
    LatestTag(String),

    /// Dry run: what would have been created
    DryRun { tag: String, annotation: String },

    /// A tag was created, and pushed when `pushed_to` is set
    Created {
        tag: String,
        pushed_to: Option<String>,
    },
}

/// Main bump workflow
///
/// Orchestrates the tagging process:
/// 1. Resolve the highest version tag in history
/// 2. Bump it, or take the explicit version
/// 3. Collect the changelog and compose the annotation
/// 4. Optionally edit it; stop here on a dry run
/// 5. Create the tag, optionally push it, then show it
///
/// Anything meant for scripts is written to `out`; progress goes to stderr.
pub fn run_bump_workflow<V, W>(
    vcs: &V,
    args: &BumpWorkflowArgs,
    settings: &Settings,
    out: &mut W,
) -> Result<WorkflowResult>
where
    V: VersionControl + ?Sized,
    W: Write,
{
    let prefix = settings.tag_prefix.as_str();
    let latest = TagResolver::new(vcs, prefix).resolve()?;

    if args.find_tag {
        writeln!(out, "{}", latest.name)?;
        return Ok(WorkflowResult::LatestTag(latest.name));
    }

    let mut version = latest.version.clone();
    match args.tag_name.as_deref() {
        Some(explicit) => version.set_explicit(explicit, prefix)?,
        None => version.bump(args.bump.unwrap_or(settings.default_bump))?,
    }
    let tag_name = version.to_tag_name(prefix);

    let changelog = ChangeLogBuilder::new(vcs)
        .with_supplied(args.changelog.as_deref())
        .build(&latest.name)?;

    if latest.is_none() {
        ui::display_boundary_warning(&BoundaryWarning::NoPreviousTag {
            new_tag: tag_name.clone(),
        });
    } else if changelog.is_empty() {
        ui::display_boundary_warning(&BoundaryWarning::NoNewCommits {
            latest_tag: latest.name.clone(),
        });
    }
    ui::display_proposed_tag((!latest.is_none()).then_some(latest.name.as_str()), &tag_name);

    let mut annotation = Annotation::new(&tag_name, &changelog);
    if args.edit {
        let editor = editor::editor_command(settings.editor.as_deref());
        annotation = editor::edit(&annotation, &editor)?;
    }

    if args.dry_run {
        writeln!(out, "{}", annotation)?;
        return Ok(WorkflowResult::DryRun {
            tag: tag_name,
            annotation: annotation.to_string(),
        });
    }

    let publisher = TagPublisher::new(vcs)?;
    publisher.create_tag(&tag_name, &annotation)?;
    ui::display_success(&format!("Created tag: {}", tag_name));

    let pushed_to = if args.auto_push {
        let remote = RemoteInferer::new(vcs).resolve()?;
        publisher.push_tag(&remote, &tag_name)?;
        if !args.silent {
            writeln!(out, "{}", ui::push_notice(&tag_name, &remote))?;
        }
        Some(remote)
    } else {
        None
    };

    if !args.silent {
        writeln!(out, "{}", publisher.show(&tag_name)?)?;
    }

    info!(tag = %tag_name, pushed_to = ?pushed_to, "workflow finished");
    Ok(WorkflowResult::Created {
        tag: tag_name,
        pushed_to,
    })
}
