//! Command-line surface
//!
//! `Cli` is the clap definition; [orchestration] holds the workflow it drives.

pub mod orchestration;

use clap::{ArgGroup, Parser};

use crate::domain::VersionBump;
use orchestration::BumpWorkflowArgs;

/// Value of `--changelog` that reads the text from standard input
pub const STDIN_MARKER: &str = "-";

#[derive(Parser, Debug)]
#[command(
    name = "bumptag",
    version,
    about = "Create the next semantic-version tag with a changelog annotation"
)]
#[command(group(ArgGroup::new("bump").args(["major", "minor", "patch"]).multiple(false)))]
pub struct Cli {
    #[arg(
        value_name = "TAGNAME",
        conflicts_with = "bump",
        help = "Name of the tag to create, must be a semantic version (e.g. v1.2.3)"
    )]
    pub tag_name: Option<String>,

    #[arg(short, long, help = "Edit the annotation before tagging")]
    pub edit: bool,

    #[arg(short = 'r', long, help = "Print the annotation for the new tag and exit")]
    pub dry_run: bool,

    #[arg(short, long, help = "Do not show the created tag")]
    pub silent: bool,

    #[arg(short, long, help = "Push the created tag to the tracked remote")]
    pub auto_push: bool,

    #[arg(short, long, help = "Increment the MAJOR version")]
    pub major: bool,

    #[arg(short = 'n', long, help = "Increment the MINOR version (default)")]
    pub minor: bool,

    #[arg(short, long, help = "Increment the PATCH version")]
    pub patch: bool,

    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Use the file's text as the changelog ('-' reads stdin)"
    )]
    pub changelog: Option<String>,

    #[arg(long, value_name = "FILE", help = "Custom settings file path")]
    pub config: Option<String>,

    #[arg(short, long, help = "Log every git invocation")]
    pub verbose: bool,

    #[arg(long, help = "Show the latest tag and exit, useful for CI tools")]
    pub find_tag: bool,
}

impl Cli {
    /// The bump selected by flags, if any
    pub fn bump(&self) -> Option<VersionBump> {
        if self.major {
            Some(VersionBump::Major)
        } else if self.minor {
            Some(VersionBump::Minor)
        } else if self.patch {
            Some(VersionBump::Patch)
        } else {
            None
        }
    }

    /// Workflow arguments for these flags, with the changelog text already read
    pub fn workflow_args(&self, changelog: Option<String>) -> BumpWorkflowArgs {
        BumpWorkflowArgs {
            tag_name: self.tag_name.clone(),
            bump: self.bump(),
            edit: self.edit,
            dry_run: self.dry_run,
            silent: self.silent,
            auto_push: self.auto_push,
            find_tag: self.find_tag,
            changelog,
        }
    }
}
