//! History analysis: latest tag, changelog, and upstream remote

pub mod changelog_builder;
pub mod remote;
pub mod tag_resolver;

pub use changelog_builder::ChangeLogBuilder;
pub use remote::RemoteInferer;
pub use tag_resolver::{ResolvedTag, TagResolver};
