//! Domain logic - pure release rules independent of git invocation

pub mod changelog;
pub mod tag;
pub mod version;

pub use changelog::{Annotation, ChangeLog};
pub use tag::{parse_decorations, TagReference};
pub use version::{Version, VersionBump};
