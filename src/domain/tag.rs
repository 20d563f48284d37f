use crate::domain::Version;

const TAG_MARKER: &str = "tag:";

/// A tag ref found in history, with its version when it parses as one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagReference {
    pub name: String,
    pub version: Option<Version>,
}

impl TagReference {
    /// Create a tag reference, parsing `name` against `prefix`
    pub fn new(name: impl Into<String>, prefix: &str) -> Self {
        let name = name.into();
        let version = Version::parse(&name, prefix).ok();
        TagReference { name, version }
    }
}

/// Parse `git log --pretty=%D` output into tag references.
///
/// Each line lists the refs decorating one commit, comma separated, e.g.
/// `HEAD -> master, tag: v3.1.0, tag: v3.0.1, origin/master`. Only entries
/// carrying the `tag:` marker are returned, in the order they appear.
pub fn parse_decorations(output: &str, prefix: &str) -> Vec<TagReference> {
    output
        .lines()
        .flat_map(|line| line.split(','))
        .filter_map(|entry| entry.trim().strip_prefix(TAG_MARKER))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| TagReference::new(name, prefix))
        .collect()
}
