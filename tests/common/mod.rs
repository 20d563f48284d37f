// Shared fixture: a throwaway repository built with git2
#![allow(dead_code)]

use bumptag::git::SystemGit;
use git2::{BranchType, ConfigLevel, Oid, Repository, Signature, Time};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const EPOCH: i64 = 1_600_000_000;

pub struct Fixture {
    pub dir: TempDir,
    pub repo: Repository,
    commits: i64,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        {
            let mut config = repo.config().unwrap().open_level(ConfigLevel::Local).unwrap();
            config.set_str("user.name", "Test Author").unwrap();
            config.set_str("user.email", "test@example.com").unwrap();
            config.set_bool("commit.gpgsign", false).unwrap();
            config.set_bool("tag.gpgSign", false).unwrap();
        }
        Fixture {
            dir,
            repo,
            commits: 0,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn git(&self) -> SystemGit {
        SystemGit::discover(self.path()).unwrap()
    }

    fn signature(&self) -> Signature<'static> {
        Signature::new(
            "Test Author",
            "test@example.com",
            &Time::new(EPOCH + self.commits * 60, 0),
        )
        .unwrap()
    }

    fn tree_with_new_file(&mut self, message: &str) -> Oid {
        let name = format!("commit-{}.txt", self.commits);
        fs::write(self.path().join(&name), message).unwrap();
        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(&name)).unwrap();
        index.write().unwrap();
        index.write_tree().unwrap()
    }

    /// Commit a new file on HEAD
    pub fn commit(&mut self, message: &str) -> Oid {
        self.commits += 1;
        let tree_id = self.tree_with_new_file(message);
        let tree = self.repo.find_tree(tree_id).unwrap();
        let sig = self.signature();
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<_> = parent.iter().collect();
        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    /// Commit on top of `parent` without moving HEAD
    pub fn side_commit(&mut self, parent: Oid, message: &str) -> Oid {
        self.commits += 1;
        let tree_id = self.tree_with_new_file(message);
        let tree = self.repo.find_tree(tree_id).unwrap();
        let sig = self.signature();
        let parent = self.repo.find_commit(parent).unwrap();
        self.repo
            .commit(None, &sig, &sig, message, &tree, &[&parent])
            .unwrap()
    }

    /// Merge `other` into HEAD with a merge commit
    pub fn merge(&mut self, other: Oid, message: &str) -> Oid {
        self.commits += 1;
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        let other = self.repo.find_commit(other).unwrap();
        let tree = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree).unwrap();
        let sig = self.signature();
        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &[&head, &other])
            .unwrap()
    }

    /// Lightweight tag at HEAD
    pub fn tag(&self, name: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo.tag_lightweight(name, head.as_object(), false).unwrap();
    }

    pub fn branch_name(&self) -> String {
        self.repo.head().unwrap().shorthand().unwrap().to_string()
    }

    /// Add `origin` pointing at a fresh bare repository and track it
    pub fn add_tracked_remote(&self) -> TempDir {
        let remote_dir = tempfile::tempdir().unwrap();
        Repository::init_bare(remote_dir.path()).unwrap();
        self.repo
            .remote("origin", remote_dir.path().to_str().unwrap())
            .unwrap();

        let branch = self.branch_name();
        let head = self.repo.head().unwrap().target().unwrap();
        self.repo
            .reference(
                &format!("refs/remotes/origin/{}", branch),
                head,
                true,
                "test upstream",
            )
            .unwrap();
        let mut local = self.repo.find_branch(&branch, BranchType::Local).unwrap();
        local
            .set_upstream(Some(&format!("origin/{}", branch)))
            .unwrap();
        remote_dir
    }

    pub fn local_config(&self, key: &str) -> Option<String> {
        let config = self.repo.config().unwrap().open_level(ConfigLevel::Local).unwrap();
        config.get_string(key).ok()
    }

    pub fn set_local_config(&self, key: &str, value: &str) {
        let mut config = self.repo.config().unwrap().open_level(ConfigLevel::Local).unwrap();
        config.set_str(key, value).unwrap();
    }

    /// Message of an annotated tag
    pub fn tag_message(&self, name: &str) -> Option<String> {
        let object = self.repo.revparse_single(&format!("refs/tags/{}", name)).ok()?;
        object.as_tag().and_then(|t| t.message()).map(str::to_string)
    }
}
