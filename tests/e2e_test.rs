use git2::{Repository, Signature};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

use git_status_lines::{ChangeKind, Group, StatusReport};

/// Test fixture for a git repository
struct Fixture {
    dir: TempDir,
    repo: Repository,
}

impl Fixture {
    /// Create a new empty repo with deterministic config
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let repo = Repository::init(dir.path()).expect("Failed to init repo");

        // Pin the unborn branch so assertions don't depend on the host's
        // init.defaultBranch
        repo.set_head("refs/heads/master").unwrap();

        // Deterministic config
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();

        Self { dir, repo }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file to the repo
    fn write_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Stage a file
    fn stage_file(&self, name: &str) {
        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
    }

    /// Create a commit
    fn commit(&self, message: &str) {
        let sig = Signature::new(
            "Test User",
            "test@example.com",
            &git2::Time::new(1234567890, 0),
        )
        .unwrap();
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();

        if self.repo.head().is_ok() {
            let parent = self.repo.head().unwrap().peel_to_commit().unwrap();
            self.repo
                .commit(Some("HEAD"), &sig, &sig, message, &tree, &[&parent])
                .unwrap();
        } else {
            self.repo
                .commit(Some("HEAD"), &sig, &sig, message, &tree, &[])
                .unwrap();
        }
    }

    /// Point the current branch at a local upstream, avoiding any network
    fn track_local_upstream(&self, upstream: &str) {
        let mut config = self.repo.config().unwrap();
        config.set_str("branch.master.remote", ".").unwrap();
        config
            .set_str("branch.master.merge", &format!("refs/heads/{upstream}"))
            .unwrap();
    }

    /// Get real porcelain output with the branch header enabled
    fn git_status(&self) -> String {
        let output = Command::new("git")
            .args([
                "-C",
                self.path().to_str().unwrap(),
                "status",
                "--porcelain",
                "-b",
            ])
            .output()
            .expect("Failed to run git status");
        String::from_utf8(output.stdout).unwrap()
    }
}

#[test]
fn untracked_files_in_fresh_repo() {
    let fixture = Fixture::new();
    fixture.write_file("a.txt", "a\n");
    fixture.write_file("b.txt", "b\n");

    let report = StatusReport::parse(&fixture.git_status());

    // Unborn-branch header: "No commits yet on" for current git,
    // "Initial commit on" for old releases; both reduce to the name
    let branch = report.branch.expect("missing branch header");
    assert_eq!(branch.name, "master");
    assert_eq!((branch.ahead, branch.behind), (0, 0));

    assert_eq!(report.items.len(), 2);
    for item in &report.items {
        assert_eq!(item.group, Group::Untracked);
        assert_eq!(item.kind, ChangeKind::Untracked);
        assert_eq!(item.msg, " untracked");
    }
    assert_eq!(report.items[0].file, "a.txt");
    assert_eq!(report.items[1].file, "b.txt");
}

#[test]
fn staged_new_file_and_unstaged_modification() {
    let fixture = Fixture::new();
    fixture.write_file("a.txt", "original\n");
    fixture.stage_file("a.txt");
    fixture.commit("initial");

    fixture.write_file("b.txt", "new\n");
    fixture.stage_file("b.txt");
    fixture.write_file("a.txt", "changed\n");

    let report = StatusReport::parse(&fixture.git_status());

    let branch = report.branch.expect("missing branch header");
    assert_eq!(branch.name, "master");
    assert_eq!(branch.upstream, None);

    assert_eq!(report.items.len(), 2);

    let modified = report
        .items
        .iter()
        .find(|item| item.file == "a.txt")
        .expect("a.txt record");
    assert_eq!(modified.group, Group::Unstaged);
    assert_eq!(modified.kind, ChangeKind::Modified);
    assert_eq!(modified.msg, "  modified");

    let added = report
        .items
        .iter()
        .find(|item| item.file == "b.txt")
        .expect("b.txt record");
    assert_eq!(added.group, Group::Staged);
    assert_eq!(added.kind, ChangeKind::NewFile);
    assert_eq!(added.msg, "  new file");
}

#[test]
fn staged_then_modified_file_yields_two_records() {
    let fixture = Fixture::new();
    fixture.write_file("a.txt", "base\n");
    fixture.stage_file("a.txt");
    fixture.commit("initial");

    fixture.write_file("c.txt", "first version\n");
    fixture.stage_file("c.txt");
    fixture.write_file("c.txt", "first version\nsecond thought\n");

    let report = StatusReport::parse(&fixture.git_status());

    // One "AM" line, decomposed into staged-new-file then unstaged-modified
    let records: Vec<_> = report
        .items
        .iter()
        .filter(|item| item.file == "c.txt")
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].group, Group::Staged);
    assert_eq!(records[0].kind, ChangeKind::NewFile);
    assert_eq!(records[1].group, Group::Unstaged);
    assert_eq!(records[1].kind, ChangeKind::Modified);
}

#[test]
fn deleted_from_worktree() {
    let fixture = Fixture::new();
    fixture.write_file("a.txt", "content\n");
    fixture.stage_file("a.txt");
    fixture.commit("initial");

    fs::remove_file(fixture.path().join("a.txt")).unwrap();

    let report = StatusReport::parse(&fixture.git_status());

    assert_eq!(report.items.len(), 1);
    assert_eq!(report.items[0].file, "a.txt");
    assert_eq!(report.items[0].group, Group::Unstaged);
    assert_eq!(report.items[0].kind, ChangeKind::Deleted);
    assert_eq!(report.items[0].msg, "   deleted");
}

#[test]
fn ahead_of_local_upstream() {
    let fixture = Fixture::new();
    fixture.write_file("a.txt", "content\n");
    fixture.stage_file("a.txt");
    fixture.commit("initial");

    let head = fixture.repo.head().unwrap().peel_to_commit().unwrap();
    fixture.repo.branch("base", &head, false).unwrap();
    fixture.track_local_upstream("base");

    fixture.write_file("a.txt", "more content\n");
    fixture.stage_file("a.txt");
    fixture.commit("second");

    let report = StatusReport::parse(&fixture.git_status());

    let branch = report.branch.expect("missing branch header");
    assert_eq!(branch.name, "master");
    assert_eq!(branch.upstream.as_deref(), Some("base"));
    assert_eq!(branch.ahead, 1);
    assert_eq!(branch.behind, 0);
    assert_eq!(report.items.len(), 0);
}
