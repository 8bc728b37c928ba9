//! Version-control initialization for the generated project.

use std::path::Path;

use git2::{IndexAddOption, Oid, Repository, Signature};
use log::debug;

use crate::error::Result;
use crate::variables::{value_as_text, Variables, GITHUB_REPO_KEY};

/// Name and e-mail used as author and committer of the initial commit.
pub const AUTHOR_NAME: &str = "Bison Template";
pub const AUTHOR_EMAIL: &str = "hello@echobind.com";

pub const COMMIT_MESSAGE: &str = "Initial commit from Bison Template!";

/// Name of the remote registered when a repository URL was given.
pub const REMOTE_NAME: &str = "origin";

/// Creates a repository in `project_dir` holding every file as one root commit.
///
/// Steps, each requiring the previous one:
/// 1. initialize an empty repository
/// 2. stage every path and write the tree
/// 3. register `origin` when `githubRepo` is set
/// 4. commit the tree on `HEAD` with no parents
///
/// An empty `githubRepo` is still considered set; libgit2 then rejects it.
/// Nothing is rolled back when a step fails.
pub fn init_repository<P: AsRef<Path>>(project_dir: P, variables: &Variables) -> Result<Oid> {
    let project_dir = project_dir.as_ref();

    debug!("Initializing repository in {}", project_dir.display());
    let repo = Repository::init(project_dir)?;

    let mut index = repo.index()?;
    index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
    index.write()?;
    let tree_id = index.write_tree()?;
    debug!("Staged {} entries, tree {}", index.len(), tree_id);

    if let Some(url) = remote_url(variables) {
        debug!("Adding remote '{REMOTE_NAME}' -> {url}");
        repo.remote(REMOTE_NAME, &url)?;
    }

    let tree = repo.find_tree(tree_id)?;
    let author = Signature::now(AUTHOR_NAME, AUTHOR_EMAIL)?;
    let committer = Signature::now(AUTHOR_NAME, AUTHOR_EMAIL)?;

    // First commit: there is no HEAD yet, hence no parents.
    let commit_id = repo.commit(Some("HEAD"), &author, &committer, COMMIT_MESSAGE, &tree, &[])?;
    debug!("Created initial commit {commit_id}");

    Ok(commit_id)
}

fn remote_url(variables: &Variables) -> Option<String> {
    match variables.get(GITHUB_REPO_KEY) {
        None | Some(serde_json::Value::Null) => None,
        Some(value) => Some(value_as_text(value)),
    }
}
