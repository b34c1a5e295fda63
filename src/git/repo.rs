// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{GitError, MsgError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::{Path, PathBuf};

use super::history::HistoryProvider;

/// Wrapper around git2::Repository answering history queries.
pub struct Repository {
    inner: Git2Repo,
    workdir: PathBuf,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            MsgError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                MsgError::Git(GitError::NotARepository)
            } else {
                MsgError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| {
                MsgError::Git(GitError::OpenFailed {
                    message: "Repository has no working directory (bare repository)".to_string(),
                })
            })?
            .to_path_buf();

        Ok(Self {
            inner: repo,
            workdir,
        })
    }

    /// Get the working directory path.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Resolve a revision (SHA prefix, branch name, `HEAD`) to a commit id.
    fn resolve_commit(&self, revision: &str) -> std::result::Result<Oid, GitError> {
        let obj = self
            .inner
            .revparse_single(revision)
            .map_err(|e| GitError::InvalidReference {
                reference: format!("{}: {}", revision, e.message()),
            })?;

        let commit = obj.peel_to_commit().map_err(|e| GitError::InvalidReference {
            reference: format!("{}: {}", revision, e.message()),
        })?;

        Ok(commit.id())
    }
}

impl HistoryProvider for Repository {
    fn current_branch_name(&self) -> std::result::Result<String, GitError> {
        let head = self.inner.head().map_err(|e| GitError::BranchFailed {
            message: e.message().to_string(),
        })?;

        if !head.is_branch() {
            return Ok("HEAD".to_string());
        }

        head.shorthand()
            .map(str::to_string)
            .ok_or_else(|| GitError::BranchFailed {
                message: "Invalid branch name encoding".to_string(),
            })
    }

    fn merge_base(&self, one: &str, two: &str) -> std::result::Result<Option<String>, GitError> {
        let one = self.resolve_commit(one)?;
        let two = self.resolve_commit(two)?;

        match self.inner.merge_base(one, two) {
            Ok(oid) => Ok(Some(oid.to_string())),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(GitError::CommandFailed {
                command: "merge-base".to_string(),
                message: e.message().to_string(),
            }),
        }
    }

    fn commit_count_excluding(&self, base: &str, head: &str) -> std::result::Result<usize, GitError> {
        let base = self.resolve_commit(base)?;
        let head = self.resolve_commit(head)?;

        let walk_error = |e: git2::Error| GitError::CommandFailed {
            command: "rev-list".to_string(),
            message: e.message().to_string(),
        };

        let mut revwalk = self.inner.revwalk().map_err(walk_error)?;
        revwalk.push(head).map_err(walk_error)?;
        revwalk.hide(base).map_err(walk_error)?;

        let mut count = 0;
        for oid in revwalk {
            oid.map_err(walk_error)?;
            count += 1;
        }
        Ok(count)
    }

    fn classify_object(&self, id: &str) -> std::result::Result<String, GitError> {
        let obj = self
            .inner
            .revparse_single(id)
            .map_err(|e| GitError::InvalidReference {
                reference: format!("{}: {}", id, e.message()),
            })?;

        obj.kind()
            .map(|kind| kind.str().to_string())
            .ok_or_else(|| GitError::InvalidReference {
                reference: format!("{}: unknown object type", id),
            })
    }

    fn is_ancestor(&self, candidate: &str, reference: &str) -> std::result::Result<bool, GitError> {
        let candidate = self.resolve_commit(candidate)?;
        let reference = self.resolve_commit(reference)?;

        if candidate == reference {
            return Ok(true);
        }

        self.inner
            .graph_descendant_of(reference, candidate)
            .map_err(|e| GitError::CommandFailed {
                command: "merge-base --is-ancestor".to_string(),
                message: e.message().to_string(),
            })
    }
}

/// Open the repository from the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}

/// Locate the work tree root of the repository containing the current
/// directory.
pub fn find_repo_root() -> Result<PathBuf> {
    let repo = Repository::open_current()?;
    Ok(repo.workdir().to_path_buf())
}
