use crate::artifacts::branch::{INVALID_BRANCH_NAME_REGEX, SYMREF_REGEX};
use crate::errors::RepositoryError;
use anyhow::Context;

pub const REF_PREFIX: &str = "refs/heads/";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            return Err(RepositoryError::InvalidBranchName(name).into());
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .with_context(|| format!("invalid branch name regex: {INVALID_BRANCH_NAME_REGEX}"))?;

        if re.is_match(&name) {
            Err(RepositoryError::InvalidBranchName(name).into())
        } else {
            Ok(Self(name))
        }
    }

    /// Parse the content of the HEAD file (`ref: refs/heads/<name>`)
    pub fn try_parse_symref(content: &str) -> anyhow::Result<Self> {
        let re = regex::Regex::new(SYMREF_REGEX)
            .with_context(|| format!("invalid symref regex: {SYMREF_REGEX}"))?;
        let captures = re
            .captures(content.trim())
            .with_context(|| format!("HEAD does not name a branch: {:?}", content.trim()))?;

        Self::try_parse(captures[1].to_string())
    }

    /// The HEAD file content pointing at this branch
    pub fn to_symref(&self) -> String {
        format!("ref: {REF_PREFIX}{}", self.0)
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
