//! Version probe for the `op` binary.
//!
//! [`get_op_cli_version`] runs `op --version` and parses the reply into a
//! [`Version`]. A missing binary is reported as [`OnePasswordError::CliNotFound`]
//! rather than a raw IO error, so callers can tell the user to install the CLI.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io;
use std::str::FromStr;

use crate::config::DEFAULT_PROGRAM;
use crate::error::{OnePasswordError, Result};
use crate::subprocess::{self, Runner, SystemRunner};

/// A parsed CLI version, comparable with the usual release ordering.
///
/// Accepts dot-separated numeric release segments with an optional
/// pre-release tag (`2.24.0-beta.01`, `2.0.0b1`, `2.1rc2`) and an optional
/// `+local` suffix. Trailing zero segments are insignificant, so `2.23`
/// equals `2.23.0`. A local suffix sorts after the bare release; between two
/// suffixes, numeric segments compare as numbers and beat alphanumeric ones.
///
/// Narrower than PEP 440: epochs (`1!2.0`), post-releases (`2.0.post1`) and
/// dev releases (`2.0.0.dev1`) are rejected with
/// [`OnePasswordError::InvalidVersion`]. The `op` CLI does not publish such
/// versions.
#[derive(Debug, Clone)]
pub struct Version {
    text: String,
    release: Vec<u64>,
    pre: Option<PreRelease>,
    local: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreReleaseKind {
    Alpha,
    Beta,
    Rc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PreRelease {
    pub kind: PreReleaseKind,
    pub number: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum LocalSegment {
    Alpha(String),
    Num(u64),
}

impl Version {
    /// Release segments as written, e.g. `[2, 23, 0]`.
    pub fn release(&self) -> &[u64] {
        &self.release
    }

    pub fn major(&self) -> u64 {
        self.release.first().copied().unwrap_or(0)
    }

    pub fn minor(&self) -> u64 {
        self.release.get(1).copied().unwrap_or(0)
    }

    pub fn patch(&self) -> u64 {
        self.release.get(2).copied().unwrap_or(0)
    }

    pub fn pre(&self) -> Option<PreRelease> {
        self.pre
    }

    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }

    pub fn local(&self) -> Option<&str> {
        self.local.as_deref()
    }

    fn local_key(&self) -> Option<Vec<LocalSegment>> {
        self.local.as_deref().map(|local| {
            local
                .split(['.', '-', '_'])
                .map(|seg| match seg.parse::<u64>() {
                    Ok(n) => LocalSegment::Num(n),
                    Err(_) => LocalSegment::Alpha(seg.to_ascii_lowercase()),
                })
                .collect()
        })
    }

    fn significant_release(&self) -> &[u64] {
        let end = self
            .release
            .iter()
            .rposition(|&n| n != 0)
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.release[..end]
    }
}

impl FromStr for Version {
    type Err = OnePasswordError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || OnePasswordError::InvalidVersion(s.trim().to_string());

        let text = s.trim();
        let body = text
            .strip_prefix('v')
            .or_else(|| text.strip_prefix('V'))
            .unwrap_or(text);

        let (main, local) = match body.split_once('+') {
            Some((main, local)) => {
                if local.is_empty()
                    || !local
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_')
                {
                    return Err(invalid());
                }
                (main, Some(local.to_string()))
            }
            None => (body, None),
        };

        let split = main
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(main.len());
        let (mut release_str, rest) = main.split_at(split);
        if !rest.is_empty() {
            release_str = release_str.strip_suffix('.').unwrap_or(release_str);
        }
        if release_str.is_empty() {
            return Err(invalid());
        }

        let release = release_str
            .split('.')
            .map(|part| {
                if part.is_empty() {
                    return Err(invalid());
                }
                part.parse::<u64>().map_err(|_| invalid())
            })
            .collect::<Result<Vec<u64>>>()?;

        let pre = if rest.is_empty() {
            None
        } else {
            Some(parse_pre(rest).ok_or_else(invalid)?)
        };

        Ok(Self {
            text: text.to_string(),
            release,
            pre,
            local,
        })
    }
}

fn parse_pre(rest: &str) -> Option<PreRelease> {
    let rest = rest.trim_start_matches(['-', '_', '.']);
    let tag_end = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    let (tag, rest) = rest.split_at(tag_end);

    let kind = match tag.to_ascii_lowercase().as_str() {
        "a" | "alpha" => PreReleaseKind::Alpha,
        "b" | "beta" => PreReleaseKind::Beta,
        "c" | "rc" | "pre" | "preview" => PreReleaseKind::Rc,
        _ => return None,
    };

    let digits = rest
        .strip_prefix(['-', '_', '.'])
        .unwrap_or(rest);
    let number = if digits.is_empty() {
        0
    } else if digits.chars().all(|c| c.is_ascii_digit()) {
        digits.parse().ok()?
    } else {
        return None;
    };

    Some(PreRelease { kind, number })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.significant_release()
            .cmp(other.significant_release())
            .then_with(|| match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
            .then_with(|| self.local_key().cmp(&other.local_key()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_release().hash(state);
        self.pre.hash(state);
        self.local_key().hash(state);
    }
}

/// Probe the installed `op` binary for its version.
pub fn get_op_cli_version() -> Result<Version> {
    get_op_cli_version_with(&SystemRunner, DEFAULT_PROGRAM)
}

/// Probe `program --version` through `runner`.
pub fn get_op_cli_version_with<R: Runner + ?Sized>(runner: &R, program: &str) -> Result<Version> {
    let cmd = vec![program.to_string(), "--version".to_string()];

    let stdout = subprocess::run_cmd(runner, &cmd).map_err(|e| match e {
        OnePasswordError::Io(ref io_err) if io_err.kind() == io::ErrorKind::NotFound => {
            OnePasswordError::CliNotFound(format!(
                "Cannot find `{}`, do you have 1password-cli installed?",
                program
            ))
        }
        other => other,
    })?;

    let text = String::from_utf8(stdout).map_err(|e| {
        OnePasswordError::InvalidVersion(String::from_utf8_lossy(e.as_bytes()).trim().to_string())
    })?;
    let version: Version = text.parse()?;

    tracing::debug!(version = %version, "detected 1Password CLI");
    Ok(version)
}
