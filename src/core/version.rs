use semver::Version;

use crate::utils::error::{FormatError, Result};

/// `true` when version `this` is strictly newer than `that`.
///
/// Accepts one to four numeric components (`major[.minor[.patch[.revision]]]`);
/// missing components count as zero.
pub fn version_is_greater(this: &str, that: &str) -> Result<bool> {
    Ok(parse_version(this)? > parse_version(that)?)
}

/// Semver core plus the fourth `revision` component used by release builds.
fn parse_version(value: &str) -> Result<(Version, u64)> {
    let trimmed = value.trim();
    let (base, suffix) = trimmed.split_at(trimmed.find(['-', '+']).unwrap_or(trimmed.len()));
    let invalid = |reason: String| FormatError::InvalidVersion {
        value: value.to_string(),
        reason,
    };

    let components: Vec<&str> = base.split('.').collect();
    let (semver_base, revision) = match components.len() {
        1 => (format!("{}.0.0", base), 0),
        2 => (format!("{}.0", base), 0),
        3 => (base.to_string(), 0),
        4 => {
            let revision = components[3]
                .parse::<u64>()
                .map_err(|e| invalid(format!("revision '{}': {}", components[3], e)))?;
            (components[..3].join("."), revision)
        }
        n => return Err(invalid(format!("expected at most 4 components, found {}", n))),
    };

    let version = Version::parse(&format!("{}{}", semver_base, suffix))
        .map_err(|e| invalid(e.to_string()))?;
    Ok((version, revision))
}
