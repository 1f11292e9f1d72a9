use crate::{error::BumpError, format::Format, level::BumpLevel, version::Version};

/// Bumps `version_str` by `level` and renders the result.
///
/// When `format` is `None`, it's inferred with [Format::infer] from `level` and the number of
/// parts in `version_str`. A given `format` always wins.
///
/// # Example
///
/// ```
/// use verbump::prelude::*;
///
/// assert_eq!("2.0.0", bump("1.2.3", BumpLevel::Major, None).unwrap());
/// assert_eq!("1.2.3.1", bump("1.2.3", BumpLevel::Revision, None).unwrap());
/// assert_eq!("2.0.0.0", bump("1.2.3", BumpLevel::Major, Some(Format::FourPart)).unwrap());
/// ```
///
/// # Errors
///
/// Returns whatever [Version::parse] or [Version::next] return.
pub fn bump(
    version_str: &str,
    level: BumpLevel,
    format: Option<Format>,
) -> Result<String, BumpError> {
    let current = Version::parse(version_str)?;
    let next = current.next(level)?;
    let format = format.unwrap_or_else(|| Format::infer(level, current.part_count()));
    Ok(next.render(format))
}

/// Like [bump], but takes the bump level and format as raw strings, the way they arrive from a
/// command line or CI inputs.
///
/// Inputs are checked in order, and the first failure wins: the version must be non-empty, then
/// the bump level must parse, then the format (if given) must parse. An empty `format` is treated
/// as absent.
///
/// ```
/// use verbump::prelude::*;
///
/// assert_eq!("1.2.4.0", bump_str("1.2.3", "patch", Some("a.b.c.d")).unwrap());
/// assert_eq!("1.2.4", bump_str("1.2.3", "patch", Some("")).unwrap());
/// assert_eq!(Err(BumpError::InvalidVersion), bump_str("", "bogus", Some("bogus")));
/// ```
///
/// # Errors
///
/// - [BumpError::InvalidVersion] if `version_str` is empty.
/// - [BumpError::InvalidBumpKind] if `level_str` isn't a known level.
/// - [BumpError::InvalidFormat] if `format_str` isn't a known format.
/// - Otherwise, whatever [bump] returns.
pub fn bump_str(
    version_str: &str,
    level_str: &str,
    format_str: Option<&str>,
) -> Result<String, BumpError> {
    if version_str.is_empty() {
        return Err(BumpError::InvalidVersion);
    }
    let level = level_str.parse::<BumpLevel>()?;
    let format = format_str
        .filter(|format_str| !format_str.is_empty())
        .map(str::parse::<Format>)
        .transpose()?;

    bump(version_str, level, format)
}
