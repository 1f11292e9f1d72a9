use crate::error::BumpError;
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// The level of a version to bump, like `major`, `minor`, `patch`, or `revision`. `None` leaves
/// every component untouched.
///
/// ```
/// use verbump::BumpLevel;
///
/// let level: BumpLevel = "minor".parse().unwrap();
/// assert_eq!(level, BumpLevel::Minor);
/// assert!("MINOR".parse::<BumpLevel>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpLevel {
    /// The major level. Bumping it resets minor, patch and revision.
    Major,
    /// The minor level. Bumping it resets patch and revision.
    Minor,
    /// The patch level. Bumping it resets revision.
    Patch,
    /// The revision level, a fourth component after patch. Nothing is below it to reset.
    Revision,
    /// Changes nothing.
    None,
}

impl BumpLevel {
    /// Every level, from most to least significant, followed by [`BumpLevel::None`].
    pub const ALL: [BumpLevel; 5] = [
        BumpLevel::Major,
        BumpLevel::Minor,
        BumpLevel::Patch,
        BumpLevel::Revision,
        BumpLevel::None,
    ];

    /// Returns the name used to select this level, e.g. `"patch"`.
    pub fn name(&self) -> &'static str {
        match self {
            BumpLevel::Major => "major",
            BumpLevel::Minor => "minor",
            BumpLevel::Patch => "patch",
            BumpLevel::Revision => "revision",
            BumpLevel::None => "none",
        }
    }

    /// Index of the version component this level increments, or `None` for [`BumpLevel::None`].
    /// Every component after it gets reset.
    pub(crate) fn component_index(&self) -> Option<usize> {
        match self {
            BumpLevel::Major => Some(0),
            BumpLevel::Minor => Some(1),
            BumpLevel::Patch => Some(2),
            BumpLevel::Revision => Some(3),
            BumpLevel::None => None,
        }
    }
}

impl FromStr for BumpLevel {
    type Err = BumpError;

    /// Parses one of `major`, `minor`, `patch`, `revision` or `none`. Matching is exact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BumpLevel::ALL
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or_else(|| BumpError::InvalidBumpKind {
                value: s.to_owned(),
            })
    }
}

impl Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
