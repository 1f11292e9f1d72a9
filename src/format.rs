use crate::{error::BumpError, level::BumpLevel};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// A Format describes how many components a rendered version has.
///
/// Formats are written as a pattern of placeholder letters, `a.b.c` or `a.b.c.d`.
///
/// ```
/// use verbump::Format;
///
/// let format: Format = "a.b.c.d".parse().unwrap();
/// assert_eq!(format, Format::FourPart);
/// assert_eq!(format.component_count(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `major.minor.patch`
    ThreePart,
    /// `major.minor.patch.revision`
    FourPart,
}

impl Format {
    /// Every format.
    pub const ALL: [Format; 2] = [Format::ThreePart, Format::FourPart];

    /// Returns the pattern that selects this format, e.g. `"a.b.c"`.
    pub fn pattern(&self) -> &'static str {
        match self {
            Format::ThreePart => "a.b.c",
            Format::FourPart => "a.b.c.d",
        }
    }

    /// Returns the number of dot-separated components this format renders.
    pub fn component_count(&self) -> usize {
        match self {
            Format::ThreePart => 3,
            Format::FourPart => 4,
        }
    }

    /// Picks a format when the caller didn't supply one.
    ///
    /// Bumping the revision, or starting from a version that already had four or more parts,
    /// gives [`Format::FourPart`]. Everything else gives [`Format::ThreePart`].
    ///
    /// ```
    /// use verbump::{BumpLevel, Format};
    ///
    /// assert_eq!(Format::infer(BumpLevel::Revision, 3), Format::FourPart);
    /// assert_eq!(Format::infer(BumpLevel::Patch, 4), Format::FourPart);
    /// assert_eq!(Format::infer(BumpLevel::Patch, 2), Format::ThreePart);
    /// ```
    pub fn infer(level: BumpLevel, part_count: usize) -> Self {
        if level == BumpLevel::Revision || part_count >= Format::FourPart.component_count() {
            Format::FourPart
        } else {
            Format::ThreePart
        }
    }
}

impl FromStr for Format {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.pattern() == s)
            .ok_or_else(|| BumpError::InvalidFormat {
                value: s.to_owned(),
            })
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rstest::rstest;

    #[rstest]
    #[case("a.b.c", Format::ThreePart)]
    #[case("a.b.c.d", Format::FourPart)]
    fn test_parse_ok(#[case] input: &str, #[case] expected: Format) {
        assert_eq!(Ok(expected), input.parse());
        assert_eq!(input, expected.to_string());
    }

    #[rstest]
    #[case("")]
    #[case("invalid")]
    #[case("a.b")]
    #[case("a.b.c.d.e")]
    #[case("A.B.C")]
    #[case("x.y.z")]
    fn test_parse_err(#[case] input: &str) {
        let err = input.parse::<Format>().unwrap_err();
        assert_eq!(
            BumpError::InvalidFormat {
                value: input.to_owned()
            },
            err
        );
        assert_eq!("format must be either 'a.b.c' or 'a.b.c.d'", err.to_string());
    }

    #[test]
    fn test_infer_revision_always_four_part() {
        for part_count in 1..=6 {
            assert_eq!(Format::FourPart, Format::infer(BumpLevel::Revision, part_count));
        }
    }

    #[test]
    fn test_infer_follows_part_count() {
        let non_revision = BumpLevel::ALL
            .into_iter()
            .filter(|level| *level != BumpLevel::Revision);

        for (level, part_count) in non_revision.cartesian_product(1..=6) {
            let expected = if part_count >= 4 {
                Format::FourPart
            } else {
                Format::ThreePart
            };
            assert_eq!(
                expected,
                Format::infer(level, part_count),
                "level {level}, {part_count} parts"
            );
        }
    }
}
