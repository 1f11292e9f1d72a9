use crate::{error::BumpError, format::Format, level::BumpLevel};

/// Number of component slots a [Version] always carries.
const SLOTS: usize = 4;

/// A Version holds the four numeric components of a dotted version string, `major`, `minor`,
/// `patch` and `revision`, along with how many parts the string it was parsed from had.
///
/// Components missing from the parsed string are zero. Versions can be [bumped](Version::next)
/// and [rendered](Version::render) in either [Format].
///
/// # Examples
///
/// ```
/// use verbump::prelude::*;
///
/// let cur = Version::parse("1.2").unwrap();
/// assert_eq!(cur.part_count(), 2);
///
/// let next = cur.next(BumpLevel::Revision).unwrap();
/// assert_eq!("1.2.0.1", next.render(Format::FourPart));
/// assert_eq!("1.2.0", next.render(Format::ThreePart));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    values: [u64; SLOTS],
    part_count: usize,
}

impl Version {
    /// Parses a dotted version string like `1.2.3` or `1.2.3.4`.
    ///
    /// Every dot-separated part must be made of ASCII digits only. Leading zeros are allowed but
    /// not kept. Parts past the fourth are validated and counted, but their values are dropped.
    ///
    /// # Errors
    ///
    /// - If `version_str` is empty, returns a [BumpError::InvalidVersion].
    /// - If any part is empty, contains something other than digits, or doesn't
    ///   fit in a `u64`, returns a [BumpError::InvalidComponent].
    pub fn parse(version_str: &str) -> Result<Self, BumpError> {
        if version_str.is_empty() {
            return Err(BumpError::InvalidVersion);
        }

        let mut values = [0; SLOTS];
        let mut part_count = 0;

        for (position, part) in version_str.split('.').enumerate() {
            let value = parse_component(part, position)?;
            if let Some(slot) = values.get_mut(position) {
                *slot = value;
            }
            part_count += 1;
        }

        Ok(Self { values, part_count })
    }

    /// The major component.
    pub fn major(&self) -> u64 {
        self.values[0]
    }

    /// The minor component.
    pub fn minor(&self) -> u64 {
        self.values[1]
    }

    /// The patch component.
    pub fn patch(&self) -> u64 {
        self.values[2]
    }

    /// The revision component.
    pub fn revision(&self) -> u64 {
        self.values[3]
    }

    /// Number of dot-separated parts in the string this version was parsed from.
    pub fn part_count(&self) -> usize {
        self.part_count
    }

    /// Returns a new version where the component of the given [BumpLevel] is incremented and all
    /// lesser components are reset to zero. Greater components are never touched.
    /// [BumpLevel::None] returns an identical version.
    ///
    /// The part count is carried over, so format inference on the result still reflects the
    /// string it was parsed from.
    ///
    /// # Example
    ///
    /// ```
    /// use verbump::prelude::*;
    ///
    /// let version = Version::parse("1.2.3.4").unwrap();
    /// let next = version.next(BumpLevel::Minor).unwrap();
    /// assert_eq!((1, 3, 0, 0), (next.major(), next.minor(), next.patch(), next.revision()));
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns a [BumpError::ComponentOverflow] if the component to increment is `u64::MAX`.
    pub fn next(&self, level: BumpLevel) -> Result<Self, BumpError> {
        let Some(index) = level.component_index() else {
            return Ok(*self);
        };

        let mut values = self.values;
        values[index] = values[index]
            .checked_add(1)
            .ok_or(BumpError::ComponentOverflow { level })?;
        values[index + 1..].fill(0);

        Ok(Self {
            values,
            part_count: self.part_count,
        })
    }

    /// Renders this version with as many components as `format` calls for.
    pub fn render(&self, format: Format) -> String {
        self.values[..format.component_count()]
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

fn parse_component(part: &str, position: usize) -> Result<u64, BumpError> {
    let invalid = || BumpError::InvalidComponent {
        part: part.to_owned(),
        position,
    };

    // u64::from_str also takes a leading `+`, which isn't a digit
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    part.parse().map_err(|_| invalid())
}
