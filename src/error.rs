use crate::level::BumpLevel;

/// Errors that can occur when bumping a version.
///
/// The first three variants are validation failures of the raw inputs and are checked in
/// declaration order. The remaining ones come from the version string's contents.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum BumpError {
    /// The version argument was absent or empty.
    #[error("version is not a string")]
    InvalidVersion,

    /// The bump argument was not one of the known bump levels.
    #[error("bump must be either 'major', 'minor', 'patch', 'revision', or 'none'")]
    InvalidBumpKind {
        /// The rejected bump argument.
        value: String,
    },

    /// The format argument was supplied but was not one of the known formats.
    #[error("format must be either 'a.b.c' or 'a.b.c.d'")]
    InvalidFormat {
        /// The rejected format argument.
        value: String,
    },

    /// A dot-separated part of the version string is not a non-negative integer. Every part is
    /// checked, including those past the fourth.
    #[error("version component '{part}' at position {position} is not a non-negative integer")]
    InvalidComponent {
        /// The offending part, verbatim.
        part: String,
        /// Zero-based position of the part in the version string.
        position: usize,
    },

    /// The component that should be incremented can't grow any further.
    #[error("cannot bump {level}: component is already at its maximum value")]
    ComponentOverflow {
        /// The level whose component overflowed.
        level: BumpLevel,
    },
}
