//! # verbump
//!
//! A library for bumping dotted, purely numeric versions like `1.2.3` or `1.2.3.4`.
//!
//! Versions have up to four components: *major*, *minor*, *patch* and *revision*. Bumping one of
//! them increments it and resets every lesser component to zero. The result is rendered with three
//! or four components, either as requested or inferred from the input.
//!
//! ## Examples
//!
//! Quickly get a next version:
//!
//! ```
//! use verbump::prelude::*;
//!
//! let next = bump(
//!   "1.2.3",            // current version string
//!   BumpLevel::Minor,   // the level to increment
//!   None,               // infer the format
//! ).unwrap();
//! assert_eq!(next, "1.3.0");
//!
//! // bumping the revision implies a four-part format
//! let next = bump("1.2.3", BumpLevel::Revision, None).unwrap();
//! assert_eq!(next, "1.2.3.1");
//! ```
//!
//! Or, when the level and format come in as text (say, from CI inputs):
//!
//! ```
//! use verbump::prelude::*;
//!
//! let next = bump_str("1.2", "patch", Some("a.b.c.d")).unwrap();
//! assert_eq!(next, "1.2.1.0");
//!
//! let err = bump_str("1.2.3", "huge", None).unwrap_err();
//! assert_eq!(
//!   err.to_string(),
//!   "bump must be either 'major', 'minor', 'patch', 'revision', or 'none'"
//! );
//! ```
//!
//! Or, break down the steps:
//!
//! ```
//! use verbump::prelude::*;
//!
//! let version = Version::parse("1.2.3.4").unwrap();
//! let next = version.next(BumpLevel::Patch).unwrap();
//! assert_eq!(next.render(Format::infer(BumpLevel::Patch, version.part_count())), "1.2.4.0");
//! ```
//!
//! ## Bump Levels
//!
//! | Level | major | minor | patch | revision |
//! |---|---|---|---|---|
//! | `major` | +1 | 0 | 0 | 0 |
//! | `minor` | | +1 | 0 | 0 |
//! | `patch` | | | +1 | 0 |
//! | `revision` | | | | +1 |
//! | `none` | | | | |
//!
//! ## Formats
//!
//! | Format | Rendered as |
//! |---|---|
//! | `a.b.c` | `major.minor.patch` |
//! | `a.b.c.d` | `major.minor.patch.revision` |
//!
//! When no format is given, `a.b.c.d` is used if the level is `revision` or the input had four or
//! more parts. Otherwise, `a.b.c` is used.
//!
//! ## Components
//!
//! Components are non-negative integers. Missing trailing components are zero, so `1.2` is the same
//! as `1.2.0.0`. A component that isn't made only of digits is rejected with
//! [`BumpError::InvalidComponent`].
//!
//! ## Prelude
//!
//! verbump provides a prelude module for convenience. It contains everything needed to interact
//! with the library.
//!
//! Use it with:
//!
//! ```
//! use verbump::prelude::*;
//! ```
#![warn(missing_docs)]

mod bumper;
mod error;
mod format;
mod level;
mod version;

pub use crate::bumper::{bump, bump_str};
pub use crate::error::BumpError;
pub use crate::format::Format;
pub use crate::level::BumpLevel;
pub use crate::version::Version;

/// A convenience module appropriate for glob imports (`use verbump::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::bump;
    #[doc(no_inline)]
    pub use crate::bump_str;
    #[doc(no_inline)]
    pub use crate::BumpError;
    #[doc(no_inline)]
    pub use crate::BumpLevel;
    #[doc(no_inline)]
    pub use crate::Format;
    #[doc(no_inline)]
    pub use crate::Version;
}
