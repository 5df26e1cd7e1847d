//! Resolution of license texts.
//!
//! The text for a license type is looked up through an ordered list of
//! [`LicenseSource`]s and the first source that knows the license type wins. The default
//! chain consults `<license folder>/<license type>.license` on disk first and the set of
//! license texts bundled into the binary second.

mod bundled;
mod resolver;

pub use bundled::{BUNDLED_LICENSES, bundled_license};
pub use resolver::{BundledSource, FolderSource, LICENSE_SUFFIX, LicenseResolver, LicenseSource, LicenseText};
