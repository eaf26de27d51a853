//! Centralised URL path prefixes for versioned endpoint groups.
//!
//! Services compose their router prefixes from these constants instead of
//! repeating path literals, so a version bump is a one-line change here.

/// ApiPrefix holds the path segments endpoint groups are mounted under.
///
/// Not instantiable; all members are associated constants or functions.
pub struct ApiPrefix;

impl ApiPrefix {
    /// Platform base segment.
    const BASE: &'static str = "/base";
    /// API version segment.
    const VERSION: &'static str = "/v1";

    /// Prefix for the form endpoint group: `/base/v1/form`.
    pub const FORM_CONTROLLER_PREFIX: &'static str = "/base/v1/form";

    /// Compose the versioned base prefix with a feature segment.
    ///
    /// The segment is expected to carry its own leading slash, e.g.
    /// `ApiPrefix::join("/form")`.
    pub fn join(feature: &str) -> String {
        format!("{}{}{}", Self::BASE, Self::VERSION, feature)
    }
}
