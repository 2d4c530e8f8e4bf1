//! Endpoint naming
//!
//! Maps logical resource tokens (`student_data`) to the PascalCase path
//! segments the API expects (`StudentData`), and recognizes the
//! `get_<resource>` accessor convention.

/// Prefix of list accessor names
const ACCESSOR_PREFIX: &str = "get_";

/// Accessor names that are not list endpoints
const RESERVED_ACCESSORS: &[&str] = &["get_assessment"];

/// Convert a snake_case resource token into the API's PascalCase segment.
///
/// Each underscore-separated piece has its first character upper-cased and
/// the rest lower-cased.
pub fn endpoint_name(resource: &str) -> String {
    resource.split('_').map(capitalize).collect()
}

fn capitalize(piece: &str) -> String {
    let mut chars = piece.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Extract the resource token from a `get_<resource>` accessor name.
///
/// Returns `None` for names without the prefix, with an empty resource, or
/// for reserved accessors such as `get_assessment`.
pub fn resource_from_accessor(accessor: &str) -> Option<&str> {
    if RESERVED_ACCESSORS.contains(&accessor) {
        return None;
    }
    accessor
        .strip_prefix(ACCESSOR_PREFIX)
        .filter(|resource| !resource.is_empty())
}

/// Endpoint serving single-assessment detail views
pub const ASSESSMENT_ENDPOINT: &str = "Assessment";

/// Path segments after [`ASSESSMENT_ENDPOINT`] for one assessment's view.
///
/// The id is kept as a single segment whatever characters it contains.
pub fn assessment_view_segments(assessment_id: &str) -> Vec<String> {
    vec![assessment_id.to_string(), "View".to_string()]
}
