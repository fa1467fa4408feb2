//! Route Classifier
//!
//! Pure mapping from a request path to the zone guarding it.

use percent_encoding::percent_decode_str;
use std::borrow::Cow;

use crate::domain::entity::zone::{Zone, ZoneTable};

/// Double/triple encoding is decoded too; deeper nesting is not meaningful
const MAX_DECODE_ROUNDS: usize = 3;

/// Which side of the gate a path falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass<'a> {
    Public,
    Protected(&'a Zone),
}

/// Classify `path` against the zone table
///
/// `path` is the raw, still percent-encoded request path. It is decoded and
/// normalized before matching so that `/blog/%2e%2e/admin`, `/%61dmin` or
/// `//admin` are judged by the path the origin will eventually serve.
pub fn classify<'a>(zones: &'a ZoneTable, path: &str) -> RouteClass<'a> {
    let decoded = decode_path(path);
    let path = normalize_path(&decoded);
    match zones.find(&path) {
        Some(zone) => RouteClass::Protected(zone),
        None => RouteClass::Public,
    }
}

/// Percent-decode until the path stops changing
pub fn decode_path(path: &str) -> Cow<'_, str> {
    let mut current = Cow::Borrowed(path);
    for _ in 0..MAX_DECODE_ROUNDS {
        if !current.contains('%') {
            break;
        }
        let decoded = percent_decode_str(&current).decode_utf8_lossy().into_owned();
        if decoded == current {
            break;
        }
        current = Cow::Owned(decoded);
    }
    current
}

/// Collapse repeated separators and resolve `.` / `..` segments
///
/// A backslash counts as a separator; some origins treat it as one.
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    let needs_work = path.contains("//")
        || path.contains('\\')
        || path
            .split('/')
            .any(|segment| segment == "." || segment == "..");
    if !needs_work {
        return Cow::Borrowed(path);
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    Cow::Owned(format!("/{}", segments.join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::role::Role;

    fn role_of(class: RouteClass<'_>) -> Option<Role> {
        match class {
            RouteClass::Public => None,
            RouteClass::Protected(zone) => Some(zone.role),
        }
    }

    #[test]
    fn test_classify_protected_prefixes() {
        let zones = ZoneTable::default();
        assert_eq!(role_of(classify(&zones, "/dashboard/materials/1")), Some(Role::Student));
        assert_eq!(role_of(classify(&zones, "/dashboard")), Some(Role::Student));
        assert_eq!(role_of(classify(&zones, "/admin/course")), Some(Role::Admin));
        assert_eq!(role_of(classify(&zones, "/management/staff")), Some(Role::Staff));
    }

    #[test]
    fn test_classify_public() {
        let zones = ZoneTable::default();
        for path in ["/", "/blog/123", "/login", "/admin-login", "/management-login", "/courses"] {
            assert_eq!(classify(&zones, path), RouteClass::Public, "{path}");
        }
    }

    #[test]
    fn test_classify_normalizes_before_matching() {
        let zones = ZoneTable::default();
        assert_eq!(role_of(classify(&zones, "//admin/course")), Some(Role::Admin));
        assert_eq!(role_of(classify(&zones, "/blog/../management")), Some(Role::Staff));
        assert_eq!(role_of(classify(&zones, "/./dashboard/x")), Some(Role::Student));
    }

    #[test]
    fn test_classify_decodes_before_matching() {
        let zones = ZoneTable::default();
        assert_eq!(role_of(classify(&zones, "/blog/%2e%2e/admin/course")), Some(Role::Admin));
        assert_eq!(role_of(classify(&zones, "/blog/%2E%2e/admin/course")), Some(Role::Admin));
        assert_eq!(role_of(classify(&zones, "/%61dmin/course")), Some(Role::Admin));
        assert_eq!(role_of(classify(&zones, "/blog%2f..%2fmanagement")), Some(Role::Staff));
        assert_eq!(role_of(classify(&zones, "/blog/%252e%252e/dashboard")), Some(Role::Student));
        assert_eq!(role_of(classify(&zones, "/blog\\..\\admin")), Some(Role::Admin));
        assert_eq!(classify(&zones, "/blog/%20post"), RouteClass::Public);
    }

    #[test]
    fn test_decode_path() {
        assert_eq!(decode_path("/plain"), "/plain");
        assert_eq!(decode_path("/%2e%2E"), "/..");
        assert_eq!(decode_path("/%252e"), "/.");
        assert!(matches!(decode_path("/plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/a/b"), "/a/b");
        assert_eq!(normalize_path("/a//b/./c/../d"), "/a/b/d");
        assert_eq!(normalize_path("/../.."), "/");
    }
}
