//! Visibility resolution policy
//!
//! Maps a (viewer role, subject role) pair to a [`VisibilityLevel`] through
//! an ordered rule table scanned top to bottom, first match wins. The table
//! is data, not branching: adding a role-pair exception is one new row.

use veil_core::VisibilityLevel;

/// Role tags with dedicated rows in the policy table. Roles are an open
/// set; anything else falls through to the same-role row or the default.
pub const SUPER_ADMIN: &str = "SuperAdmin";
pub const ADMIN: &str = "Admin";
pub const USER: &str = "User";
pub const DRIVER: &str = "Driver";
pub const AMERICAN: &str = "American";

/// Matcher for one side of a rule.
#[derive(Debug, Clone, Copy)]
enum RoleMatch {
    Any,
    Is(&'static str),
    OneOf(&'static [&'static str]),
    /// Matches when the role equals the viewer's role
    SameAsViewer,
}

impl RoleMatch {
    fn matches(&self, role: &str, viewer_role: &str) -> bool {
        match self {
            RoleMatch::Any => true,
            RoleMatch::Is(tag) => role == *tag,
            RoleMatch::OneOf(tags) => tags.contains(&role),
            RoleMatch::SameAsViewer => role == viewer_role,
        }
    }
}

/// One row of the policy table.
#[derive(Debug, Clone, Copy)]
struct Rule {
    viewer: RoleMatch,
    subject: RoleMatch,
    level: VisibilityLevel,
}

impl Rule {
    fn matches(&self, viewer_role: &str, subject_role: &str) -> bool {
        self.viewer.matches(viewer_role, viewer_role)
            && self.subject.matches(subject_role, viewer_role)
    }
}

// Order matters: the SuperAdmin row outranks everything, the Admin
// exception rows outrank the same-role row, and the same-role row outranks
// the default.
const RULES: &[Rule] = &[
    Rule {
        viewer: RoleMatch::Is(SUPER_ADMIN),
        subject: RoleMatch::Any,
        level: VisibilityLevel::Full,
    },
    Rule {
        viewer: RoleMatch::Is(ADMIN),
        subject: RoleMatch::OneOf(&[SUPER_ADMIN, ADMIN]),
        level: VisibilityLevel::NameOnly,
    },
    Rule {
        viewer: RoleMatch::Is(ADMIN),
        subject: RoleMatch::OneOf(&[USER, DRIVER]),
        level: VisibilityLevel::NoContact,
    },
    Rule {
        viewer: RoleMatch::Is(ADMIN),
        subject: RoleMatch::Is(AMERICAN),
        level: VisibilityLevel::CountryOnly,
    },
    Rule {
        viewer: RoleMatch::Any,
        subject: RoleMatch::SameAsViewer,
        level: VisibilityLevel::NoContact,
    },
];

/// Level applied when no rule matches: the most restrictive one.
const DEFAULT_LEVEL: VisibilityLevel = VisibilityLevel::NameOnly;

/// Resolve the visibility level for a viewer/subject role pair.
///
/// Total function: unrecognized roles on either side fall through to the
/// same-role row or the default, never to an error.
pub fn resolve(viewer_role: &str, subject_role: &str) -> VisibilityLevel {
    RULES
        .iter()
        .find(|rule| rule.matches(viewer_role, subject_role))
        .map(|rule| rule.level)
        .unwrap_or(DEFAULT_LEVEL)
}

/// Role tags the table treats specially, for listings.
pub fn known_roles() -> &'static [&'static str] {
    &[SUPER_ADMIN, ADMIN, USER, DRIVER, AMERICAN]
}
