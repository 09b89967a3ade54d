//! Resource path composition.

use std::fmt;

/// An immutable, `/`-separated resource path such as `/sandboxes/abc-123`.
///
/// Segments are concatenated verbatim: identifiers are neither escaped nor
/// validated, so callers must pass well-formed path segments.
///
/// # Examples
///
/// ```
/// use sandbar::ResourcePath;
///
/// let sandboxes = ResourcePath::new("/sandboxes");
/// let aliases = sandboxes.join("abc-123").join("aliases");
///
/// assert_eq!(aliases.as_str(), "/sandboxes/abc-123/aliases");
/// assert_eq!(ResourcePath::root().join("me").as_str(), "/me");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath(String);

impl ResourcePath {
    /// Creates a path, adding a leading `/` and dropping any trailing one.
    pub fn new(path: impl AsRef<str>) -> Self {
        let trimmed = path.as_ref().trim_matches('/');
        if trimmed.is_empty() {
            Self::root()
        } else {
            Self(format!("/{}", trimmed))
        }
    }

    /// The API root, `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Returns a new path with `segment` appended.
    pub fn join(&self, segment: impl AsRef<str>) -> Self {
        let base = self.0.trim_end_matches('/');
        Self(format!("{}/{}", base, segment.as_ref()))
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ResourcePath> for String {
    fn from(path: ResourcePath) -> Self {
        path.0
    }
}

impl AsRef<str> for ResourcePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
