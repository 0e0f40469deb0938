use crate::framework::NamedEntity;

/// The kind of supplementary resource attached to a lecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    /// A web page.
    Link,
    /// A downloadable document such as a PDF.
    Document,
}

/// Supplementary material (link or document) attached to a [`Lecture`](crate::domain::Lecture).
///
/// The locator is stored as given; it is not validated. The name is fixed at
/// construction and read through [`NamedEntity::name`].
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    name: String,
    url: String,
    kind: MaterialKind,
}

impl Material {
    pub fn new(name: impl Into<String>, url: impl Into<String>, kind: MaterialKind) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            kind,
        }
    }

    pub fn link(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(name, url, MaterialKind::Link)
    }

    pub fn document(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(name, url, MaterialKind::Document)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn kind(&self) -> MaterialKind {
        self.kind
    }
}

impl NamedEntity for Material {
    fn name(&self) -> &str {
        &self.name
    }
}
