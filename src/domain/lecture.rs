use crate::framework::{ChildrenAccess, Container, NamedEntity, OrderedCollection};

use super::Material;

/// A single lecture: a video plus ordered supplementary [`Material`]s.
///
/// # Container
/// Material operations (`add`, `remove`, `move_to`, `position`, `includes`, `count`)
/// come from [`impl Container for Lecture`](#impl-Container-for-Lecture).
#[derive(Debug, Clone, PartialEq)]
pub struct Lecture {
    name: String,
    url: String,
    materials: OrderedCollection<Material>,
}

impl Lecture {
    /// Creates a lecture with no materials.
    ///
    /// # Arguments
    /// * `name` - Lecture title, unique within its module
    /// * `url` - Locator of the lecture video
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            materials: OrderedCollection::new(),
        }
    }

    /// Locator of the lecture video.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn number_of_materials(&self) -> usize {
        self.materials.len()
    }

    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }
}

impl NamedEntity for Lecture {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Container for Lecture {
    type Child = Material;

    fn children(&self) -> &OrderedCollection<Material> {
        &self.materials
    }

    fn children_mut(&mut self, _: ChildrenAccess) -> &mut OrderedCollection<Material> {
        &mut self.materials
    }
}
