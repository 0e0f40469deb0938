use crate::framework::{transfer, ChildrenAccess, CollectionResult, Container, NamedEntity, OrderedCollection};

use super::Lecture;

/// A named group of ordered [`Lecture`]s inside a course.
///
/// The name is fixed once the module is built:
///
/// ```compile_fail
/// use course_catalog::domain::Module;
///
/// let mut module = Module::new("A");
/// module.name = "B".to_string();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    name: String,
    pub(crate) lectures: OrderedCollection<Lecture>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lectures: OrderedCollection::new(),
        }
    }

    pub fn number_of_lectures(&self) -> usize {
        self.lectures.len()
    }

    pub fn lecture(&self, name: &str) -> Option<&Lecture> {
        self.lectures.get(name)
    }

    /// Moves `lecture` from this module into `destination` at `position`.
    ///
    /// On failure both modules are left as they were. See [`transfer`].
    pub fn transfer_lecture(
        &mut self,
        lecture: &Lecture,
        destination: &mut Module,
        position: i64,
    ) -> CollectionResult<()> {
        transfer(lecture, &mut self.lectures, &mut destination.lectures, position)
    }
}

impl NamedEntity for Module {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Container for Module {
    type Child = Lecture;

    fn children(&self) -> &OrderedCollection<Lecture> {
        &self.lectures
    }

    fn children_mut(&mut self, _: ChildrenAccess) -> &mut OrderedCollection<Lecture> {
        &mut self.lectures
    }
}
