use tracing::instrument;

use crate::framework::{
    transfer, ChildrenAccess, CollectionError, CollectionResult, Container, NamedEntity, OrderedCollection,
};

use super::{Lecture, Module};

/// A course: the root of the catalog, holding ordered [`Module`]s.
///
/// # Container
/// Module operations (`add`, `remove`, `move_to`, `position`, `includes`, `count`)
/// come from [`impl Container for Course`](#impl-Container-for-Course).
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    /// Short slug identifying the course (e.g. `azure-devops`). Used as its name.
    reference: String,
    /// Human-readable title.
    description: String,
    modules: OrderedCollection<Module>,
}

impl Course {
    /// Creates a course with no modules.
    ///
    /// # Arguments
    /// * `reference` - Short slug for the course
    /// * `description` - Full course title
    pub fn new(reference: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            description: description.into(),
            modules: OrderedCollection::new(),
        }
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn number_of_modules(&self) -> usize {
        self.modules.len()
    }

    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    /// Moves `lecture` out of module `from` and into module `to` at `position`.
    ///
    /// Both modules are looked up by name in this course. When they are the same module
    /// this is an in-module [`move_to`](Container::move_to).
    ///
    /// # Errors
    /// - [`CollectionError::UnexistingElement`] if either module is not in the course, or
    ///   the lecture is not in `from`.
    /// - [`CollectionError::ExistingElement`] or [`CollectionError::InvalidPosition`] if
    ///   `to` rejects the lecture. The lecture is then back in `from` at its old position.
    #[instrument(
        skip_all,
        fields(course = %self.reference, lecture = lecture.name(), from = from.name(), to = to.name(), position = position)
    )]
    pub fn move_lecture(
        &mut self,
        lecture: &Lecture,
        from: &Module,
        to: &Module,
        position: i64,
    ) -> CollectionResult<()> {
        if from.name() == to.name() {
            let module = self.modules.get_mut(from.name()).ok_or_else(|| {
                CollectionError::UnexistingElement { name: from.name().to_string() }
            })?;
            return module.move_to(lecture, position);
        }

        let (source, destination) = self.modules.get_pair_mut(from.name(), to.name())?;
        transfer(lecture, &mut source.lectures, &mut destination.lectures, position)
    }
}

impl NamedEntity for Course {
    fn name(&self) -> &str {
        &self.reference
    }
}

impl Container for Course {
    type Child = Module;

    fn children(&self) -> &OrderedCollection<Module> {
        &self.modules
    }

    fn children_mut(&mut self, _: ChildrenAccess) -> &mut OrderedCollection<Module> {
        &mut self.modules
    }
}
