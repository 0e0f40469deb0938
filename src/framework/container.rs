use super::collection::OrderedCollection;
use super::entity::NamedEntity;
use super::error::CollectionResult;

/// Access token for [`Container::children_mut`].
///
/// Only this crate can construct it, so callers outside the crate can reach the owned
/// collection mutably only through `add`, `remove` and `move_to`.
///
/// ```compile_fail
/// use course_catalog::domain::{Course, Module};
/// use course_catalog::framework::{ChildrenAccess, Container};
///
/// let mut course = Course::new("azure-devops", "Azure DevOps");
/// course.add(Module::new("A")).unwrap();
/// course.children_mut(ChildrenAccess(()));
/// ```
pub struct ChildrenAccess(());

/// Trait for parent entities that own one ordered collection of children.
///
/// This trait removes the per-parent duplication of add/remove/move logic by providing
/// default implementations that delegate to the owned [`OrderedCollection`].
pub trait Container {
    /// The element type stored by this parent (e.g. `Module` for a `Course`).
    type Child: NamedEntity;

    /// Access the owned collection.
    fn children(&self) -> &OrderedCollection<Self::Child>;

    /// Mutable access for the provided methods below.
    fn children_mut(&mut self, access: ChildrenAccess) -> &mut OrderedCollection<Self::Child>;

    /// Append a child at the last position.
    fn add(&mut self, child: Self::Child) -> CollectionResult<()> {
        self.children_mut(ChildrenAccess(())).add(child)
    }

    /// Remove the child named like `child`, returning the stored instance.
    fn remove(&mut self, child: &Self::Child) -> CollectionResult<Self::Child> {
        self.children_mut(ChildrenAccess(())).remove(child)
    }

    /// Rearrange a child to a new 1-based position.
    fn move_to(&mut self, child: &Self::Child, position: i64) -> CollectionResult<()> {
        self.children_mut(ChildrenAccess(())).move_to(child, position)
    }

    fn position(&self, child: &Self::Child) -> CollectionResult<usize> {
        self.children().position(child)
    }

    fn includes(&self, child: &Self::Child) -> bool {
        self.children().includes(child)
    }

    fn count(&self) -> usize {
        self.children().len()
    }
}
