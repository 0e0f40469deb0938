//! # Ordered Unique Collection
//!
//! [`OrderedCollection`] is the generic container shared by every level of the catalog
//! (Course → Module → Lecture → Material).
//!
//! ## Invariants
//! 1. No two elements share the same [`NamedEntity::name`].
//! 2. Positions are dense and 1-based: the element at index `i` is at position `i + 1`.
//!    Inserting or removing renumbers every element after the affected index.
//!
//! Every fallible operation returns a [`CollectionResult`] and is a no-op on failure.

use tracing::{debug, info, warn};

use super::entity::{entity_type, NamedEntity};
use super::error::{CollectionError, CollectionResult};

/// An ordered sequence of uniquely named elements with 1-based positions.
///
/// # Architecture Note
/// The collection owns its elements. A parent entity holds exactly one collection by
/// composition and delegates to it through the [`Container`](super::Container) trait, so
/// the add/remove/move logic is written once for every parent type.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedCollection<T: NamedEntity> {
    items: Vec<T>,
}

impl<T: NamedEntity> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: NamedEntity> OrderedCollection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }

    fn unexisting(name: &str) -> CollectionError {
        CollectionError::UnexistingElement { name: name.to_string() }
    }

    /// Appends `element` at the end of the collection.
    ///
    /// # Errors
    /// [`CollectionError::ExistingElement`] if an element with the same name is already
    /// stored. The collection is unchanged in that case.
    pub fn add(&mut self, element: T) -> CollectionResult<()> {
        let entity_type = entity_type::<T>();
        let name = element.name();
        debug!(entity_type, name, "Add");

        if self.index_of(name).is_some() {
            warn!(entity_type, name, "Already exists");
            return Err(CollectionError::ExistingElement { name: name.to_string() });
        }

        self.items.push(element);
        info!(entity_type, size = self.items.len(), "Added");
        Ok(())
    }

    /// Removes the element named like `element` and returns the stored instance.
    ///
    /// Every element after the removed one moves up by one position.
    pub fn remove(&mut self, element: &T) -> CollectionResult<T> {
        self.take(element.name()).map(|(_, removed)| removed)
    }

    /// Returns the 1-based position of the element named like `element`.
    pub fn position(&self, element: &T) -> CollectionResult<usize> {
        self.position_of(element.name())
    }

    pub fn position_of(&self, name: &str) -> CollectionResult<usize> {
        self.index_of(name)
            .map(|index| index + 1)
            .ok_or_else(|| Self::unexisting(name))
    }

    /// True iff an element named like `element` is stored. Never fails.
    pub fn includes(&self, element: &T) -> bool {
        self.contains(element.name())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Moves the element named like `element` to `position` (1-based).
    ///
    /// This is a single extraction and reinsertion, not a swap: elements strictly between
    /// the old and the new position shift by one slot, all others keep their position.
    ///
    /// # Errors
    /// - [`CollectionError::UnexistingElement`] if the element is not stored.
    /// - [`CollectionError::InvalidPosition`] if `position` is outside `[1, len]`.
    pub fn move_to(&mut self, element: &T, position: i64) -> CollectionResult<()> {
        let entity_type = entity_type::<T>();
        let name = element.name();
        debug!(entity_type, name, position, "Move");

        let Some(from) = self.index_of(name) else {
            warn!(entity_type, name, "Not found");
            return Err(Self::unexisting(name));
        };
        let size = self.items.len();
        let Some(to) = Self::slot(position, size) else {
            warn!(entity_type, name, position, size, "Invalid position");
            return Err(CollectionError::InvalidPosition { position, size });
        };

        let item = self.items.remove(from);
        self.items.insert(to, item);
        info!(entity_type, from = from + 1, to = to + 1, "Moved");
        Ok(())
    }

    /// Inserts `element` directly at `position` (1-based), shifting later elements down.
    ///
    /// The valid range is `[1, len + 1]`; `len + 1` is equivalent to [`add`](Self::add).
    pub fn insert_at(&mut self, element: T, position: i64) -> CollectionResult<()> {
        self.try_insert(element, position).map_err(|(_, err)| err)
    }

    /// Insert that hands the element back on failure so the caller can restore it elsewhere.
    pub(crate) fn try_insert(&mut self, element: T, position: i64) -> Result<(), (T, CollectionError)> {
        let entity_type = entity_type::<T>();
        let name = element.name();
        debug!(entity_type, name, position, "Insert");

        if self.index_of(name).is_some() {
            warn!(entity_type, name, "Already exists");
            let err = CollectionError::ExistingElement { name: name.to_string() };
            return Err((element, err));
        }
        let size = self.items.len();
        let Some(index) = Self::slot(position, size + 1) else {
            warn!(entity_type, name, position, size, "Invalid position");
            return Err((element, CollectionError::InvalidPosition { position, size }));
        };

        self.items.insert(index, element);
        info!(entity_type, position = index + 1, size = self.items.len(), "Inserted");
        Ok(())
    }

    /// Removes the element named `name`, returning its former 0-based index with it.
    pub(crate) fn take(&mut self, name: &str) -> CollectionResult<(usize, T)> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, name, "Remove");

        let Some(index) = self.index_of(name) else {
            warn!(entity_type, name, "Not found");
            return Err(Self::unexisting(name));
        };
        let removed = self.items.remove(index);
        info!(entity_type, position = index + 1, size = self.items.len(), "Removed");
        Ok((index, removed))
    }

    /// Puts back an element previously returned by [`take`](Self::take) at its old index.
    pub(crate) fn restore(&mut self, index: usize, element: T) {
        let index = index.min(self.items.len());
        debug!(entity_type = entity_type::<T>(), name = element.name(), position = index + 1, "Restored");
        self.items.insert(index, element);
    }

    /// Converts a 1-based position into a 0-based slot if it lies in `[1, upper]`.
    fn slot(position: i64, upper: usize) -> Option<usize> {
        let index = usize::try_from(position).ok()?.checked_sub(1)?;
        (index < upper).then_some(index)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Crate-internal: a caller holding `&mut T` could replace the element wholesale and
    /// break name uniqueness.
    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.name() == name)
    }

    /// Mutable access to two distinct elements at once.
    ///
    /// # Errors
    /// [`CollectionError::UnexistingElement`] naming the first missing element, or naming
    /// `second` when both names are equal (there is no second distinct element).
    pub(crate) fn get_pair_mut(&mut self, first: &str, second: &str) -> CollectionResult<(&mut T, &mut T)> {
        let a = self.index_of(first).ok_or_else(|| Self::unexisting(first))?;
        let b = self.index_of(second).ok_or_else(|| Self::unexisting(second))?;

        if a == b {
            return Err(Self::unexisting(second));
        }
        if a < b {
            let (head, tail) = self.items.split_at_mut(b);
            Ok((&mut head[a], &mut tail[0]))
        } else {
            let (head, tail) = self.items.split_at_mut(a);
            Ok((&mut tail[0], &mut head[b]))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Names in position order.
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T: NamedEntity> IntoIterator for &'a OrderedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
