//! Cross-container transfer: moving one element from a source collection into a
//! destination collection as a single unit of work.

use tracing::{debug, info, instrument, warn};

use super::collection::OrderedCollection;
use super::entity::{entity_type, NamedEntity};
use super::error::CollectionResult;

/// Moves the element named like `child` out of `source` and into `destination` at
/// `position` (1-based, valid range `[1, destination.len() + 1]`).
///
/// Either both collections end up updated, or both are left exactly as they were:
/// when the destination rejects the element (duplicate name or invalid position) it is
/// restored into `source` at its original position before the error is returned.
///
/// # Errors
/// - [`UnexistingElement`](super::CollectionError::UnexistingElement) if `source` does not
///   hold the child. `destination` is not touched.
/// - [`ExistingElement`](super::CollectionError::ExistingElement) or
///   [`InvalidPosition`](super::CollectionError::InvalidPosition) from the destination.
#[instrument(
    skip_all,
    fields(entity_type = entity_type::<T>(), name = child.name(), position = position)
)]
pub fn transfer<T: NamedEntity>(
    child: &T,
    source: &mut OrderedCollection<T>,
    destination: &mut OrderedCollection<T>,
    position: i64,
) -> CollectionResult<()> {
    let entity_type = entity_type::<T>();
    let name = child.name();
    debug!("Transfer");

    let (origin, element) = source.take(name)?;

    match destination.try_insert(element, position) {
        Ok(()) => {
            info!(entity_type, name, position, "Transferred");
            Ok(())
        }
        Err((element, err)) => {
            source.restore(origin, element);
            warn!(entity_type, name, error = %err, "Transfer rolled back");
            Err(err)
        }
    }
}
