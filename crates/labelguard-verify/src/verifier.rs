use crate::fetch;
use crate::store::LabelStore;
use labelguard_runtime::{Cancellation, ContainerRuntime, RuntimeError};
use labelguard_types::ConstraintSet;
use std::thread;

/// Run a whole verification: fetch phase, barrier, evaluation phase.
///
/// On a fetch error the set is returned untouched — evaluating against a
/// missing mapping would be indistinguishable from an image with no labels.
/// After a clean fetch, one thread per image evaluates that image's
/// constraints; `iter_mut` hands each thread a disjoint subtree, so the set
/// needs no lock.
pub fn verify(
    set: &mut ConstraintSet,
    runtime: &dyn ContainerRuntime,
    ctx: &Cancellation,
) -> Result<(), RuntimeError> {
    let images: Vec<String> = set.image_refs().map(str::to_string).collect();
    let store = LabelStore::new();

    fetch::fill_store(runtime, ctx, &images, &store)?;
    log::debug!("fetched labels for {} images", store.len());

    thread::scope(|scope| {
        for (image, entry) in set.images.iter_mut() {
            let labels = store.labels_for(image);
            scope.spawn(move || labelguard_domain::evaluate_image(entry, &labels));
        }
    });

    Ok(())
}
