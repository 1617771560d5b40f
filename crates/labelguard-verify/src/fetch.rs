use crate::store::LabelStore;
use labelguard_runtime::{Cancellation, ContainerRuntime, RuntimeError};
use std::sync::mpsc;
use std::thread;

/// Fetch every image's labels into the store, one thread per image.
///
/// Returns only after every task has joined (the evaluation phase relies on
/// this barrier), then surfaces the first reported error. Later errors are
/// dropped: one failure already invalidates the whole run. A task that
/// observes cancellation reports it like any other failure and joins, so
/// the barrier cannot deadlock.
pub fn fill_store(
    runtime: &dyn ContainerRuntime,
    ctx: &Cancellation,
    images: &[String],
    store: &LabelStore,
) -> Result<(), RuntimeError> {
    let (errors, first_error) = mpsc::channel::<RuntimeError>();

    thread::scope(|scope| {
        for image in images {
            let errors = errors.clone();
            scope.spawn(move || {
                if ctx.is_cancelled() {
                    let _ = errors.send(RuntimeError::Cancelled {
                        image: image.clone(),
                    });
                    return;
                }
                match runtime.image_labels(ctx, image) {
                    Ok(labels) => store.insert(image, labels),
                    Err(err) => {
                        log::debug!("fetch failed for {image}: {err}");
                        let _ = errors.send(err);
                    }
                }
            });
        }
    });

    drop(errors);
    match first_error.try_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
