use crate::{sorter, warning};

/// Performs one synchronization run for an already-obtained code.
pub async fn sort(code: String) {
    if let Err(e) = sorter::run(&code).await {
        warning!("Synchronization run failed: {}", e);
    }
}
