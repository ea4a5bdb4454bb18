use dl_core::{Entry, FeatureSet};

/// Keep the entries whose feature is active, in input order.
pub fn filter_entries<'a>(entries: &'a [Entry], features: FeatureSet) -> Vec<&'a Entry> {
    entries
        .iter()
        .filter(|entry| features.is_active(entry.feature()))
        .collect()
}
