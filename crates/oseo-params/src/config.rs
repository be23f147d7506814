//! Configuration consumed by the registry.

/// Source of the per-page record limit applied to the `count` parameter.
///
/// A non-positive limit means the service imposes no upper bound.
pub trait RecordsPerPageLimit {
    fn maximum_records_per_page(&self) -> i64;
}

impl RecordsPerPageLimit for i64 {
    fn maximum_records_per_page(&self) -> i64 {
        *self
    }
}
