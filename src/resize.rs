//! Resize notifications

/// Describes one completed growth of the bucket array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeEvent {
    /// Bucket count before the resize
    pub old_capacity: usize,
    /// Bucket count after the resize
    pub new_capacity: usize,
    /// Number of entries moved into the new buckets
    pub size: usize,
}

/// Callback invoked after every resize
pub(crate) type ResizeHook = Box<dyn FnMut(ResizeEvent)>;
