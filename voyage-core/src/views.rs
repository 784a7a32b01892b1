//! Read-only helpers over a loaded collection. Nothing here touches storage.

/// Records that can be hidden from public listings.
///
/// The flag is tri-state: `Some(false)` hides the record, while both
/// `Some(true)` and `None` (legacy records without the field) show it.
pub trait Activatable {
    fn active_flag(&self) -> Option<bool>;

    fn is_active(&self) -> bool {
        self.active_flag() != Some(false)
    }
}

pub fn active_only<T: Activatable>(items: &[T]) -> Vec<&T> {
    items.iter().filter(|item| item.is_active()).collect()
}

/// Owned variant of [`active_only`].
pub fn into_active<T: Activatable>(items: Vec<T>) -> Vec<T> {
    items.into_iter().filter(|item| item.is_active()).collect()
}

pub fn count_active<T: Activatable>(items: &[T]) -> usize {
    items.iter().filter(|item| item.is_active()).count()
}
