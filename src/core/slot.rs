// Keyed holder for rendering resources that must be released explicitly.

/// A resource owning handles that outlive a plain `Drop` (GPU buffers, etc.).
pub trait Release {
    fn release(&mut self);
}

/// Holds at most one resource built for a given key.
///
/// Asking for a different key releases the current resource before the
/// replacement is built, so two generations never coexist. Dropping the slot
/// releases whatever it still holds.
pub struct ResourceSlot<K, T: Release> {
    key: Option<K>,
    value: Option<T>,
}

impl<K: PartialEq + Copy, T: Release> ResourceSlot<K, T> {
    pub const fn empty() -> Self {
        Self {
            key: None,
            value: None,
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns the resource for `key`, rebuilding it only when the key changed.
    pub fn ensure(&mut self, key: K, build: impl FnOnce(K) -> T) -> &T {
        if self.key != Some(key) {
            self.clear();
            self.key = Some(key);
        }
        self.value.get_or_insert_with(|| build(key))
    }

    pub fn clear(&mut self) {
        if let Some(mut old) = self.value.take() {
            old.release();
        }
        self.key = None;
    }
}

impl<K: PartialEq + Copy, T: Release> Default for ResourceSlot<K, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K, T: Release> Drop for ResourceSlot<K, T> {
    fn drop(&mut self) {
        if let Some(mut old) = self.value.take() {
            old.release();
        }
    }
}
