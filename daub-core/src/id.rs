//! # IDs
//! Drawn objects are referred to by handle rather than by value, so that the undo stack and the
//! rendering surface can agree on *which* object to remove. Handles are `Id<T>`, unique within this
//! execution of the program and namespaced by the type `T`.
//!
//! To get a fresh ID, use `Id<YourNamespaceTy>`'s `Default` impl.

// Next available ID per namespace.
static ID_SERVER: parking_lot::RwLock<
    std::collections::BTreeMap<std::any::TypeId, std::sync::atomic::AtomicU64>,
> = parking_lot::const_rwlock(std::collections::BTreeMap::new());

/// ID that is guaranteed unique within this execution of the program.
/// IDs with different types may share a value but should not be considered equal.
pub struct Id<T: std::any::Any> {
    id: std::num::NonZeroU64,
    // Namespace marker
    _phantom: std::marker::PhantomData<fn() -> T>,
}
impl<T: std::any::Any> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: std::any::Any> Copy for Id<T> {}
impl<T: std::any::Any> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl<T: std::any::Any> Eq for Id<T> {}
impl<T: std::any::Any> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T: std::any::Any> Id<T> {
    /// Get the raw numeric value of this ID.
    /// IDs from differing namespaces may share the same numeric ID!
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id.get()
    }
    fn allocate() -> std::num::NonZeroU64 {
        let ty = std::any::TypeId::of::<T>();
        let read = ID_SERVER.upgradable_read();
        let id = if let Some(next) = read.get(&ty) {
            next.fetch_add(1, std::sync::atomic::Ordering::Relaxed)
        } else {
            // First ID of this namespace. Happens once per type for the life of the program.
            let mut write = parking_lot::RwLockUpgradableReadGuard::upgrade(read);
            write.insert(ty, 2.into());
            1
        };

        // Zero is only reachable after wrapping all of u64, which a paint session will not do.
        std::num::NonZeroU64::new(id).unwrap_or_else(|| {
            log::error!("{} ID overflow! Aborting!", std::any::type_name::<T>());
            log::logger().flush();
            std::process::abort();
        })
    }
}
impl<T: std::any::Any> Default for Id<T> {
    fn default() -> Self {
        Self {
            id: Self::allocate(),
            _phantom: std::marker::PhantomData,
        }
    }
}
impl<T: std::any::Any> std::fmt::Display for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = std::any::type_name::<T>();
        write!(f, "{}#{}", name.rsplit("::").next().unwrap_or(name), self.id)
    }
}
impl<T: std::any::Any> std::fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Display>::fmt(self, f)
    }
}
