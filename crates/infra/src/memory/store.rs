use std::collections::HashMap;
use std::sync::RwLock;

use tavern_core::{AggregateRoot, RepositoryError, RepositoryResult};

/// In-memory aggregate store keyed by aggregate id.
///
/// One lock guards every path, reads included, so a reader never observes a
/// map in the middle of a mutation. Intended for tests/dev.
#[derive(Debug)]
pub struct InMemoryAggregateStore<A: AggregateRoot> {
    inner: RwLock<HashMap<A::Id, A>>,
}

impl<A: AggregateRoot> InMemoryAggregateStore<A> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<A: AggregateRoot> Default for InMemoryAggregateStore<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> InMemoryAggregateStore<A>
where
    A: AggregateRoot + Clone,
{
    pub fn get(&self, id: &A::Id) -> RepositoryResult<A> {
        let map = self.inner.read().map_err(|_| RepositoryError::LockPoisoned)?;
        map.get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(A::TYPE, id))
    }

    /// Snapshot of every stored aggregate, in no particular order.
    pub fn list(&self) -> RepositoryResult<Vec<A>> {
        let map = self.inner.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(map.values().cloned().collect())
    }

    /// Insert a new aggregate. Fails if the id is already taken.
    pub fn insert(&self, aggregate: A) -> RepositoryResult<()> {
        let mut map = self.inner.write().map_err(|_| RepositoryError::LockPoisoned)?;
        let id = *aggregate.id();
        if map.contains_key(&id) {
            return Err(RepositoryError::already_exists(A::TYPE, id));
        }
        map.insert(id, aggregate);
        Ok(())
    }

    /// Replace an existing aggregate. Fails if the id is unknown.
    pub fn replace(&self, aggregate: A) -> RepositoryResult<()> {
        let mut map = self.inner.write().map_err(|_| RepositoryError::LockPoisoned)?;
        match map.get_mut(aggregate.id()) {
            Some(slot) => {
                *slot = aggregate;
                Ok(())
            }
            None => Err(RepositoryError::not_found(A::TYPE, aggregate.id())),
        }
    }

    pub fn remove(&self, id: &A::Id) -> RepositoryResult<A> {
        let mut map = self.inner.write().map_err(|_| RepositoryError::LockPoisoned)?;
        map.remove(id)
            .ok_or_else(|| RepositoryError::not_found(A::TYPE, id))
    }
}

#[cfg(test)]
mod tests {
    use tavern_core::Entity;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tab {
        id: u32,
        total: f64,
    }

    impl Entity for Tab {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    impl AggregateRoot for Tab {
        type Id = u32;
        type Root = Self;
        const TYPE: &'static str = "tab";

        fn root(&self) -> &Self {
            self
        }
    }

    #[test]
    fn insert_rejects_duplicate_ids() {
        let store = InMemoryAggregateStore::new();
        store.insert(Tab { id: 1, total: 0.0 }).unwrap();

        let err = store.insert(Tab { id: 1, total: 5.0 }).unwrap_err();
        assert!(err.is_already_exists());
        assert_eq!(store.get(&1).unwrap().total, 0.0);
    }

    #[test]
    fn replace_and_remove_require_existing_id() {
        let store: InMemoryAggregateStore<Tab> = InMemoryAggregateStore::new();

        assert!(store.replace(Tab { id: 7, total: 1.0 }).unwrap_err().is_not_found());
        assert!(store.remove(&7).unwrap_err().is_not_found());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn remove_returns_the_stored_aggregate() {
        let store = InMemoryAggregateStore::new();
        store.insert(Tab { id: 3, total: 2.5 }).unwrap();

        let removed = store.remove(&3).unwrap();
        assert_eq!(removed, Tab { id: 3, total: 2.5 });
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn list_is_a_snapshot() {
        let store = InMemoryAggregateStore::new();
        store.insert(Tab { id: 1, total: 1.0 }).unwrap();
        store.insert(Tab { id: 2, total: 2.0 }).unwrap();

        let mut snapshot = store.list().unwrap();
        store.remove(&1).unwrap();

        snapshot.sort_by_key(|t| t.id);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(store.list().unwrap(), vec![Tab { id: 2, total: 2.0 }]);
    }
}
