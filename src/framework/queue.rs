//! # Order Queue
//!
//! The synchronous state machine owned by every [`QueueActor`](crate::framework::QueueActor).
//!
//! Entries are kept in arrival order. For a queue of `N` entries the entry at index `k`
//! always holds position `k + 1`, and no two entries share an id. Cancelling an entry
//! shifts every entry behind it one place forward.
//!
//! An id -> index map makes lookups constant time. It does not shortcut cancellation:
//! every entry behind the cancelled one still gets renumbered.
//!
//! The queue has no locking of its own. Exclusive access comes from the actor that owns it.

use crate::framework::core::{FrameworkError, QueueEntity};
use std::collections::HashMap;

/// First-come-first-served queue with dense 1-based positions.
pub struct OrderQueue<T: QueueEntity> {
    entries: Vec<T>,
    index: HashMap<T::Id, usize>,
}

impl<T: QueueEntity> Default for OrderQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: QueueEntity> OrderQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Number of active entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.index.contains_key(id)
    }

    /// Appends a new entry at position `count() + 1` and returns that position.
    ///
    /// # Errors
    /// - [`FrameworkError::Duplicate`] if the id is already queued.
    /// - [`FrameworkError::EntityError`] if the entity refuses to build.
    ///
    /// The queue is unchanged on error.
    pub fn enqueue(&mut self, params: T::Create) -> Result<usize, FrameworkError> {
        let entry = self.admit(params)?;
        Ok(self.push(entry))
    }

    /// Current position of `id`.
    pub fn position(&self, id: &T::Id) -> Result<usize, FrameworkError> {
        self.get(id)
            .map(T::position)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.index.get(id).map(|&idx| &self.entries[idx])
    }

    /// Removes `id` and moves every entry behind it forward by one position.
    ///
    /// Returns the removed entry, still carrying the position it held.
    pub fn cancel(&mut self, id: &T::Id) -> Result<T, FrameworkError> {
        let idx = self
            .index
            .remove(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        let removed = self.entries.remove(idx);

        for entry in &mut self.entries[idx..] {
            entry.set_position(entry.position() - 1);
            if let Some(slot) = self.index.get_mut(entry.id()) {
                *slot -= 1;
            }
        }

        Ok(removed)
    }

    /// All active entries in arrival order.
    pub fn snapshot(&self) -> Vec<T> {
        self.entries.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Builds the entry `params` describes without queuing it.
    pub(crate) fn admit(&self, params: T::Create) -> Result<T, FrameworkError> {
        let id = T::create_id(&params);
        if self.contains(id) {
            return Err(FrameworkError::Duplicate(id.to_string()));
        }
        T::from_create_params(params, self.entries.len() + 1)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))
    }

    /// Appends an entry produced by [`OrderQueue::admit`] with no queue change in between.
    pub(crate) fn push(&mut self, mut entry: T) -> usize {
        let position = self.entries.len() + 1;
        entry.set_position(position);
        self.index.insert(entry.id().clone(), self.entries.len());
        self.entries.push(entry);
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashSet;

    #[derive(Clone, Debug, PartialEq)]
    struct Slip {
        id: String,
        dishes: Vec<String>,
        position: usize,
    }

    #[derive(Debug)]
    struct SlipCreate {
        id: String,
        dishes: Vec<String>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("never fails")]
    struct SlipError;

    #[async_trait]
    impl QueueEntity for Slip {
        type Id = String;
        type Create = SlipCreate;
        type Context = ();
        type Error = SlipError;

        fn id(&self) -> &String {
            &self.id
        }

        fn create_id(params: &SlipCreate) -> &String {
            &params.id
        }

        fn position(&self) -> usize {
            self.position
        }

        fn set_position(&mut self, position: usize) {
            self.position = position;
        }

        fn from_create_params(params: SlipCreate, position: usize) -> Result<Self, SlipError> {
            Ok(Self {
                id: params.id,
                dishes: params.dishes,
                position,
            })
        }
    }

    fn slip(id: &str) -> SlipCreate {
        SlipCreate {
            id: id.to_string(),
            dishes: vec!["Nasi Lemak".to_string()],
        }
    }

    fn id(s: &str) -> String {
        s.to_string()
    }

    fn ids(queue: &OrderQueue<Slip>) -> Vec<String> {
        queue.iter().map(|s| s.id.clone()).collect()
    }

    /// Positions are exactly 1..=N, ids are unique, and the index agrees with both.
    fn assert_invariants(queue: &OrderQueue<Slip>) {
        let mut seen = HashSet::new();
        for (k, entry) in queue.entries.iter().enumerate() {
            assert_eq!(entry.position, k + 1, "position of {}", entry.id);
            assert!(seen.insert(entry.id.clone()), "duplicate id {}", entry.id);
            assert_eq!(queue.index.get(&entry.id), Some(&k), "index of {}", entry.id);
        }
        assert_eq!(queue.index.len(), queue.entries.len());
    }

    #[test]
    fn enqueue_assigns_next_position() {
        let mut queue = OrderQueue::<Slip>::new();
        assert_eq!(queue.enqueue(slip("a")).unwrap(), 1);
        assert_eq!(queue.count(), 1);
        assert_invariants(&queue);
    }

    #[test]
    fn duplicate_enqueue_is_rejected() {
        let mut queue = OrderQueue::<Slip>::new();
        queue.enqueue(slip("a")).unwrap();

        let err = queue.enqueue(slip("a")).unwrap_err();
        assert!(matches!(err, FrameworkError::Duplicate(ref d) if d == "a"));
        assert_eq!(queue.count(), 1);
        assert_invariants(&queue);
    }

    #[test]
    fn cancelling_head_renumbers_everyone_behind() {
        let mut queue = OrderQueue::<Slip>::new();
        assert_eq!(queue.enqueue(slip("a")).unwrap(), 1);
        assert_eq!(queue.enqueue(slip("b")).unwrap(), 2);
        assert_eq!(queue.enqueue(slip("c")).unwrap(), 3);

        let removed = queue.cancel(&id("a")).unwrap();
        assert_eq!(removed.position, 1);
        assert_eq!(queue.position(&id("b")).unwrap(), 1);
        assert_eq!(queue.position(&id("c")).unwrap(), 2);
        assert_eq!(queue.count(), 2);
        assert_invariants(&queue);
    }

    #[test]
    fn lookup_on_empty_queue_fails() {
        let queue = OrderQueue::<Slip>::new();
        assert!(queue.is_empty());
        let err = queue.position(&id("x")).unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(ref d) if d == "x"));
    }

    #[test]
    fn cancelling_tail_leaves_front_alone() {
        let mut queue = OrderQueue::<Slip>::new();
        queue.enqueue(slip("a")).unwrap();
        queue.enqueue(slip("b")).unwrap();

        queue.cancel(&id("b")).unwrap();
        assert_eq!(queue.position(&id("a")).unwrap(), 1);
        assert_eq!(queue.count(), 1);
        assert_invariants(&queue);
    }

    #[test]
    fn second_cancel_fails_without_touching_state() {
        let mut queue = OrderQueue::<Slip>::new();
        queue.enqueue(slip("a")).unwrap();
        queue.enqueue(slip("b")).unwrap();

        queue.cancel(&id("a")).unwrap();
        let before = queue.snapshot();

        let err = queue.cancel(&id("a")).unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(_)));
        assert_eq!(queue.snapshot(), before);
        assert_invariants(&queue);
    }

    #[test]
    fn failed_operations_are_idempotent() {
        let mut queue = OrderQueue::<Slip>::new();
        for name in ["a", "b", "c"] {
            queue.enqueue(slip(name)).unwrap();
        }
        let before = queue.snapshot();

        assert!(queue.enqueue(slip("b")).is_err());
        assert!(queue.position(&id("zz")).is_err());
        assert!(queue.cancel(&id("zz")).is_err());

        assert_eq!(queue.snapshot(), before);
        assert_invariants(&queue);
    }

    #[test]
    fn cancel_in_the_middle_only_shifts_the_suffix() {
        let mut queue = OrderQueue::<Slip>::new();
        for name in ["a", "b", "c", "d", "e"] {
            queue.enqueue(slip(name)).unwrap();
        }

        queue.cancel(&id("c")).unwrap();

        assert_eq!(queue.position(&id("a")).unwrap(), 1);
        assert_eq!(queue.position(&id("b")).unwrap(), 2);
        assert_eq!(queue.position(&id("d")).unwrap(), 3);
        assert_eq!(queue.position(&id("e")).unwrap(), 4);
        assert_eq!(ids(&queue), vec!["a", "b", "d", "e"]);
        assert_invariants(&queue);
    }

    #[test]
    fn new_orders_fill_the_dense_tail_after_cancellations() {
        let mut queue = OrderQueue::<Slip>::new();
        for name in ["a", "b", "c"] {
            queue.enqueue(slip(name)).unwrap();
        }
        queue.cancel(&id("a")).unwrap();
        queue.cancel(&id("c")).unwrap();

        // Size + 1, not a ticket counter.
        assert_eq!(queue.enqueue(slip("d")).unwrap(), 2);
        // A cancelled id may come back and joins at the tail.
        assert_eq!(queue.enqueue(slip("a")).unwrap(), 3);
        assert_eq!(ids(&queue), vec!["b", "d", "a"]);
        assert_invariants(&queue);
    }

    #[test]
    fn items_are_kept_verbatim() {
        let mut queue = OrderQueue::<Slip>::new();
        queue
            .enqueue(SlipCreate {
                id: id("a"),
                dishes: vec![],
            })
            .unwrap();
        queue
            .enqueue(SlipCreate {
                id: id("b"),
                dishes: vec!["Teh Tarik".into(), "Teh Tarik".into()],
            })
            .unwrap();

        assert!(queue.get(&id("a")).unwrap().dishes.is_empty());
        assert_eq!(queue.get(&id("b")).unwrap().dishes, vec!["Teh Tarik", "Teh Tarik"]);
    }

    #[test]
    fn invariants_hold_across_a_long_mixed_run() {
        let mut queue = OrderQueue::<Slip>::new();
        let mut arrival: Vec<String> = Vec::new();
        // Small LCG so the run is deterministic.
        let mut seed: u64 = 0x5eed;
        let mut next = move || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) as usize
        };

        for step in 0..500 {
            let name = format!("o{}", next() % 40);
            if next() % 3 == 0 {
                let before: Vec<(String, usize)> =
                    queue.iter().map(|s| (s.id.clone(), s.position)).collect();
                match queue.cancel(&name) {
                    Ok(removed) => {
                        let p = removed.position;
                        for (other, old) in before.iter().filter(|(o, _)| *o != name) {
                            let now = queue.position(other).unwrap();
                            let expected = if *old > p { old - 1 } else { *old };
                            assert_eq!(now, expected, "step {} id {}", step, other);
                        }
                        arrival.retain(|a| *a != name);
                    }
                    Err(_) => {
                        assert!(!arrival.contains(&name));
                        assert_eq!(before.len(), queue.count());
                    }
                }
            } else {
                let size = queue.count();
                match queue.enqueue(slip(&name)) {
                    Ok(position) => {
                        assert_eq!(position, size + 1);
                        arrival.push(name);
                    }
                    Err(_) => {
                        assert!(arrival.contains(&name));
                        assert_eq!(queue.count(), size);
                    }
                }
            }
            assert_invariants(&queue);
            assert_eq!(ids(&queue), arrival, "arrival order at step {}", step);
        }
    }
}
