//! Authoritative in-memory task collection.
//!
//! One readers-writer lock guards both the map and the id counter, so every
//! write is atomic with respect to every other operation. The lock is never
//! held across I/O. Callers always receive clones.

use std::collections::HashMap;

use parking_lot::RwLock;
use taskdesk_shared::Task;

#[derive(Debug)]
struct Inner {
    tasks: HashMap<u64, Task>,
    /// Next id to hand out. Only ever incremented, so deleted ids stay retired.
    next_id: u64,
}

#[derive(Debug)]
pub struct TaskStore {
    inner: RwLock<Inner>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                tasks: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Stores a new, not-done task under the next unused id.
    pub fn create(&self, title: impl Into<String>) -> Task {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let task = Task {
            id,
            title: title.into(),
            done: false,
        };
        inner.tasks.insert(id, task.clone());
        task
    }

    pub fn get_by_id(&self, id: u64) -> Option<Task> {
        self.inner.read().tasks.get(&id).cloned()
    }

    /// Snapshot of every task, in no particular order.
    pub fn get_all(&self) -> Vec<Task> {
        self.inner.read().tasks.values().cloned().collect()
    }

    /// Snapshot of tasks whose `done` flag equals `done`, in no particular order.
    pub fn get_by_status(&self, done: bool) -> Vec<Task> {
        self.inner
            .read()
            .tasks
            .values()
            .filter(|task| task.done == done)
            .cloned()
            .collect()
    }

    /// Sets `done` on an existing task. Returns `false` if the id is unknown.
    pub fn update(&self, id: u64, done: bool) -> bool {
        match self.inner.write().tasks.get_mut(&id) {
            Some(task) => {
                task.done = done;
                true
            }
            None => false,
        }
    }

    /// Removes a task. Returns `false` if the id is unknown.
    pub fn delete(&self, id: u64) -> bool {
        self.inner.write().tasks.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn create_assigns_sequential_ids_starting_at_one() {
        let store = TaskStore::new();
        let first = store.create("a");
        let second = store.create("b");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(!first.done);
        assert_eq!(store.get_all().len(), 2);
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let store = TaskStore::new();
        let a = store.create("a");
        let b = store.create("b");
        assert!(store.delete(b.id));
        assert!(store.delete(a.id));
        assert!(store.get_all().is_empty());

        let c = store.create("c");
        assert_eq!(c.id, 3);
    }

    #[test]
    fn get_by_id_returns_copies() {
        let store = TaskStore::new();
        let created = store.create("original");

        let mut copy = store.get_by_id(created.id).unwrap();
        copy.title.push_str(" (mutated)");
        copy.done = true;

        assert_eq!(store.get_by_id(created.id).unwrap(), created);
    }

    #[test]
    fn get_by_id_is_stable_without_writes() {
        let store = TaskStore::new();
        let created = store.create("read me twice");
        assert_eq!(store.get_by_id(created.id), store.get_by_id(created.id));
        assert_eq!(store.get_by_id(42), None);
    }

    #[test]
    fn update_on_missing_id_returns_false() {
        let store = TaskStore::new();
        assert!(!store.update(999, true));
    }

    #[test]
    fn update_with_unchanged_value_still_reports_existence() {
        let store = TaskStore::new();
        let task = store.create("a");
        assert!(store.update(task.id, false));
        assert!(!store.get_by_id(task.id).unwrap().done);

        assert!(store.update(task.id, true));
        assert!(store.get_by_id(task.id).unwrap().done);
    }

    #[test]
    fn delete_missing_id_returns_false() {
        let store = TaskStore::new();
        let task = store.create("a");
        assert!(store.delete(task.id));
        assert!(!store.delete(task.id));
    }

    #[test]
    fn concurrent_creates_cover_one_to_n() {
        const THREADS: u64 = 16;
        const PER_THREAD: u64 = 64;

        let store = Arc::new(TaskStore::new());
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..PER_THREAD)
                        .map(|i| store.create(format!("t{t}-{i}")).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();

        let expected: Vec<u64> = (1..=THREADS * PER_THREAD).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn concurrent_readers_and_writers_keep_status_partition() {
        let store = Arc::new(TaskStore::new());
        for i in 0..100 {
            store.create(format!("seed {i}"));
        }

        let writers: Vec<_> = (0..4)
            .map(|w| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for id in (1..=100).filter(|id| id % 4 == w) {
                        store.update(id, true);
                    }
                })
            })
            .collect();
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..50 {
                        // Each call is its own snapshot; only the total is guaranteed.
                        assert_eq!(store.get_all().len(), 100);
                    }
                })
            })
            .collect();

        for handle in writers.into_iter().chain(readers) {
            handle.join().unwrap();
        }
        assert_eq!(store.get_by_status(true).len(), 100);
        assert!(store.get_by_status(false).is_empty());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Create,
        Update(u64, bool),
        Delete(u64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Create),
            (1u64..40, any::<bool>()).prop_map(|(id, done)| Op::Update(id, done)),
            (1u64..40).prop_map(Op::Delete),
        ]
    }

    proptest! {
        #[test]
        fn ids_strictly_increase_and_are_never_reused(ops in prop::collection::vec(op(), 0..120)) {
            let store = TaskStore::new();
            let mut seen = HashSet::new();
            let mut last = 0;

            for op in ops {
                match op {
                    Op::Create => {
                        let task = store.create("x");
                        prop_assert!(task.id > last);
                        prop_assert!(seen.insert(task.id));
                        last = task.id;
                    }
                    Op::Update(id, done) => {
                        prop_assert_eq!(store.update(id, done), store.get_by_id(id).is_some());
                    }
                    Op::Delete(id) => {
                        store.delete(id);
                        prop_assert!(store.get_by_id(id).is_none());
                    }
                }
            }
        }

        #[test]
        fn status_filters_partition_all_tasks(ops in prop::collection::vec(op(), 0..120)) {
            let store = TaskStore::new();
            for op in ops {
                match op {
                    Op::Create => { store.create("x"); }
                    Op::Update(id, done) => { store.update(id, done); }
                    Op::Delete(id) => { store.delete(id); }
                }
            }

            let done: HashSet<u64> = store.get_by_status(true).iter().map(|t| t.id).collect();
            let open: HashSet<u64> = store.get_by_status(false).iter().map(|t| t.id).collect();
            let all: HashSet<u64> = store.get_all().iter().map(|t| t.id).collect();

            prop_assert!(done.is_disjoint(&open));
            prop_assert_eq!(done.union(&open).copied().collect::<HashSet<_>>(), all);
        }
    }
}
