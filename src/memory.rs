//! In-memory table backing the storage ports when no database is around
//! (tests and `AppState::fake`). Ids are assigned from a sequence starting at 1.

use std::collections::BTreeMap;

use tokio::sync::Mutex;

/// A storage row with a database-style generated key.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> Option<i64>;
    fn assign_id(&mut self, id: i64);
}

struct TableState<R> {
    rows: BTreeMap<i64, R>,
    next_id: i64,
}

pub struct MemoryTable<R> {
    inner: Mutex<TableState<R>>,
}

impl<R: Record> Default for MemoryTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> MemoryTable<R> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TableState {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Rows in id order.
    pub async fn all(&self) -> Vec<R> {
        self.inner.lock().await.rows.values().cloned().collect()
    }

    pub async fn get(&self, id: i64) -> Option<R> {
        self.inner.lock().await.rows.get(&id).cloned()
    }

    /// Insert when the row has no id, replace otherwise. Replacing an id
    /// that was never stored fails like an `UPDATE .. RETURNING` with no row.
    pub async fn upsert(&self, mut row: R) -> anyhow::Result<R> {
        let mut state = self.inner.lock().await;
        let id = match row.id() {
            Some(id) => {
                if !state.rows.contains_key(&id) {
                    anyhow::bail!("no row with id {id}");
                }
                id
            }
            None => {
                let id = state.next_id;
                state.next_id += 1;
                row.assign_id(id);
                id
            }
        };
        state.rows.insert(id, row.clone());
        Ok(row)
    }

    pub async fn remove(&self, id: i64) {
        self.inner.lock().await.rows.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: Option<i64>,
        label: &'static str,
    }

    impl Record for Row {
        fn id(&self) -> Option<i64> {
            self.id
        }
        fn assign_id(&mut self, id: i64) {
            self.id = Some(id);
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let table = MemoryTable::new();
        let a = table.upsert(Row { id: None, label: "a" }).await.unwrap();
        let b = table.upsert(Row { id: None, label: "b" }).await.unwrap();
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
        assert_eq!(table.all().await, vec![a, b]);
    }

    #[tokio::test]
    async fn update_of_unknown_id_fails_and_keeps_table() {
        let table = MemoryTable::new();
        let err = table.upsert(Row { id: Some(9), label: "ghost" }).await.unwrap_err();
        assert!(err.to_string().contains("9"));
        assert!(table.all().await.is_empty());
    }

    #[tokio::test]
    async fn removed_ids_are_not_reused() {
        let table = MemoryTable::new();
        let a = table.upsert(Row { id: None, label: "a" }).await.unwrap();
        table.remove(1).await;
        table.remove(1).await;
        assert!(table.get(1).await.is_none());
        let b = table.upsert(Row { id: None, label: "b" }).await.unwrap();
        assert_ne!(a.id, b.id);
    }
}
