use indexmap::IndexMap;

use crate::models::ClothingItem;

/// Owns the authoritative barcode → item mapping.
///
/// `IndexMap` keeps insertion order, so `barcodes()` snapshots are
/// reproducible without promising any particular ordering to clients.
/// No eviction, expiry, or size bound; the store lives and dies with the
/// process.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: IndexMap<String, ClothingItem>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All current barcodes, in insertion order.
    pub fn barcodes(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }

    pub fn get(&self, barcode: &str) -> Option<&ClothingItem> {
        self.items.get(barcode)
    }

    /// Insert-if-absent. On a duplicate barcode the store is left untouched
    /// and the rejected item is handed back to the caller.
    pub fn insert(&mut self, barcode: String, item: ClothingItem) -> Result<(), ClothingItem> {
        if self.items.contains_key(&barcode) {
            return Err(item);
        }
        self.items.insert(barcode, item);
        Ok(())
    }

    /// Removes the entry if present. `shift_remove` preserves the insertion
    /// order of the remaining entries.
    pub fn remove(&mut self, barcode: &str) -> Option<ClothingItem> {
        self.items.shift_remove(barcode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(color: &str) -> ClothingItem {
        ClothingItem {
            category: "T-Shirt".to_string(),
            size: "M".to_string(),
            color: color.to_string(),
        }
    }

    #[test]
    fn starts_empty() {
        let store = ItemStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.barcodes().is_empty());
    }

    #[test]
    fn insert_then_get_round_trips() {
        let mut store = ItemStore::new();
        store.insert("CLTH-2023-001".to_string(), item("Blue")).unwrap();
        assert_eq!(store.get("CLTH-2023-001"), Some(&item("Blue")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_insert_is_rejected_without_mutation() {
        let mut store = ItemStore::new();
        store.insert("CLTH-2023-001".to_string(), item("Blue")).unwrap();
        let rejected = store
            .insert("CLTH-2023-001".to_string(), item("Red"))
            .unwrap_err();
        assert_eq!(rejected, item("Red"));
        // Original entry untouched, still exactly one.
        assert_eq!(store.get("CLTH-2023-001"), Some(&item("Blue")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_missing_is_a_no_op() {
        let mut store = ItemStore::new();
        store.insert("CLTH-2023-001".to_string(), item("Blue")).unwrap();
        assert_eq!(store.remove("CLTH-2023-999"), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn removed_items_are_invisible() {
        let mut store = ItemStore::new();
        store.insert("CLTH-2023-001".to_string(), item("Blue")).unwrap();
        assert_eq!(store.remove("CLTH-2023-001"), Some(item("Blue")));
        assert_eq!(store.get("CLTH-2023-001"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn barcodes_keep_insertion_order() {
        let mut store = ItemStore::new();
        for code in ["CLTH-3", "CLTH-1", "CLTH-2"] {
            store.insert(code.to_string(), item("Blue")).unwrap();
        }
        assert_eq!(store.barcodes(), vec!["CLTH-3", "CLTH-1", "CLTH-2"]);

        store.remove("CLTH-1");
        assert_eq!(store.barcodes(), vec!["CLTH-3", "CLTH-2"]);
    }
}
