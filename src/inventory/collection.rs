//! Versioned snack collection
//!
//! An [`Inventory`] is an immutable value. Every mutation returns a new
//! inventory with a higher version and leaves the old one untouched, so a
//! snapshot handed to a running query can never change underneath it.

use std::collections::HashSet;
use std::sync::Arc;

use super::errors::{InventoryError, InventoryResult};
use super::record::{Snack, SnackDraft, StoredSnack};
use super::validator::RecordValidator;

/// Owner of the snack collection
#[derive(Debug, Clone)]
pub struct Inventory {
    version: u64,
    records: Arc<[Snack]>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            version: 0,
            records: Vec::new().into(),
        }
    }
}

impl Inventory {
    /// Creates an empty inventory at version 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an inventory from existing records.
    ///
    /// # Errors
    ///
    /// - SNACK_RECORD_DUPLICATE_ID if two records share an id
    /// - SNACK_RECORD_MALFORMED if a record fails validation
    pub fn from_records(records: Vec<Snack>) -> InventoryResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for snack in &records {
            RecordValidator::validate_record(snack)?;
            if !seen.insert(snack.id) {
                return Err(InventoryError::DuplicateId(snack.id));
            }
        }

        Ok(Self {
            version: 0,
            records: records.into(),
        })
    }

    /// Builds an inventory from records read from a file
    pub fn from_stored(stored: Vec<StoredSnack>) -> InventoryResult<Self> {
        let records = stored
            .into_iter()
            .map(|s| RecordValidator::build(s.id, s.draft))
            .collect::<InventoryResult<Vec<_>>>()?;
        Self::from_records(records)
    }

    /// Parses a JSON array of records
    pub fn from_json(json: &str) -> InventoryResult<Self> {
        let stored: Vec<StoredSnack> = serde_json::from_str(json)?;
        Self::from_stored(stored)
    }

    /// Returns the collection version; bumped by every change
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns a shared read-only view of the records in insertion order
    pub fn snapshot(&self) -> Arc<[Snack]> {
        Arc::clone(&self.records)
    }

    pub fn records(&self) -> &[Snack] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by id
    pub fn get(&self, id: u64) -> Option<&Snack> {
        self.records.iter().find(|s| s.id == id)
    }

    /// Returns the id the next added record will get: highest id + 1,
    /// or 1 for an empty inventory
    pub fn next_id(&self) -> InventoryResult<u64> {
        match self.records.iter().map(|s| s.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(InventoryError::IdExhausted(max)),
        }
    }

    /// Validates `draft` and appends it under a fresh id.
    ///
    /// Returns the new inventory and the stored record.
    pub fn add(&self, draft: SnackDraft) -> InventoryResult<(Inventory, Snack)> {
        let snack = RecordValidator::build(self.next_id()?, draft)?;

        let mut records = self.records.to_vec();
        records.push(snack.clone());

        Ok((self.successor(records), snack))
    }

    /// Replaces the record with `id` in place, keeping its id and position
    pub fn update(&self, id: u64, draft: SnackDraft) -> InventoryResult<Inventory> {
        let position = self.position(id)?;
        let snack = RecordValidator::build(id, draft)?;

        let mut records = self.records.to_vec();
        records[position] = snack;

        Ok(self.successor(records))
    }

    /// Removes the record with `id`
    pub fn remove(&self, id: u64) -> InventoryResult<Inventory> {
        self.position(id)?;
        let (next, _) = self.remove_many(&[id]);
        Ok(next)
    }

    /// Removes every listed record; unknown ids are ignored.
    ///
    /// Returns the new inventory and the number of records removed.
    pub fn remove_many(&self, ids: &[u64]) -> (Inventory, usize) {
        let ids: HashSet<u64> = ids.iter().copied().collect();
        let records: Vec<Snack> = self
            .records
            .iter()
            .filter(|s| !ids.contains(&s.id))
            .cloned()
            .collect();

        let removed = self.records.len() - records.len();
        if removed == 0 {
            return (self.clone(), 0);
        }
        (self.successor(records), removed)
    }

    /// Flips `in_stock` on every listed record; unknown ids are ignored.
    ///
    /// Returns the new inventory and the number of records changed.
    pub fn toggle_stock(&self, ids: &[u64]) -> (Inventory, usize) {
        let ids: HashSet<u64> = ids.iter().copied().collect();
        let mut changed = 0;
        let records: Vec<Snack> = self
            .records
            .iter()
            .map(|s| {
                let mut snack = s.clone();
                if ids.contains(&snack.id) {
                    snack.in_stock = !snack.in_stock;
                    changed += 1;
                }
                snack
            })
            .collect();

        if changed == 0 {
            return (self.clone(), 0);
        }
        (self.successor(records), changed)
    }

    fn position(&self, id: u64) -> InventoryResult<usize> {
        self.records
            .iter()
            .position(|s| s.id == id)
            .ok_or(InventoryError::NotFound(id))
    }

    fn successor(&self, records: Vec<Snack>) -> Inventory {
        Inventory {
            version: self.version + 1,
            records: records.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> SnackDraft {
        SnackDraft::new(name, "Bars", "30g", 150, 120)
    }

    fn two_snacks() -> Inventory {
        let (inv, _) = Inventory::new().add(draft("Oat Bar")).unwrap();
        let (inv, _) = inv.add(draft("Fig Bar")).unwrap();
        inv
    }

    #[test]
    fn test_ids_are_assigned_monotonically() {
        let inv = two_snacks();
        let ids: Vec<u64> = inv.records().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(inv.next_id().unwrap(), 3);
        assert_eq!(inv.version(), 2);
    }

    #[test]
    fn test_next_id_after_gap() {
        let inv = two_snacks();
        let inv = inv.remove(1).unwrap();
        // Highest remaining id is 2
        assert_eq!(inv.next_id().unwrap(), 3);

        let inv = inv.remove(2).unwrap();
        assert_eq!(inv.next_id().unwrap(), 1);
    }

    #[test]
    fn test_add_rejects_malformed() {
        let inv = Inventory::new();
        let mut bad = draft("Oat Bar");
        bad.price = -10;
        let err = inv.add(bad).unwrap_err();
        assert_eq!(err.code(), "SNACK_RECORD_MALFORMED");
        assert!(inv.is_empty());
        assert_eq!(inv.version(), 0);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let inv = two_snacks();
        let next = inv.update(1, draft("Oat Bar Deluxe")).unwrap();

        assert_eq!(next.records()[0].id, 1);
        assert_eq!(next.records()[0].name, "Oat Bar Deluxe");
        assert_eq!(next.len(), 2);

        // Old value is untouched
        assert_eq!(inv.records()[0].name, "Oat Bar");
    }

    #[test]
    fn test_update_unknown_id() {
        let inv = two_snacks();
        assert_eq!(
            inv.update(99, draft("Ghost")).unwrap_err(),
            InventoryError::NotFound(99)
        );
    }

    #[test]
    fn test_remove_unknown_id() {
        let inv = two_snacks();
        assert_eq!(inv.remove(42).unwrap_err(), InventoryError::NotFound(42));
    }

    #[test]
    fn test_snapshot_survives_mutation() {
        let inv = two_snacks();
        let snapshot = inv.snapshot();

        let (next, removed) = inv.remove_many(&[1, 2]);
        assert_eq!(removed, 2);
        assert!(next.is_empty());
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_remove_many_ignores_unknown() {
        let inv = two_snacks();
        let (next, removed) = inv.remove_many(&[2, 77]);
        assert_eq!(removed, 1);
        assert_eq!(next.len(), 1);

        let (same, removed) = next.remove_many(&[77]);
        assert_eq!(removed, 0);
        assert_eq!(same.version(), next.version());
    }

    #[test]
    fn test_toggle_stock() {
        let inv = two_snacks();
        let (next, changed) = inv.toggle_stock(&[2]);
        assert_eq!(changed, 1);
        assert!(next.get(1).unwrap().in_stock);
        assert!(!next.get(2).unwrap().in_stock);

        let (back, _) = next.toggle_stock(&[2]);
        assert!(back.get(2).unwrap().in_stock);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let inv = two_snacks();
        let mut records = inv.records().to_vec();
        records[1].id = 1;
        assert_eq!(
            Inventory::from_records(records).unwrap_err(),
            InventoryError::DuplicateId(1)
        );
    }

    #[test]
    fn test_from_json() {
        let inv = Inventory::from_json(
            r#"[
                {"id": 5, "name": "Pretzels", "category": "Snacks", "weight": "80g",
                 "price": 249, "calories": 380, "ingredients": ["Flour", "Salt"], "inStock": true}
            ]"#,
        )
        .unwrap();
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.next_id().unwrap(), 6);
    }

    #[test]
    fn test_from_json_negative_price() {
        let err = Inventory::from_json(
            r#"[{"id": 1, "name": "X", "category": "Y", "weight": "1g", "price": -1, "calories": 0}]"#,
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("price"));
    }

    #[test]
    fn test_add_after_highest_possible_id() {
        let (inv, _) = Inventory::new().add(draft("Oat Bar")).unwrap();
        let mut records = inv.records().to_vec();
        records[0].id = u64::MAX;
        let inv = Inventory::from_records(records).unwrap();

        let err = inv.add(draft("Fig Bar")).unwrap_err();
        assert_eq!(err, InventoryError::IdExhausted(u64::MAX));
        assert_eq!(err.code(), "SNACK_ID_EXHAUSTED");
        assert_eq!(inv.version(), 0);
        assert_eq!(inv.len(), 1);
    }
}
