//! The entry journal: an ordered collection of weight entries.
//!
//! The journal holds entries sorted ascending by date with at most one entry
//! per date. Every mutation re-sorts and re-runs the full recalculation pass
//! so the derived `previous_weight`/`change_type` fields stay consistent --
//! inserting, editing, or deleting an entry can change the predecessor
//! relationship for its neighbors, so the pass is never incremental.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entry::{classify, ChangeType, WeightEntry};
use crate::error::NotFoundError;

/// Ordered, date-keyed collection of weight entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    entries: Vec<WeightEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a journal from raw entries (snapshot load). Sorts and
    /// recalculates so a hand-edited or stale snapshot is repaired on load.
    pub fn from_entries(mut entries: Vec<WeightEntry>) -> Self {
        entries.sort_by_key(|e| e.date);
        let mut journal = Self { entries };
        journal.recalculate();
        journal
    }

    /// Entries sorted ascending by date.
    pub fn entries(&self) -> &[WeightEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: Uuid) -> Option<&WeightEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Insert an entry for `date`, or replace the weight and flag of the
    /// existing entry for that date in place (its id is preserved).
    ///
    /// Returns the id of the affected entry. Any numeric weight is accepted
    /// here; rejecting non-positive weights is the caller's responsibility.
    pub fn upsert(&mut self, date: NaiveDate, weight: f64, fasted_or_omad: bool) -> Uuid {
        let id = match self.entries.iter_mut().find(|e| e.date == date) {
            Some(existing) => {
                existing.weight = weight;
                existing.fasted_or_omad = fasted_or_omad;
                existing.id
            }
            None => {
                let entry = WeightEntry::new(date, weight, fasted_or_omad);
                let id = entry.id;
                self.entries.push(entry);
                id
            }
        };
        self.resort_and_recalculate();
        id
    }

    /// Mutate the editable fields of the identified entry.
    pub fn edit(
        &mut self,
        id: Uuid,
        date: NaiveDate,
        weight: f64,
        fasted_or_omad: bool,
    ) -> Result<(), NotFoundError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(NotFoundError { id })?;
        entry.date = date;
        entry.weight = weight;
        entry.fasted_or_omad = fasted_or_omad;
        self.resort_and_recalculate();
        Ok(())
    }

    /// Remove the identified entry.
    pub fn delete(&mut self, id: Uuid) -> Result<(), NotFoundError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Err(NotFoundError { id });
        }
        self.recalculate();
        Ok(())
    }

    /// Weight of the latest (max-date) entry.
    pub fn current_weight(&self) -> Option<f64> {
        self.entries.last().map(|e| e.weight)
    }

    /// Entry with the greatest date strictly less than `date`.
    pub fn latest_before(&self, date: NaiveDate) -> Option<&WeightEntry> {
        self.entries.iter().rev().find(|e| e.date < date)
    }

    fn resort_and_recalculate(&mut self) {
        self.entries.sort_by_key(|e| e.date);
        self.recalculate();
    }

    /// Full recalculation pass: the earliest entry becomes `Initial` with a
    /// self-referential previous weight, every subsequent entry derives from
    /// its immediate predecessor. Idempotent.
    fn recalculate(&mut self) {
        for i in 0..self.entries.len() {
            if i == 0 {
                self.entries[0].previous_weight = self.entries[0].weight;
                self.entries[0].change_type = ChangeType::Initial;
            } else {
                let prev_weight = self.entries[i - 1].weight;
                let entry = &mut self.entries[i];
                entry.previous_weight = prev_weight;
                entry.change_type = classify(entry.weight, prev_weight, entry.fasted_or_omad);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    #[test]
    fn upsert_keeps_ascending_date_order() {
        let mut journal = Journal::new();
        journal.upsert(date(10), 89.0, false);
        journal.upsert(date(2), 91.0, false);
        journal.upsert(date(6), 90.0, true);

        let dates: Vec<NaiveDate> = journal.entries().iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![date(2), date(6), date(10)]);
    }

    #[test]
    fn upsert_existing_date_replaces_in_place_and_preserves_id() {
        let mut journal = Journal::new();
        let id = journal.upsert(date(5), 90.0, false);
        let same_id = journal.upsert(date(5), 88.5, true);

        assert_eq!(journal.len(), 1);
        assert_eq!(id, same_id);
        let entry = journal.find(id).unwrap();
        assert_eq!(entry.weight, 88.5);
        assert!(entry.fasted_or_omad);
    }

    #[test]
    fn earliest_entry_is_always_initial() {
        let mut journal = Journal::new();
        journal.upsert(date(10), 89.0, true);
        // Inserting an earlier entry demotes the old earliest.
        journal.upsert(date(2), 91.0, false);

        let entries = journal.entries();
        assert_eq!(entries[0].change_type, ChangeType::Initial);
        assert_eq!(entries[0].previous_weight, entries[0].weight);
        // Old earliest is now a fasted loss against the new predecessor.
        assert_eq!(entries[1].change_type, ChangeType::LossFasted);
        assert_eq!(entries[1].previous_weight, 91.0);
    }

    #[test]
    fn edit_moving_a_date_rewires_neighbors() {
        let mut journal = Journal::new();
        journal.upsert(date(1), 92.0, false);
        let id = journal.upsert(date(5), 90.0, false);
        journal.upsert(date(9), 89.0, false);

        // Move the middle entry past the end.
        journal.edit(id, date(15), 90.0, false).unwrap();

        let entries = journal.entries();
        assert_eq!(entries[1].date, date(9));
        assert_eq!(entries[1].previous_weight, 92.0);
        assert_eq!(entries[2].date, date(15));
        assert_eq!(entries[2].previous_weight, 89.0);
        assert_eq!(entries[2].change_type, ChangeType::Gain);
    }

    #[test]
    fn edit_unknown_id_is_a_not_found_error() {
        let mut journal = Journal::new();
        journal.upsert(date(1), 92.0, false);
        let err = journal.edit(Uuid::new_v4(), date(2), 91.0, false).unwrap_err();
        assert!(err.to_string().contains("no entry with id"));
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn delete_reclassifies_the_successor() {
        let mut journal = Journal::new();
        journal.upsert(date(1), 92.0, false);
        let id = journal.upsert(date(5), 90.0, false);
        journal.upsert(date(9), 91.0, false);

        journal.delete(id).unwrap();

        let entries = journal.entries();
        assert_eq!(entries.len(), 2);
        // 91.0 against 92.0 is now a loss, not the gain it was against 90.0.
        assert_eq!(entries[1].previous_weight, 92.0);
        assert_eq!(entries[1].change_type, ChangeType::LossRegular);
    }

    #[test]
    fn delete_unknown_id_is_a_not_found_error() {
        let mut journal = Journal::new();
        assert!(journal.delete(Uuid::new_v4()).is_err());
    }

    #[test]
    fn delete_only_entry_leaves_journal_empty() {
        let mut journal = Journal::new();
        let id = journal.upsert(date(1), 92.0, false);
        journal.delete(id).unwrap();
        assert!(journal.is_empty());
        assert_eq!(journal.current_weight(), None);
    }

    #[test]
    fn current_weight_is_max_date_entry() {
        let mut journal = Journal::new();
        journal.upsert(date(9), 89.0, false);
        journal.upsert(date(2), 91.0, false);
        assert_eq!(journal.current_weight(), Some(89.0));
    }

    #[test]
    fn latest_before_is_strictly_less() {
        let mut journal = Journal::new();
        journal.upsert(date(2), 91.0, false);
        journal.upsert(date(6), 90.0, false);
        journal.upsert(date(10), 89.0, false);

        assert_eq!(journal.latest_before(date(6)).unwrap().date, date(2));
        assert_eq!(journal.latest_before(date(7)).unwrap().date, date(6));
        assert!(journal.latest_before(date(2)).is_none());
    }

    #[test]
    fn from_entries_repairs_stale_derived_fields() {
        let mut stale = WeightEntry::new(date(8), 90.0, true);
        stale.previous_weight = 123.0;
        stale.change_type = ChangeType::Gain;
        let first = WeightEntry::new(date(3), 92.0, false);

        let journal = Journal::from_entries(vec![stale, first]);
        let entries = journal.entries();
        assert_eq!(entries[0].date, date(3));
        assert_eq!(entries[0].change_type, ChangeType::Initial);
        assert_eq!(entries[1].previous_weight, 92.0);
        assert_eq!(entries[1].change_type, ChangeType::LossFasted);
    }

    proptest! {
        /// Recalculation is idempotent: a second pass changes nothing.
        #[test]
        fn recalculate_twice_is_stable(
            weights in proptest::collection::vec(30.0f64..200.0, 1..20)
        ) {
            let mut journal = Journal::new();
            for (i, w) in weights.iter().enumerate() {
                journal.upsert(date(1) + chrono::Days::new(i as u64), *w, i % 2 == 0);
            }

            let before = serde_json::to_string(journal.entries()).unwrap();
            journal.recalculate();
            let after = serde_json::to_string(journal.entries()).unwrap();
            prop_assert_eq!(before, after);
        }

        /// Invariant: every non-first entry derives from its predecessor,
        /// and the first entry is Initial with a self-referential weight.
        #[test]
        fn derived_fields_always_consistent(
            weights in proptest::collection::vec(30.0f64..200.0, 1..20),
            day_offsets in proptest::collection::vec(0u64..365, 1..20)
        ) {
            let mut journal = Journal::new();
            for (w, off) in weights.iter().zip(day_offsets.iter()) {
                journal.upsert(date(1) + chrono::Days::new(*off), *w, *off % 2 == 0);
            }

            let entries = journal.entries();
            prop_assert_eq!(entries[0].change_type, ChangeType::Initial);
            prop_assert_eq!(entries[0].previous_weight, entries[0].weight);
            for pair in entries.windows(2) {
                prop_assert_eq!(pair[1].previous_weight, pair[0].weight);
                prop_assert_eq!(
                    pair[1].change_type,
                    classify(pair[1].weight, pair[0].weight, pair[1].fasted_or_omad)
                );
            }
        }

        /// Upserting the same date repeatedly never grows the journal.
        #[test]
        fn duplicate_date_upserts_do_not_grow(
            weights in proptest::collection::vec(30.0f64..200.0, 1..10)
        ) {
            let mut journal = Journal::new();
            let first_id = journal.upsert(date(5), weights[0], false);
            for w in &weights {
                let id = journal.upsert(date(5), *w, true);
                prop_assert_eq!(id, first_id);
            }
            prop_assert_eq!(journal.len(), 1);
        }
    }
}
