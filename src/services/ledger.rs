//! Ledger service
//!
//! Per-user CRUD over the transactions collection. Every operation performs
//! a full load, an in-memory transform, and a full save before returning;
//! rows belonging to other users are never exposed.

use chrono::NaiveDate;

use crate::error::{FindashError, FindashResult};
use crate::models::{Money, Transaction, TransactionId, TransactionType, UserId};
use crate::storage::{Store, TransactionStore};

/// Service for a user's transaction ledger
pub struct LedgerService<'a> {
    store: &'a Store,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List one user's transactions, newest first
    ///
    /// Ordered by transaction date descending; same-date rows keep their
    /// insertion order (stable sort).
    pub fn list(&self, user_id: UserId) -> FindashResult<Vec<Transaction>> {
        let mut transactions: Vec<Transaction> = self
            .store
            .transactions
            .load()?
            .into_iter()
            .filter(|t| t.user_id == user_id)
            .collect();

        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(transactions)
    }

    /// Add a transaction for a user
    ///
    /// Assigns the next transaction ID over the whole collection (IDs are
    /// global across users) and persists the full collection.
    pub fn add(
        &self,
        user_id: UserId,
        category: &str,
        amount: Money,
        kind: TransactionType,
        date: NaiveDate,
    ) -> FindashResult<Transaction> {
        if amount < Money::MIN_AMOUNT {
            return Err(FindashError::Validation(format!(
                "Amount must be at least {}",
                Money::MIN_AMOUNT
            )));
        }

        let mut transactions = self.store.transactions.load()?;

        let transaction = Transaction::new(
            TransactionStore::next_id(&transactions),
            user_id,
            category,
            amount,
            kind,
            date,
        );

        transactions.push(transaction.clone());
        self.store.transactions.save(&transactions)?;

        Ok(transaction)
    }

    /// Delete a transaction by ID
    ///
    /// Removes every row with that ID and persists. Deleting an absent ID
    /// is a no-op, not an error.
    pub fn delete(&self, id: TransactionId) -> FindashResult<()> {
        let mut transactions = self.store.transactions.load()?;
        transactions.retain(|t| t.id != id);
        self.store.transactions.save(&transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorePaths;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let paths = StorePaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(paths).unwrap();
        (temp_dir, store)
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_assigns_global_sequential_ids() {
        let (_temp_dir, store) = create_test_store();
        let ledger = LedgerService::new(&store);

        let a = ledger
            .add(
                UserId::new(1),
                "Rent",
                Money::from_cents(100_000),
                TransactionType::Expense,
                date("2024-01-01"),
            )
            .unwrap();
        // A different user's add continues the same sequence
        let b = ledger
            .add(
                UserId::new(2),
                "Salary",
                Money::from_cents(500_000),
                TransactionType::Income,
                date("2024-01-02"),
            )
            .unwrap();

        assert_eq!(a.id, TransactionId::new(1));
        assert_eq!(b.id, TransactionId::new(2));
    }

    #[test]
    fn test_list_is_scoped_to_user() {
        let (_temp_dir, store) = create_test_store();
        let ledger = LedgerService::new(&store);

        let alice = UserId::new(1);
        let bob = UserId::new(2);

        for (user, cents) in [(alice, 100), (bob, 200), (alice, 300), (bob, 400)] {
            ledger
                .add(
                    user,
                    "Misc",
                    Money::from_cents(cents),
                    TransactionType::Expense,
                    date("2024-01-01"),
                )
                .unwrap();
        }

        let alice_rows = ledger.list(alice).unwrap();
        assert_eq!(alice_rows.len(), 2);
        assert!(alice_rows.iter().all(|t| t.user_id == alice));

        let bob_rows = ledger.list(bob).unwrap();
        assert_eq!(bob_rows.len(), 2);
        assert!(bob_rows.iter().all(|t| t.user_id == bob));
    }

    #[test]
    fn test_list_sorts_by_date_descending() {
        let (_temp_dir, store) = create_test_store();
        let ledger = LedgerService::new(&store);
        let user = UserId::new(1);

        for d in ["2024-01-01", "2024-03-01", "2024-02-01"] {
            ledger
                .add(
                    user,
                    "Misc",
                    Money::from_cents(100),
                    TransactionType::Expense,
                    date(d),
                )
                .unwrap();
        }

        let dates: Vec<NaiveDate> = ledger.list(user).unwrap().iter().map(|t| t.date).collect();
        assert_eq!(
            dates,
            vec![date("2024-03-01"), date("2024-02-01"), date("2024-01-01")]
        );
    }

    #[test]
    fn test_list_ties_keep_insertion_order() {
        let (_temp_dir, store) = create_test_store();
        let ledger = LedgerService::new(&store);
        let user = UserId::new(1);

        for category in ["first", "second", "third"] {
            ledger
                .add(
                    user,
                    category,
                    Money::from_cents(100),
                    TransactionType::Expense,
                    date("2024-06-15"),
                )
                .unwrap();
        }

        let categories: Vec<String> = ledger
            .list(user)
            .unwrap()
            .into_iter()
            .map(|t| t.category)
            .collect();
        assert_eq!(categories, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_add_rejects_sub_cent_amount() {
        let (_temp_dir, store) = create_test_store();
        let ledger = LedgerService::new(&store);

        let err = ledger
            .add(
                UserId::new(1),
                "Misc",
                Money::zero(),
                TransactionType::Expense,
                date("2024-01-01"),
            )
            .unwrap_err();

        assert!(err.is_validation());
        assert!(store.transactions.load().unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let (_temp_dir, store) = create_test_store();
        let ledger = LedgerService::new(&store);
        let user = UserId::new(1);

        ledger
            .add(
                user,
                "Misc",
                Money::from_cents(100),
                TransactionType::Expense,
                date("2024-01-01"),
            )
            .unwrap();

        ledger.delete(TransactionId::new(999)).unwrap();
        assert_eq!(ledger.list(user).unwrap().len(), 1);
    }

    #[test]
    fn test_add_then_delete_roundtrip() {
        let (_temp_dir, store) = create_test_store();
        let ledger = LedgerService::new(&store);
        let user = UserId::new(1);

        ledger
            .add(
                user,
                "Rent",
                Money::from_cents(100_000),
                TransactionType::Expense,
                date("2024-01-01"),
            )
            .unwrap();
        let before = ledger.list(user).unwrap();

        let added = ledger
            .add(
                user,
                "Coffee",
                Money::from_cents(450),
                TransactionType::Expense,
                date("2024-01-02"),
            )
            .unwrap();
        assert_eq!(ledger.list(user).unwrap().len(), 2);

        ledger.delete(added.id).unwrap();
        assert_eq!(ledger.list(user).unwrap(), before);
    }
}
