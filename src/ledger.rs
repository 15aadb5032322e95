//! The transaction ledger, the core of the application.
//!
//! This module contains:
//! - The `Transaction` model and `TransactionKind` for classifying new entries
//! - The `Ledger`, which exclusively owns the ordered transaction sequence
//!   and the store it is persisted to
//! - The derived `Totals` (balance, income and expense)

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, store::BlobStore};

/// The identifier assigned to a transaction when it is created.
///
/// Derived from the creation time but treated as opaque everywhere else.
pub type TransactionId = i64;

/// The store key under which the whole transaction sequence is persisted.
pub const TRANSACTIONS_KEY: &str = "transactions";

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// The sign of `amount` carries the kind: income is positive, expense is
/// negative. The magnitude is always the user-entered amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// What the money was earned or spent on.
    pub name: String,
    /// The signed amount of money.
    pub amount: f64,
}

/// Whether a new transaction records money earned or money spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned: stored with a positive amount.
    Income,
    /// Money spent: stored with a negative amount.
    Expense,
}

/// The aggregates derived from the transaction sequence, each rounded to two
/// decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    /// The sum of all transaction amounts.
    pub balance: f64,
    /// The sum of all positive amounts.
    pub income: f64,
    /// The absolute value of the sum of all negative amounts.
    pub expense: f64,
}

/// The owning aggregate of all transactions plus their persistent store.
///
/// Every mutating operation rewrites the full serialized sequence to the
/// store before returning; the store is read only by [Ledger::load]. No other
/// component mutates the sequence.
#[derive(Debug)]
pub struct Ledger<S: BlobStore> {
    transactions: Vec<Transaction>,
    store: S,
}

impl<S: BlobStore> Ledger<S> {
    /// Load the ledger from `store`.
    ///
    /// A missing or unparseable blob yields an empty ledger rather than an
    /// error.
    pub fn load(store: S) -> Self {
        let transactions = match store.get(TRANSACTIONS_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|error| {
                tracing::warn!("could not parse the stored transactions, starting empty: {error}");
                Vec::new()
            }),
            None => Vec::new(),
        };

        Self {
            transactions,
            store,
        }
    }

    /// The transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The current position of the transaction with `id`.
    ///
    /// Positions shift when earlier entries are removed, so the result is
    /// only valid until the next mutation.
    pub fn position_of(&self, id: TransactionId) -> Option<usize> {
        self.transactions
            .iter()
            .position(|transaction| transaction.id == id)
    }

    /// Record a new transaction at the end of the sequence and persist.
    ///
    /// The stored amount is the magnitude of `raw_amount`, negated for
    /// [TransactionKind::Expense]. A zero amount is accepted.
    ///
    /// # Errors
    /// Returns [Error::EmptyName] if `name` is empty after trimming
    /// whitespace, or [Error::InvalidAmount] if `raw_amount` is NaN or
    /// infinite. The sequence is unchanged on error.
    pub fn add(
        &mut self,
        name: &str,
        raw_amount: f64,
        kind: TransactionKind,
    ) -> Result<Transaction, Error> {
        let name = validate_name(name)?;
        let magnitude = validate_amount(raw_amount)?;

        let amount = match kind {
            TransactionKind::Income => magnitude,
            TransactionKind::Expense => -magnitude,
        };

        let transaction = Transaction {
            id: self.next_id(),
            name,
            amount,
        };

        self.transactions.push(transaction.clone());
        self.persist()?;

        Ok(transaction)
    }

    /// Replace the name and magnitude of the transaction at `index`, keeping
    /// its kind: income stays income and expense stays expense, whatever the
    /// sign of `new_raw_amount`. The sign of a zero amount counts as
    /// positive.
    ///
    /// # Errors
    /// Returns [Error::IndexOutOfRange] if `index` is not a valid position,
    /// or [Error::EmptyName]/[Error::InvalidAmount] under the same rules as
    /// [Ledger::add]. The sequence is unchanged on error.
    pub fn update(
        &mut self,
        index: usize,
        new_name: &str,
        new_raw_amount: f64,
    ) -> Result<Transaction, Error> {
        if index >= self.transactions.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.transactions.len(),
            });
        }

        let name = validate_name(new_name)?;
        let magnitude = validate_amount(new_raw_amount)?;

        let transaction = &mut self.transactions[index];
        transaction.name = name;
        transaction.amount = if transaction.amount < 0.0 {
            -magnitude
        } else {
            magnitude
        };
        let transaction = transaction.clone();

        self.persist()?;

        Ok(transaction)
    }

    /// Remove the transaction at `index`, shifting every later entry one
    /// position to the left, and persist.
    ///
    /// # Errors
    /// Returns [Error::IndexOutOfRange] if `index` is not a valid position,
    /// leaving the sequence unchanged.
    pub fn remove(&mut self, index: usize) -> Result<(), Error> {
        if index >= self.transactions.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.transactions.len(),
            });
        }

        self.transactions.remove(index);
        self.persist()
    }

    /// Remove every transaction unconditionally and persist the empty
    /// sequence.
    ///
    /// # Errors
    /// Returns an error only if the empty sequence could not be persisted.
    pub fn clear(&mut self) -> Result<(), Error> {
        self.transactions.clear();
        self.persist()
    }

    /// Compute the balance, income and expense totals for the current state.
    ///
    /// Zero amounts contribute to neither income nor expense.
    pub fn totals(&self) -> Totals {
        let amounts = self.transactions.iter().map(|transaction| transaction.amount);

        let balance: f64 = amounts.clone().sum();
        let income: f64 = amounts.clone().filter(|amount| *amount > 0.0).sum();
        let expense: f64 = amounts.filter(|amount| *amount < 0.0).sum();

        Totals {
            balance: round_to_cents(balance),
            income: round_to_cents(income),
            expense: round_to_cents(expense.abs()),
        }
    }

    /// Write the full serialized sequence to the store.
    fn persist(&mut self) -> Result<(), Error> {
        let raw = serde_json::to_string(&self.transactions)
            .map_err(|error| Error::Serialization(error.to_string()))?;

        self.store.set(TRANSACTIONS_KEY, &raw)
    }

    /// A fresh ID: the creation time in Unix milliseconds, bumped past the
    /// newest held ID if the clock has not advanced since.
    fn next_id(&self) -> TransactionId {
        let now = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as TransactionId;

        match self.transactions.iter().map(|t| t.id).max() {
            Some(newest) if now <= newest => newest + 1,
            _ => now,
        }
    }
}

fn validate_name(name: &str) -> Result<String, Error> {
    let name = name.trim();

    if name.is_empty() {
        return Err(Error::EmptyName);
    }

    Ok(name.to_owned())
}

fn validate_amount(raw_amount: f64) -> Result<f64, Error> {
    if !raw_amount.is_finite() {
        return Err(Error::InvalidAmount);
    }

    Ok(raw_amount.abs())
}

/// Round to two decimal places.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}







#[cfg(test)]
mod position_of_tests {
    use crate::store::MemoryBlobStore;

    use super::{Ledger, TransactionKind};

    #[test]
    fn finds_the_current_position() {
        let mut ledger = Ledger::load(MemoryBlobStore::new());
        ledger.add("First", 1.0, TransactionKind::Income).unwrap();
        let second = ledger.add("Second", 2.0, TransactionKind::Income).unwrap();

        assert_eq!(ledger.position_of(second.id), Some(1));

        ledger.remove(0).unwrap();

        assert_eq!(ledger.position_of(second.id), Some(0));
    }

    #[test]
    fn unknown_id_has_no_position() {
        let ledger = Ledger::load(MemoryBlobStore::new());

        assert_eq!(ledger.position_of(42), None);
    }
}
