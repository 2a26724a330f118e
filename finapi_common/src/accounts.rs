use crate::errors::LedgerError;
use crate::statement::Operation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// **A bank account**
///
/// The `tax_id` is the external lookup key and is immutable once the
/// account is created, as is the generated `id`. The statement is
/// append-only; it is only ever discarded together with the whole account.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    pub tax_id: String,
    pub name: String,
    pub statement: Vec<Operation>,
}

impl Account {
    fn new(tax_id: &str, name: &str) -> Self {
        Account {
            id: Uuid::new_v4(),
            tax_id: tax_id.to_string(),
            name: name.to_string(),
            statement: vec![],
        }
    }

    /// Appends an operation to the end of the account's statement.
    pub fn append(&mut self, operation: Operation) {
        self.statement.push(operation);
    }
}

/// **A type for managing accounts and their statements**
///
/// Maps a `String` tax id to an [`Account`].
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: BTreeMap<String, Account>,
}

impl AccountStore {
    /// Returns an empty instance of the [`AccountStore`] type
    pub fn new() -> Self {
        AccountStore {
            accounts: BTreeMap::new(),
        }
    }

    /// Whether an account with the given tax id exists
    pub fn exists(&self, tax_id: &str) -> bool {
        self.accounts.contains_key(tax_id)
    }

    /// Resolves a tax id to its account
    ///
    /// # Errors
    /// - Account doesn't exist, `LedgerError::CustomerNotFound`
    pub fn find_by_tax_id(&self, tax_id: &str) -> Result<&Account, LedgerError> {
        self.accounts
            .get(tax_id)
            .ok_or(LedgerError::CustomerNotFound(tax_id.to_string()))
    }

    /// Resolves a tax id to its account, mutably
    ///
    /// # Errors
    /// - Account doesn't exist, `LedgerError::CustomerNotFound`
    pub fn find_by_tax_id_mut(&mut self, tax_id: &str) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(tax_id)
            .ok_or(LedgerError::CustomerNotFound(tax_id.to_string()))
    }

    /// Creates a new account with a fresh unique id and an empty statement
    /// and inserts it into the store.
    ///
    /// A failed creation leaves the store untouched.
    ///
    /// # Errors
    /// - Tax id is already taken, `LedgerError::AlreadyExists`
    pub fn create(&mut self, tax_id: &str, name: &str) -> Result<&Account, LedgerError> {
        if self.exists(tax_id) {
            return Err(LedgerError::AlreadyExists(tax_id.to_string()));
        }

        let account = Account::new(tax_id, name);
        Ok(self
            .accounts
            .entry(tax_id.to_string())
            .or_insert(account))
    }

    /// Removes the account with the given tax id and returns it.
    ///
    /// Deletion is keyed by the stable tax id, never by position.
    /// No other accounts are affected.
    ///
    /// # Errors
    /// - Account doesn't exist, `LedgerError::CustomerNotFound`
    pub fn delete(&mut self, tax_id: &str) -> Result<Account, LedgerError> {
        self.accounts
            .remove(tax_id)
            .ok_or(LedgerError::CustomerNotFound(tax_id.to_string()))
    }

    /// All accounts, ordered by tax id
    pub fn all(&self) -> Vec<&Account> {
        self.accounts.values().collect()
    }
}
