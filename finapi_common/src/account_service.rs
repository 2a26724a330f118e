use crate::accounts::{Account, AccountStore};
use crate::errors::LedgerError;
use crate::statement::{self, Operation};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Resolves customers, validates the one rule there is (insufficient funds),
/// and orchestrates reads and appends on each account's statement.
///
/// One instance owns the whole in-memory store; it is created at startup and
/// handed to the transport layer explicitly, never reached through a global.
pub struct AccountService {
    pub accounts: AccountStore,
}

impl AccountService {
    /// **Creates a new instance without any data.**
    pub fn new() -> Self {
        AccountService {
            accounts: AccountStore::new(),
        }
    }

    /// **Fetches an account's full statement, in insertion order**
    ///
    /// # Errors
    /// - Account doesn't exist, `LedgerError::CustomerNotFound`
    pub fn statement(&self, tax_id: &str) -> Result<&[Operation], LedgerError> {
        let account = self.accounts.find_by_tax_id(tax_id)?;
        Ok(&account.statement)
    }

    /// **Fetches the statement entries recorded on a single calendar day**
    ///
    /// `date` is parsed as `YYYY-MM-DD`; the comparison is by UTC calendar
    /// day only, the time of day is ignored.
    ///
    /// # Errors
    /// - Account doesn't exist, `LedgerError::CustomerNotFound`;
    /// - `date` cannot be parsed, `LedgerError::InvalidDate`.
    pub fn statement_by_date(
        &self,
        tax_id: &str,
        date: &str,
    ) -> Result<Vec<Operation>, LedgerError> {
        let account = self.accounts.find_by_tax_id(tax_id)?;
        let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| LedgerError::InvalidDate(date.to_string()))?;
        Ok(statement::filter_by_date(&account.statement, day))
    }

    /// **Fetches the account record**
    ///
    /// # Errors
    /// - Account doesn't exist, `LedgerError::CustomerNotFound`
    pub fn account(&self, tax_id: &str) -> Result<&Account, LedgerError> {
        self.accounts.find_by_tax_id(tax_id)
    }

    /// **Retrieves the balance of an account**
    ///
    /// The balance is recomputed from the statement on every call,
    /// never cached.
    ///
    /// # Errors
    /// - Account doesn't exist, `LedgerError::CustomerNotFound`
    pub fn balance_of(&self, tax_id: &str) -> Result<Decimal, LedgerError> {
        let account = self.accounts.find_by_tax_id(tax_id)?;
        Ok(statement::balance(&account.statement))
    }

    /// **Creates an account**
    ///
    /// # Errors
    /// - Tax id is already taken, `LedgerError::AlreadyExists`
    pub fn create_account(&mut self, tax_id: &str, name: &str) -> Result<&Account, LedgerError> {
        self.accounts.create(tax_id, name)
    }

    /// **Deposits funds**
    ///
    /// Appends a credit entry with the current timestamp. The amount is
    /// taken as given, with no sign validation.
    ///
    /// # Errors
    /// - Account doesn't exist, `LedgerError::CustomerNotFound`
    pub fn deposit(
        &mut self,
        tax_id: &str,
        amount: Decimal,
        description: Option<String>,
    ) -> Result<(), LedgerError> {
        let account = self.accounts.find_by_tax_id_mut(tax_id)?;
        account.append(Operation::credit(amount, description));
        Ok(())
    }

    /// **Withdraws funds**
    ///
    /// Appends a debit entry with the current timestamp. The balance check
    /// and the append happen under the same `&mut self` borrow, so nothing
    /// can interleave between them; a refused withdrawal appends nothing.
    ///
    /// # Errors
    /// - Account doesn't exist, `LedgerError::CustomerNotFound`;
    /// - Balance is lower than the requested amount,
    ///   `LedgerError::InsufficientFunds`.
    pub fn withdraw(&mut self, tax_id: &str, amount: Decimal) -> Result<(), LedgerError> {
        let account = self.accounts.find_by_tax_id_mut(tax_id)?;

        if statement::balance(&account.statement) < amount {
            return Err(LedgerError::InsufficientFunds {
                tax_id: tax_id.to_string(),
                requested: amount,
            });
        }

        account.append(Operation::debit(amount));
        Ok(())
    }

    /// **Updates the account holder's name**
    ///
    /// The tax id and the generated id are immutable; only the display
    /// name can change.
    ///
    /// # Errors
    /// - Account doesn't exist, `LedgerError::CustomerNotFound`
    pub fn update_account(&mut self, tax_id: &str, name: &str) -> Result<&Account, LedgerError> {
        let account = self.accounts.find_by_tax_id_mut(tax_id)?;
        account.name = name.to_string();
        Ok(account)
    }

    /// **Deletes an account and returns the remaining accounts**
    ///
    /// # Errors
    /// - Account doesn't exist, `LedgerError::CustomerNotFound`
    pub fn delete_account(&mut self, tax_id: &str) -> Result<Vec<Account>, LedgerError> {
        self.accounts.delete(tax_id)?;
        Ok(self.accounts.all().into_iter().cloned().collect())
    }

    /// **Fetches all accounts, ordered by tax id**
    pub fn all_accounts(&self) -> Vec<&Account> {
        self.accounts.all()
    }
}

impl Default for AccountService {
    fn default() -> Self {
        Self::new()
    }
}
