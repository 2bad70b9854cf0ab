// 💳 Account - PIN-gated balance with deposit / withdraw / change-PIN
//
// Every operation checks the PIN first. Failures never touch state.
// Success and failure both carry the human-readable message callers rely on:
// Ok(message) for success, Err(AccountError) whose Display is the failure text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

pub const INVALID_PIN_MESSAGE: &str = "Invalid PIN.";
pub const INSUFFICIENT_FUNDS_MESSAGE: &str =
    "Withdrawal amount exceeds account balance. Transaction cancelled.";
pub const PIN_CHANGED_MESSAGE: &str = "PIN successfully changed!";

// ============================================================================
// ACCOUNT ERROR
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountError {
    /// Supplied PIN does not match the stored one
    InvalidPin,

    /// Withdrawal larger than the current balance
    InsufficientFunds,
}

impl AccountError {
    pub fn message(&self) -> &'static str {
        match self {
            AccountError::InvalidPin => INVALID_PIN_MESSAGE,
            AccountError::InsufficientFunds => INSUFFICIENT_FUNDS_MESSAGE,
        }
    }
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AccountError {}

pub type AccountResult = Result<String, AccountError>;

/// Collapse an account result into the plain message, success or failure.
pub fn into_message(result: AccountResult) -> String {
    match result {
        Ok(message) => message,
        Err(err) => err.to_string(),
    }
}

// ============================================================================
// LEDGER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Deposit,
    Withdrawal,
    PinChange,
}

/// One successful operation. Append-only, failed attempts are never recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub kind: EntryKind,

    /// Amount moved (None for PIN changes)
    pub amount: Option<f64>,

    /// Balance right after the operation
    pub balance_after: f64,

    pub recorded_at: DateTime<Utc>,
}

/// PIN-free view of an account, safe to serialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub id: String,
    pub balance: f64,
    pub opened_at: DateTime<Utc>,
    pub history: Vec<LedgerEntry>,
}

// ============================================================================
// ACCOUNT
// ============================================================================

#[derive(Clone)]
pub struct Account<P> {
    id: String,
    pin: P,
    balance: f64,
    opened_at: DateTime<Utc>,
    history: Vec<LedgerEntry>,
}

impl<P> Account<P> {
    /// Open an account with a zero balance
    pub fn new(pin: P) -> Self {
        Self::with_balance(pin, 0.0)
    }

    /// Open an account with an initial balance
    pub fn with_balance(pin: P, balance: f64) -> Self {
        let account = Account {
            id: uuid::Uuid::new_v4().to_string(),
            pin,
            balance,
            opened_at: Utc::now(),
            history: Vec::new(),
        };
        debug!(account_id = %account.id, balance, "account opened");
        account
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn history(&self) -> &[LedgerEntry] {
        &self.history
    }

    fn verify<Q>(&self, pin: &Q) -> Result<(), AccountError>
    where
        P: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let stored: &Q = self.pin.borrow();
        if stored == pin {
            Ok(())
        } else {
            warn!(account_id = %self.id, "rejected: invalid PIN");
            Err(AccountError::InvalidPin)
        }
    }

    fn record(&mut self, kind: EntryKind, amount: Option<f64>) {
        self.history.push(LedgerEntry {
            kind,
            amount,
            balance_after: self.balance,
            recorded_at: Utc::now(),
        });
    }

    /// Current balance formatted as `$<balance>`
    pub fn check_balance<Q>(&self, pin: &Q) -> AccountResult
    where
        P: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.verify(pin)?;
        Ok(format!("${}", self.balance))
    }

    /// Add `amount` to the balance. The amount is not validated.
    pub fn deposit<Q>(&mut self, pin: &Q, amount: f64) -> AccountResult
    where
        P: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.verify(pin)?;
        self.balance += amount;
        self.record(EntryKind::Deposit, Some(amount));
        debug!(account_id = %self.id, amount, balance = self.balance, "deposit");

        Ok(format!(
            "Succesfully deposited ${}. Current balance: ${}.",
            amount, self.balance
        ))
    }

    /// Subtract `amount` unless it exceeds the balance (rejected, never clamped)
    pub fn withdraw<Q>(&mut self, pin: &Q, amount: f64) -> AccountResult
    where
        P: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.verify(pin)?;
        if amount > self.balance {
            warn!(account_id = %self.id, amount, balance = self.balance, "rejected: insufficient funds");
            return Err(AccountError::InsufficientFunds);
        }

        self.balance -= amount;
        self.record(EntryKind::Withdrawal, Some(amount));
        debug!(account_id = %self.id, amount, balance = self.balance, "withdrawal");

        Ok(format!(
            "Succesfully withdrew ${}. Current balance: ${}.",
            amount, self.balance
        ))
    }

    pub fn change_pin<Q>(&mut self, old_pin: &Q, new_pin: P) -> AccountResult
    where
        P: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.verify(old_pin)?;
        self.pin = new_pin;
        self.record(EntryKind::PinChange, None);
        debug!(account_id = %self.id, "PIN changed");

        Ok(PIN_CHANGED_MESSAGE.to_string())
    }

    /// Serializable view of the account; needs the PIN like any balance read
    pub fn snapshot<Q>(&self, pin: &Q) -> Result<AccountSnapshot, AccountError>
    where
        P: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.verify(pin)?;
        Ok(AccountSnapshot {
            id: self.id.clone(),
            balance: self.balance,
            opened_at: self.opened_at,
            history: self.history.clone(),
        })
    }

    /// Wrap for use from several threads
    pub fn into_shared(self) -> SharedAccount<P> {
        SharedAccount {
            inner: Arc::new(RwLock::new(self)),
        }
    }
}

// The PIN stays out of debug output.
impl<P> fmt::Debug for Account<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("opened_at", &self.opened_at)
            .field("entries", &self.history.len())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// SHARED ACCOUNT
// ============================================================================

/// One account behind a lock. Clones are handles to the same account.
pub struct SharedAccount<P> {
    inner: Arc<RwLock<Account<P>>>,
}

impl<P> Clone for SharedAccount<P> {
    fn clone(&self) -> Self {
        SharedAccount {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> SharedAccount<P> {
    pub fn new(account: Account<P>) -> Self {
        account.into_shared()
    }

    pub fn check_balance<Q>(&self, pin: &Q) -> AccountResult
    where
        P: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let account = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        account.check_balance(pin)
    }

    pub fn deposit<Q>(&self, pin: &Q, amount: f64) -> AccountResult
    where
        P: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let mut account = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        account.deposit(pin, amount)
    }

    pub fn withdraw<Q>(&self, pin: &Q, amount: f64) -> AccountResult
    where
        P: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let mut account = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        account.withdraw(pin, amount)
    }

    pub fn change_pin<Q>(&self, old_pin: &Q, new_pin: P) -> AccountResult
    where
        P: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let mut account = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        account.change_pin(old_pin, new_pin)
    }

    pub fn snapshot<Q>(&self, pin: &Q) -> Result<AccountSnapshot, AccountError>
    where
        P: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let account = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        account.snapshot(pin)
    }
}

// ============================================================================
// TESTS
// ============================================================================
