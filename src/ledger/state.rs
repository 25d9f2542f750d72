//! Core ledger state: one owner, one balance, one event log.
//!
//! # Responsibilities
//! - Enforce the owner check before every mutation
//! - Apply deposit/withdraw/double with checked arithmetic
//! - Append one event per successful mutation
//!
//! The hosting environment executes each call atomically end to end, so the
//! ledger itself carries no locking; `local.rs` supplies the mutex when the
//! ledger is shared in-process.

use alloy::primitives::{Address, U256};

use crate::ledger::types::{LedgerError, LedgerEvent, LedgerResult};

/// Single-owner balance ledger.
#[derive(Debug, Clone)]
pub struct Ledger {
    /// Set once at construction, immutable thereafter.
    owner: Address,
    /// Current balance in the ledger's native unit (wei).
    balance: U256,
    /// Append-only log of emitted events, oldest first.
    events: Vec<LedgerEvent>,
}

impl Ledger {
    /// Construct a ledger with its owner and initial balance.
    pub fn new(owner: Address, initial_balance: U256) -> Self {
        Self {
            owner,
            balance: initial_balance,
            events: Vec::new(),
        }
    }

    /// The owner identity.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Current balance. Side-effect free, callable by anyone.
    pub fn balance(&self) -> U256 {
        self.balance
    }

    /// Events emitted so far, oldest first.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Add `amount` to the balance. Owner only.
    pub fn deposit(&mut self, caller: Address, amount: U256) -> LedgerResult<()> {
        self.require_owner(caller)?;

        let prior = self.balance;
        let next = prior.checked_add(amount).ok_or(LedgerError::Overflow)?;
        self.balance = next;

        // Post-condition double-check; a violation is an invariant break,
        // not a recoverable error.
        assert_eq!(self.balance, prior + amount, "deposit post-condition violated");

        self.events.push(LedgerEvent::Deposit { amount });
        tracing::debug!(amount = %amount, balance = %self.balance, "deposit applied");
        Ok(())
    }

    /// Subtract `amount` from the balance. Owner only, rejected before any
    /// state change when it would go negative.
    pub fn withdraw(&mut self, caller: Address, amount: U256) -> LedgerResult<()> {
        self.require_owner(caller)?;

        let prior = self.balance;
        if amount > prior {
            return Err(LedgerError::InsufficientBalance {
                balance: prior,
                amount,
            });
        }
        self.balance = prior - amount;

        assert_eq!(self.balance, prior - amount, "withdraw post-condition violated");

        self.events.push(LedgerEvent::Withdraw { amount });
        tracing::debug!(amount = %amount, balance = %self.balance, "withdraw applied");
        Ok(())
    }

    /// Multiply the balance by two. Owner only.
    pub fn double_balance(&mut self, caller: Address) -> LedgerResult<()> {
        self.require_owner(caller)?;

        let next = self
            .balance
            .checked_mul(U256::from(2))
            .ok_or(LedgerError::Overflow)?;
        self.balance = next;

        self.events.push(LedgerEvent::BalanceDoubled { new_balance: next });
        tracing::debug!(balance = %next, "balance doubled");
        Ok(())
    }

    fn require_owner(&self, caller: Address) -> LedgerResult<()> {
        if caller != self.owner {
            return Err(LedgerError::Unauthorized);
        }
        Ok(())
    }
}
