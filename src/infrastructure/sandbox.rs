use crate::domain::money::MinorUnits;
use crate::domain::payout::{AccountId, BankAccountId, TransferReceipt};
use crate::domain::ports::PaymentProvider;
use crate::error::ProviderError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

const TRANSFER_DESCRIPTION: &str = "Payroll Payment";

#[derive(Debug, Clone)]
struct ConnectedAccount {
    recipient_name: String,
    email: String,
    bank_account: Option<BankAccountId>,
}

/// An in-memory simulated payment provider.
///
/// Behaves like the live platform's sandbox: it validates recipient
/// and banking details, provisions `acct_*` accounts, and debits
/// transfers from a platform funding balance. Needs no credentials,
/// so the demo binary and the test suite run hermetically.
#[derive(Clone)]
pub struct SandboxProvider {
    accounts: Arc<RwLock<HashMap<AccountId, ConnectedAccount>>>,
    funding: Arc<RwLock<u64>>,
    sequence: Arc<AtomicU64>,
}

impl SandboxProvider {
    /// Creates a sandbox with the given platform funding balance.
    pub fn with_funding(funding: MinorUnits) -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            funding: Arc::new(RwLock::new(funding.value())),
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Remaining platform balance, in minor units.
    pub async fn funding_balance(&self) -> MinorUnits {
        MinorUnits::new(*self.funding.read().await)
    }

    /// Registered recipient name and email for an account, if any.
    pub async fn recipient(&self, account: &AccountId) -> Option<(String, String)> {
        let accounts = self.accounts.read().await;
        accounts
            .get(account)
            .map(|entry| (entry.recipient_name.clone(), entry.email.clone()))
    }

    fn next_id(&self, prefix: &str) -> String {
        let n = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{prefix}_{n}")
    }
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[async_trait]
impl PaymentProvider for SandboxProvider {
    async fn create_account(
        &self,
        recipient_name: &str,
        email: &str,
    ) -> Result<AccountId, ProviderError> {
        if recipient_name.trim().is_empty() {
            return Err(ProviderError::InvalidRecipient(
                "recipient name is empty".to_string(),
            ));
        }
        if !email.contains('@') {
            return Err(ProviderError::InvalidRecipient(format!(
                "malformed email: {email}"
            )));
        }

        let id = AccountId(self.next_id("acct"));
        let mut accounts = self.accounts.write().await;
        accounts.insert(
            id.clone(),
            ConnectedAccount {
                recipient_name: recipient_name.to_string(),
                email: email.to_string(),
                bank_account: None,
            },
        );
        Ok(id)
    }

    async fn attach_bank_account(
        &self,
        account: &AccountId,
        routing_number: &str,
        account_number: &str,
    ) -> Result<BankAccountId, ProviderError> {
        if routing_number.len() != 9 || !all_digits(routing_number) {
            return Err(ProviderError::InvalidBankDetails(
                "routing number must be exactly 9 digits".to_string(),
            ));
        }
        if !(4..=17).contains(&account_number.len()) || !all_digits(account_number) {
            return Err(ProviderError::InvalidBankDetails(
                "account number must be 4 to 17 digits".to_string(),
            ));
        }

        let mut accounts = self.accounts.write().await;
        let entry = accounts
            .get_mut(account)
            .ok_or_else(|| ProviderError::UnknownDestination(account.to_string()))?;

        let id = BankAccountId(self.next_id("ba"));
        entry.bank_account = Some(id.clone());
        Ok(id)
    }

    async fn transfer(
        &self,
        destination: &AccountId,
        amount: MinorUnits,
    ) -> Result<TransferReceipt, ProviderError> {
        {
            let accounts = self.accounts.read().await;
            let entry = accounts
                .get(destination)
                .ok_or_else(|| ProviderError::UnknownDestination(destination.to_string()))?;
            if entry.bank_account.is_none() {
                return Err(ProviderError::InvalidBankDetails(format!(
                    "no bank account attached to {destination}"
                )));
            }
        }

        let mut funding = self.funding.write().await;
        if *funding < amount.value() {
            return Err(ProviderError::InsufficientFunds);
        }
        *funding -= amount.value();

        Ok(TransferReceipt {
            id: self.next_id("tr"),
            destination: destination.clone(),
            amount,
            description: TRANSFER_DESCRIPTION.to_string(),
        })
    }
}
