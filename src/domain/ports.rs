use super::money::MinorUnits;
use super::payout::{AccountId, BankAccountId, TransferReceipt};
use crate::error::ProviderError;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// The external payment platform: provisions connected payee accounts,
/// attaches bank details to them, and moves funds.
///
/// The admission logic never calls this directly; the engine drives it
/// after an evaluation approves.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    async fn create_account(
        &self,
        recipient_name: &str,
        email: &str,
    ) -> Result<AccountId, ProviderError>;

    async fn attach_bank_account(
        &self,
        account: &AccountId,
        routing_number: &str,
        account_number: &str,
    ) -> Result<BankAccountId, ProviderError>;

    async fn transfer(
        &self,
        destination: &AccountId,
        amount: MinorUnits,
    ) -> Result<TransferReceipt, ProviderError>;
}

pub type PaymentProviderBox = Box<dyn PaymentProvider>;
