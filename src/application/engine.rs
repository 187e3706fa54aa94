use crate::domain::admission::{AdmissionConfig, AdmissionController, Decision};
use crate::domain::money::MinorUnits;
use crate::domain::payout::{AccountId, TransferReceipt};
use crate::domain::ports::PaymentProviderBox;
use crate::error::{PayoutError, Result};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// The main entry point for sending payouts.
///
/// `PayoutEngine` owns the payment provider port and the admission
/// controller. The controller sits behind a single mutex that is held
/// across the whole evaluate → transfer → record sequence: the
/// check-then-append is not atomic on its own, and two concurrent
/// payouts racing past the evaluation could otherwise jointly exceed
/// the daily limit.
pub struct PayoutEngine {
    provider: PaymentProviderBox,
    admission: Mutex<AdmissionController>,
}

impl PayoutEngine {
    pub fn new(provider: PaymentProviderBox, config: AdmissionConfig) -> Self {
        Self::with_controller(provider, AdmissionController::new(config))
    }

    /// Builds an engine over an existing controller, e.g. one seeded
    /// with history or kept per merchant.
    pub fn with_controller(provider: PaymentProviderBox, controller: AdmissionController) -> Self {
        Self {
            provider,
            admission: Mutex::new(controller),
        }
    }

    /// Provisions a connected account for a recipient and attaches
    /// their bank details to it.
    ///
    /// Provider errors propagate untouched.
    pub async fn onboard_recipient(
        &self,
        name: &str,
        email: &str,
        routing_number: &str,
        account_number: &str,
    ) -> Result<AccountId> {
        let account = self.provider.create_account(name, email).await?;
        let bank = self
            .provider
            .attach_bank_account(&account, routing_number, account_number)
            .await?;
        info!(%account, %bank, "recipient onboarded");
        Ok(account)
    }

    /// Sends a payout if the admission check approves it.
    ///
    /// On rejection the provider is never contacted. On approval the
    /// transfer runs, and only a successful transfer is recorded; a
    /// failed transfer leaves the history untouched.
    pub async fn send_payout(
        &self,
        destination: &AccountId,
        amount: MinorUnits,
    ) -> Result<TransferReceipt> {
        let mut admission = self.admission.lock().await;
        match admission.evaluate(amount) {
            Decision::Rejected { reason } => {
                warn!(%destination, %amount, %reason, "payout rejected");
                Err(PayoutError::Rejected(reason))
            }
            Decision::Approved => {
                let receipt = self.provider.transfer(destination, amount).await?;
                admission.record(amount, destination.clone());
                info!(%destination, %amount, transfer = %receipt.id, "payout completed");
                Ok(receipt)
            }
        }
    }
}
