use crate::domain::money::MinorUnits;
use crate::error::PayoutError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a connected account provisioned by the payment
/// provider to receive funds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a bank account attached to a connected account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BankAccountId(pub String);

impl fmt::Display for BankAccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of a payout batch: who to pay, where, and how much.
///
/// The amount is carried in major units as submitted (e.g. `120.00`
/// dollars) and converted to minor units with [`Self::amount_minor`]
/// before it reaches the admission check.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PayoutRequest {
    pub name: String,
    pub email: String,
    pub routing_number: String,
    pub account_number: String,
    pub amount: Decimal,
}

impl PayoutRequest {
    pub fn amount_minor(&self) -> Result<MinorUnits, PayoutError> {
        MinorUnits::from_major(self.amount)
    }
}

/// Confirmation of a completed transfer, as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferReceipt {
    pub id: String,
    pub destination: AccountId,
    pub amount: MinorUnits,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_request_deserialization() {
        let csv = "name, email, routing_number, account_number, amount\n\
                   John Doe, john.doe@example.com, 110000000, 000123456789, 120.00";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let mut iter = reader.deserialize();

        let result: PayoutRequest = iter
            .next()
            .unwrap()
            .expect("Failed to deserialize payout request");

        assert_eq!(result.name, "John Doe");
        assert_eq!(result.routing_number, "110000000");
        assert_eq!(result.amount, dec!(120.00));
        assert_eq!(result.amount_minor().unwrap(), MinorUnits::new(12000));
    }

    #[test]
    fn test_request_with_negative_amount_fails_conversion() {
        let request = PayoutRequest {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            routing_number: "110000000".to_string(),
            account_number: "000123456789".to_string(),
            amount: dec!(-5.00),
        };
        assert!(request.amount_minor().is_err());
    }
}
