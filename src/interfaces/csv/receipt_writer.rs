use crate::domain::payout::TransferReceipt;
use crate::error::Result;
use std::io::Write;

/// Writes completed transfer receipts as CSV.
pub struct ReceiptWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_receipts(&mut self, receipts: &[TransferReceipt]) -> Result<()> {
        for receipt in receipts {
            self.writer.serialize(receipt)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::MinorUnits;
    use crate::domain::payout::AccountId;

    #[test]
    fn test_writes_header_and_rows() {
        let receipts = vec![
            TransferReceipt {
                id: "tr_1".to_string(),
                destination: AccountId("acct_1".to_string()),
                amount: MinorUnits::new(12000),
                description: "Payroll Payment".to_string(),
            },
            TransferReceipt {
                id: "tr_2".to_string(),
                destination: AccountId("acct_2".to_string()),
                amount: MinorUnits::new(4550),
                description: "Payroll Payment".to_string(),
            },
        ];

        let mut buffer = Vec::new();
        let mut writer = ReceiptWriter::new(&mut buffer);
        writer.write_receipts(&receipts).unwrap();
        drop(writer);

        let output = String::from_utf8(buffer).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("id,destination,amount,description"));
        assert_eq!(lines.next(), Some("tr_1,acct_1,12000,Payroll Payment"));
        assert_eq!(lines.next(), Some("tr_2,acct_2,4550,Payroll Payment"));
    }

    #[test]
    fn test_empty_batch_writes_nothing() {
        let mut buffer = Vec::new();
        let mut writer = ReceiptWriter::new(&mut buffer);
        writer.write_receipts(&[]).unwrap();
        drop(writer);

        assert!(buffer.is_empty());
    }
}
