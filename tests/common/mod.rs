use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes a payout batch CSV with `rows` identical-amount payouts to
/// distinct recipients, using the sandbox's test banking details.
pub fn generate_batch(path: &Path, rows: usize, amount: &str) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["name", "email", "routing_number", "account_number", "amount"])?;

    for i in 1..=rows {
        let name = format!("Payee {i}");
        let email = format!("payee{i}@example.com");
        wtr.write_record([
            name.as_str(),
            email.as_str(),
            "110000000",
            "000123456789",
            amount,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
