use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paygate::application::engine::PayoutEngine;
use paygate::domain::admission::AdmissionConfig;
use paygate::domain::money::MinorUnits;
use paygate::domain::payout::{PayoutRequest, TransferReceipt};
use paygate::domain::ports::PaymentProviderBox;
use paygate::infrastructure::sandbox::SandboxProvider;
use paygate::interfaces::csv::payout_reader::PayoutReader;
use paygate::interfaces::csv::receipt_writer::ReceiptWriter;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payout batch CSV file
    input: PathBuf,

    /// Maximum number of payouts admitted per calendar day
    #[arg(long, default_value_t = 10)]
    daily_limit: u32,

    /// Per-payout ceiling, in major currency units
    #[arg(long, default_value = "150.00")]
    max_amount: Decimal,

    /// Sandbox platform funding balance, in major currency units
    #[arg(long, default_value = "10000.00")]
    funding: Decimal,

    /// Emit receipts as JSON lines instead of CSV
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays parseable receipt output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let max_amount = MinorUnits::from_major(cli.max_amount).into_diagnostic()?;
    let funding = MinorUnits::from_major(cli.funding).into_diagnostic()?;
    let config = AdmissionConfig::new(cli.daily_limit, max_amount).into_diagnostic()?;

    let provider: PaymentProviderBox = Box::new(SandboxProvider::with_funding(funding));
    let engine = PayoutEngine::new(provider, config);

    // Process the batch
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = PayoutReader::new(file);

    let mut receipts = Vec::new();
    for request in reader.requests() {
        match request {
            Ok(request) => match process_request(&engine, &request).await {
                Ok(receipt) => receipts.push(receipt),
                Err(e) => {
                    eprintln!("Error processing payout for {}: {}", request.email, e);
                }
            },
            Err(e) => {
                eprintln!("Error reading payout request: {}", e);
            }
        }
    }

    // Output completed transfers
    let stdout = io::stdout();
    if cli.json {
        let mut out = stdout.lock();
        for receipt in &receipts {
            serde_json::to_writer(&mut out, receipt).into_diagnostic()?;
            out.write_all(b"\n").into_diagnostic()?;
        }
    } else {
        let mut writer = ReceiptWriter::new(stdout.lock());
        writer.write_receipts(&receipts).into_diagnostic()?;
    }

    Ok(())
}

/// Onboards the recipient and sends the payout: create account,
/// attach bank, transfer.
async fn process_request(
    engine: &PayoutEngine,
    request: &PayoutRequest,
) -> paygate::error::Result<TransferReceipt> {
    let amount = request.amount_minor()?;
    let account = engine
        .onboard_recipient(
            &request.name,
            &request.email,
            &request.routing_number,
            &request.account_number,
        )
        .await?;
    engine.send_payout(&account, amount).await
}
