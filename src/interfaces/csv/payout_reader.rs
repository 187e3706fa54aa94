use crate::domain::payout::PayoutRequest;
use crate::error::{PayoutError, Result};
use std::io::Read;

/// Reads payout requests from a CSV source.
///
/// Wraps `csv::Reader` and yields an iterator of `Result<PayoutRequest>`
/// so a malformed row surfaces as an error without stopping the batch.
pub struct PayoutReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PayoutReader<R> {
    /// Creates a new `PayoutReader` from any `Read` source (e.g. File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<PayoutRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PayoutError::from))
    }
}
