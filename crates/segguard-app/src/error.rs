use crate::telemetry::TelemetryError;
use segguard_net::RangeError;
use segguard_store::StoreError;
use thiserror::Error;

/// Failure of one telemetry record.
///
/// Nothing here is retried: the record is dropped and the error surfaces
/// unchanged to the ingestion pipeline.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Range(#[from] RangeError),
}
