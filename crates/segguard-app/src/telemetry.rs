use segguard_types::AgentGuid;
use serde::Deserialize;
use std::net::IpAddr;
use thiserror::Error;

/// Structural problems with an inbound telemetry record. No partial
/// recovery is attempted; the record is rejected as a whole.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("malformed scan telemetry: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("scan telemetry has an empty monkey_guid")]
    EmptyGuid,
    #[error("scan telemetry target '{ip_addr}' is not an IP address")]
    InvalidTargetIp {
        ip_addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Typed scan request extracted from one telemetry record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanRequest {
    pub agent_guid: AgentGuid,
    pub target_ip: IpAddr,
}

// Wire shape of a SCAN telemetry record. Agents send more metadata than
// this; unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct RawScanTelemetry {
    monkey_guid: String,
    data: RawScanData,
}

#[derive(Debug, Deserialize)]
struct RawScanData {
    machine: RawScanMachine,
}

#[derive(Debug, Deserialize)]
struct RawScanMachine {
    ip_addr: String,
}

/// Validate a loose scan-telemetry payload into a typed request.
pub fn parse_scan_telemetry(payload: &serde_json::Value) -> Result<ScanRequest, TelemetryError> {
    let raw: RawScanTelemetry = serde_json::from_value(payload.clone())?;

    if raw.monkey_guid.trim().is_empty() {
        return Err(TelemetryError::EmptyGuid);
    }

    let ip_text = raw.data.machine.ip_addr;
    let target_ip = ip_text
        .parse()
        .map_err(|source| TelemetryError::InvalidTargetIp {
            ip_addr: ip_text.clone(),
            source,
        })?;

    Ok(ScanRequest {
        agent_guid: AgentGuid::new(raw.monkey_guid),
        target_ip,
    })
}
