use crate::error::ScanError;
use crate::telemetry::{ScanRequest, parse_scan_telemetry};
use segguard_domain::model::SegmentGroup;
use segguard_domain::{detect_violations, segmentation_done_detections};
use segguard_store::{AgentStore, FindingStore};
use segguard_types::AgentGuid;
use tracing::{debug, info};

/// Everything the handlers need from the host: the two store seams and the
/// resolved policy. Segment groups are injected explicitly; nothing here
/// reads process-wide state.
pub struct ScanContext<'a, A: AgentStore, F: FindingStore> {
    pub agents: &'a A,
    pub findings: &'a F,
    pub segment_groups: &'a [SegmentGroup],
}

/// Handle one loose scan-telemetry payload as it arrives off the wire:
/// validate it into a typed request, then evaluate and record.
pub fn handle_scan_payload<A: AgentStore, F: FindingStore>(
    ctx: &ScanContext<'_, A, F>,
    payload: &serde_json::Value,
) -> Result<(), ScanError> {
    let request = parse_scan_telemetry(payload)?;
    handle_scan_telemetry(ctx, &request)
}

/// Handle one scan-telemetry record: resolve the reporting agent, evaluate
/// every segment pair implied by policy, and record each positive pair.
///
/// Runs synchronously on the caller's execution context and holds no state
/// across invocations.
pub fn handle_scan_telemetry<A: AgentStore, F: FindingStore>(
    ctx: &ScanContext<'_, A, F>,
    request: &ScanRequest,
) -> Result<(), ScanError> {
    let agent = ctx.agents.agent_by_guid(&request.agent_guid)?;
    let detections = detect_violations(&agent, request.target_ip, ctx.segment_groups)?;

    debug!(
        agent = %agent.guid,
        target = %request.target_ip,
        detections = detections.len(),
        "scan telemetry evaluated"
    );

    for detection in detections {
        info!(pair = %detection.subnets, "segmentation violation recorded");
        ctx.findings.create_or_add_to_existing_finding(
            detection.subnets,
            detection.status,
            detection.event,
        )?;
    }

    Ok(())
}

/// Record `Passed` findings once an agent reports that its cross-segment
/// probing is finished.
pub fn handle_segmentation_done<A: AgentStore, F: FindingStore>(
    ctx: &ScanContext<'_, A, F>,
    agent_guid: &AgentGuid,
) -> Result<(), ScanError> {
    let agent = ctx.agents.agent_by_guid(agent_guid)?;
    let detections = segmentation_done_detections(&agent, ctx.segment_groups)?;

    debug!(
        agent = %agent.guid,
        detections = detections.len(),
        "segmentation probing finished"
    );

    for detection in detections {
        ctx.findings.create_or_add_to_existing_finding(
            detection.subnets,
            detection.status,
            detection.event,
        )?;
    }

    Ok(())
}
