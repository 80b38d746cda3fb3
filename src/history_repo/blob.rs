// BLOB version prefix helpers. [version: u8][wincode payload].
// Event-count mappings (hourly summary, anomaly events) are stored as Vec<EventCount>.

use std::collections::BTreeMap;

use crate::models::EventCount;

pub(super) const BLOB_VERSION: u8 = 1;

pub(super) fn with_version_prefix(version: u8, payload: Vec<u8>) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + payload.len());
    out.push(version);
    out.extend_from_slice(&payload);
    out
}

/// Payload after the version byte; any other leading byte is an error.
pub(super) fn blob_payload(bytes: &[u8], expected_version: u8) -> anyhow::Result<&[u8]> {
    match bytes.split_first() {
        Some((&version, payload)) if version == expected_version => Ok(payload),
        Some((&version, _)) => anyhow::bail!(
            "unsupported BLOB version {}, expected {}",
            version,
            expected_version
        ),
        None => anyhow::bail!("empty BLOB"),
    }
}

pub(super) fn encode_counts(map: &BTreeMap<String, i64>) -> anyhow::Result<Vec<u8>> {
    let payload = wincode::serialize(&EventCount::from_map(map))
        .map_err(|e| anyhow::anyhow!("wincode: {}", e))?;
    Ok(with_version_prefix(BLOB_VERSION, payload))
}

pub(super) fn decode_counts(bytes: &[u8]) -> anyhow::Result<BTreeMap<String, i64>> {
    let counts: Vec<EventCount> = wincode::deserialize(blob_payload(bytes, BLOB_VERSION)?)
        .map_err(|e| anyhow::anyhow!("wincode deserialize event counts: {}", e))?;
    Ok(EventCount::into_map(counts))
}
