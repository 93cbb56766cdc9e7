// System introspection helpers
// Hostname is re-read on every call; callers must not cache it.

use chrono::{SecondsFormat, Utc};

const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Machine network hostname, with a stable fallback when unavailable
pub fn hostname() -> String {
    ::hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Current time as an ISO-8601 UTC string with millisecond precision,
/// e.g. `2024-01-01T00:00:00.000Z`
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Resident set size of this process in whole MiB, rounded to nearest
pub fn memory_mib() -> u64 {
    memory_stats::memory_stats()
        .map(|usage| round_to_mib(usage.physical_mem as u64))
        .unwrap_or(0)
}

fn round_to_mib(bytes: u64) -> u64 {
    (bytes + BYTES_PER_MIB / 2) / BYTES_PER_MIB
}
