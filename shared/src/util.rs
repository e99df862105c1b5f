use chrono::{DateTime, Utc};
use rand::Rng;

/// Current UTC timestamp (milliseconds)
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current UTC time, the timestamp type stored on every record
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at shop scale)
pub fn snowflake_id() -> i64 {
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Prefixed record id, e.g. `order_123456789`
pub fn prefixed_id(prefix: &str) -> String {
    format!("{}_{}", prefix, snowflake_id())
}

/// Complaint tracking id: `CMP-` followed by 9 upper-case alphanumerics
pub fn tracking_id() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    format!("CMP-{}", suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowflake_ids_are_positive_and_safe() {
        let id = snowflake_id();
        assert!(id > 0);
        assert!(id < (1_i64 << 53));
    }

    #[test]
    fn test_prefixed_id() {
        let id = prefixed_id("pay");
        assert!(id.starts_with("pay_"));
        assert!(id[4..].parse::<i64>().is_ok());
    }

    #[test]
    fn test_tracking_id_format() {
        let id = tracking_id();
        assert_eq!(id.len(), 13);
        assert!(id.starts_with("CMP-"));
        assert!(
            id[4..]
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }
}
