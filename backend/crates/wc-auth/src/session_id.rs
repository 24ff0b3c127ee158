use chrono::Utc;
use rand::Rng;

/// Local session identifier: `simple_{epoch millis}_{random fraction}`.
///
/// Not a security token. Nothing validates it; it only tags a login.
pub fn generate_local_session_id() -> String {
    let fraction: f64 = rand::rng().random();
    format!("simple_{}_{}", Utc::now().timestamp_millis(), fraction)
}
