//! GET / — basic liveness probe.

/// Handler: GET /
pub async fn health() -> &'static str {
    "AI App Builder server is running!"
}
