/// Liveness confirmation served at `/`.
pub const INDEX_BODY: &str = "The DB server appears to be working correctly.";

pub async fn index_handler() -> &'static str {
    INDEX_BODY
}
