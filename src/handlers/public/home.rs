/// GET / - Liveness text
pub async fn home() -> &'static str {
    "UniCRM API is running"
}
