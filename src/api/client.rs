/// Shared HTTP client used by the terminal commands.
pub fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(format!("idash/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
}
