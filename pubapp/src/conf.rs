use pubclient::DEFAULT_BASE_URL;

/// The API base URL, fixed when the bundle is built.
pub fn api_base_url() -> &'static str {
    option_env!("PUBLISHER_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}
