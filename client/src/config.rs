//! Build-time client configuration.

/// Base URL of the screening backend the auth calls are sent to.
///
/// Set `SCREENWISE_API_URL` when compiling the WASM bundle to point the
/// client elsewhere.
pub const API_BASE_URL: &str = match option_env!("SCREENWISE_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Product name shown in page titles and headers.
pub const PRODUCT_NAME: &str = "Screenwise";
