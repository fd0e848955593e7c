use super::*;

#[test]
fn endpoint_url_joins_base_and_path() {
    assert_eq!(
        endpoint_url("http://localhost:8000", "/api/auth/login"),
        "http://localhost:8000/api/auth/login"
    );
}

#[test]
fn endpoint_url_drops_trailing_slash_on_base() {
    assert_eq!(
        endpoint_url("https://api.example.com/", "/api/auth/register"),
        "https://api.example.com/api/auth/register"
    );
}

#[test]
fn default_base_url_is_local_backend() {
    if option_env!("SCREENWISE_API_URL").is_none() {
        assert_eq!(crate::config::API_BASE_URL, "http://localhost:8000");
    }
}
