use secrecy::{ExposeSecret, SecretString};

/// Treat an empty configured key the same as no key
///
/// The built-in configuration expands an unset `GEMINI_API_KEY` to `""`.
pub fn non_empty_secret(secret: Option<&SecretString>) -> Option<&str> {
    secret.map(ExposeSecret::expose_secret).filter(|key| !key.is_empty())
}
