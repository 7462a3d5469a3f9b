//! Authentication response models.

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

/// Body of a successful `POST /services/auth/login` with `output_mode=json`.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "sessionKey", deserialize_with = "secret_from_string")]
    pub session_key: SecretString,
}

fn secret_from_string<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(SecretString::new(s.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_login_response_keeps_key_secret() {
        let resp: LoginResponse = serde_json::from_str(r#"{"sessionKey":"abc-123"}"#).unwrap();
        assert_eq!(resp.session_key.expose_secret(), "abc-123");
        assert!(!format!("{:?}", resp).contains("abc-123"));
    }

    #[test]
    fn test_login_response_missing_key_fails() {
        assert!(serde_json::from_str::<LoginResponse>(r#"{"messages":[]}"#).is_err());
    }
}
