use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct OAuthConfig {
    #[serde(default)]
    pub linux_do: OAuthProviderConfig,
    #[serde(default)]
    pub feishu: OAuthProviderConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct OAuthProviderConfig {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub redirect_uri: String,
}

impl OAuthProviderConfig {
    /// Whether the auth subsystem should offer this provider at all.
    pub fn is_configured(&self) -> bool {
        !self.client_id.trim().is_empty() && !self.client_secret.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::OAuthProviderConfig;

    #[test]
    fn is_configured_requires_id_and_secret() {
        let blank = OAuthProviderConfig::default();
        let id_only = OAuthProviderConfig {
            client_id: "abc".to_string(),
            ..Default::default()
        };
        let complete = OAuthProviderConfig {
            client_id: "abc".to_string(),
            client_secret: "shh".to_string(),
            redirect_uri: "http://localhost:5173/auth/callback".to_string(),
        };

        assert!(!blank.is_configured());
        assert!(!id_only.is_configured());
        assert!(complete.is_configured());
    }

    #[test]
    fn whitespace_only_credentials_do_not_count() {
        let padded = OAuthProviderConfig {
            client_id: "  ".to_string(),
            client_secret: "shh".to_string(),
            ..Default::default()
        };

        assert!(!padded.is_configured());
    }
}
