//! OAuth2 クライアントアプリケーション DTO。

use serde::{Deserialize, Serialize};

use crate::error::SecurityError;

/// access_token_expire_time のデフォルト値（7200 秒 = 2 時間）。
fn default_access_token_expire_time() -> i64 {
    7200
}

/// refresh_token_expire_time のデフォルト値（604800 秒 = 7 日）。
fn default_refresh_token_expire_time() -> i64 {
    604_800
}

/// Application は OAuth2 クライアントの資格情報とトークン有効期間を運ぶ DTO。
///
/// 構築時に不変条件は強制しない。整合性が必要な箇所では呼び出し側が
/// [`Application::validate`] を呼ぶ。
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// クライアント ID。
    pub client_id: String,

    /// クライアントシークレット。Debug 出力では `[REDACTED]` となる。
    pub client_secret: String,

    /// アクセストークン有効期間（秒）。
    #[serde(default = "default_access_token_expire_time")]
    pub access_token_expire_time: i64,

    /// リフレッシュトークン有効期間（秒）。
    #[serde(default = "default_refresh_token_expire_time")]
    pub refresh_token_expire_time: i64,
}

impl Application {
    /// デフォルトの有効期間で Application を生成する。
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            access_token_expire_time: default_access_token_expire_time(),
            refresh_token_expire_time: default_refresh_token_expire_time(),
        }
    }

    /// アクセストークン有効期間を設定する。
    pub fn with_access_token_expire_time(mut self, secs: i64) -> Self {
        self.access_token_expire_time = secs;
        self
    }

    /// リフレッシュトークン有効期間を設定する。
    pub fn with_refresh_token_expire_time(mut self, secs: i64) -> Self {
        self.refresh_token_expire_time = secs;
        self
    }

    /// 有効期間と必須項目の整合性を検証する。
    ///
    /// - client_id は空であってはならない
    /// - 両有効期間は非負
    /// - リフレッシュトークンはアクセストークンより長生きする
    pub fn validate(&self) -> Result<(), SecurityError> {
        if self.client_id.is_empty() {
            return Err(SecurityError::MissingClientId);
        }
        if self.access_token_expire_time < 0 {
            return Err(SecurityError::NegativeExpiry("access_token_expire_time"));
        }
        if self.refresh_token_expire_time < 0 {
            return Err(SecurityError::NegativeExpiry("refresh_token_expire_time"));
        }
        if self.refresh_token_expire_time < self.access_token_expire_time {
            return Err(SecurityError::ExpiryOrdering);
        }
        Ok(())
    }
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("access_token_expire_time", &self.access_token_expire_time)
            .field("refresh_token_expire_time", &self.refresh_token_expire_time)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_default_lifetimes() {
        let app = Application::new("form-console", "s3cret");
        assert_eq!(app.client_id, "form-console");
        assert_eq!(app.client_secret, "s3cret");
        assert_eq!(app.access_token_expire_time, 7200);
        assert_eq!(app.refresh_token_expire_time, 604_800);
    }

    #[test]
    fn test_setters_read_back_exact_values() {
        let app = Application::new("c", "s")
            .with_access_token_expire_time(1800)
            .with_refresh_token_expire_time(86_400);
        assert_eq!(app.access_token_expire_time, 1800);
        assert_eq!(app.refresh_token_expire_time, 86_400);
    }

    #[test]
    fn test_field_mutation_is_uncoerced() {
        // 可変レコード: 設定した値がそのまま読み戻せる（丸めなし）
        let mut app = Application::new("c", "s");
        app.access_token_expire_time = 0;
        assert_eq!(app.access_token_expire_time, 0);
        app.client_secret = "rotated".to_string();
        assert_eq!(app.client_secret, "rotated");
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(Application::new("c", "s").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_client_id() {
        let app = Application::new("", "s");
        assert_eq!(app.validate(), Err(SecurityError::MissingClientId));
    }

    #[test]
    fn test_validate_rejects_negative_lifetimes() {
        let app = Application::new("c", "s").with_access_token_expire_time(-1);
        assert_eq!(
            app.validate(),
            Err(SecurityError::NegativeExpiry("access_token_expire_time"))
        );

        let app = Application::new("c", "s").with_refresh_token_expire_time(-1);
        assert_eq!(
            app.validate(),
            Err(SecurityError::NegativeExpiry("refresh_token_expire_time"))
        );
    }

    #[test]
    fn test_validate_rejects_inverted_lifetimes() {
        let app = Application::new("c", "s")
            .with_access_token_expire_time(3600)
            .with_refresh_token_expire_time(60);
        assert_eq!(app.validate(), Err(SecurityError::ExpiryOrdering));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let app = Application::new("form-console", "top-secret-value");
        let output = format!("{:?}", app);
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("top-secret-value"));
    }

    #[test]
    fn test_serde_defaults_applied() {
        let json = r#"{"client_id": "c", "client_secret": "s"}"#;
        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.access_token_expire_time, 7200);
        assert_eq!(app.refresh_token_expire_time, 604_800);
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = Application::new("c", "s").with_access_token_expire_time(900);
        let json = serde_json::to_string(&original).unwrap();
        let decoded: Application = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, original);
    }
}
