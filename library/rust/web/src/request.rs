use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// RequestContext はリクエストメタデータへの読み取りケイパビリティ。
///
/// ログ・監査・レート制御などの下流コンシューマは具体型ではなく
/// このトレイトに依存する。
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait RequestContext {
    /// クライアント IP アドレス。
    fn request_ip(&self) -> &str;

    /// リクエスト先ホスト。
    fn request_host(&self) -> &str;

    /// リクエスト対象（メソッドとパス）。
    fn request_target(&self) -> &str;

    /// User-Agent ヘッダー値。
    fn user_agent(&self) -> &str;

    /// スキーマ変更なしで付加できる追加情報マップ。
    fn additional_information(&self) -> &HashMap<String, serde_json::Value>;
}

/// RequestHeaders は抽出対象の HTTP ヘッダー名定数。
pub struct RequestHeaders;

impl RequestHeaders {
    pub const HOST: &'static str = "host";
    pub const USER_AGENT: &'static str = "user-agent";
    /// プロキシ経由時のクライアント IP（先頭エントリを優先する）
    pub const FORWARDED_FOR: &'static str = "x-forwarded-for";
}

/// RequestInfo は 1 リクエスト分の出所メタデータを保持する可変レコード。
///
/// スレッド間で共有する場合は外部同期が必要。通常は 1 リクエストの
/// 処理スコープに閉じて所有する。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestInfo {
    pub request_ip: String,
    pub request_host: String,
    pub request_target: String,
    pub user_agent: String,
    #[serde(default)]
    pub additional_information: HashMap<String, serde_json::Value>,
}

impl RequestInfo {
    /// 空のレコードを生成する。
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request_ip(mut self, ip: impl Into<String>) -> Self {
        self.request_ip = ip.into();
        self
    }

    pub fn with_request_host(mut self, host: impl Into<String>) -> Self {
        self.request_host = host.into();
        self
    }

    pub fn with_request_target(mut self, target: impl Into<String>) -> Self {
        self.request_target = target.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// 追加情報を登録する。既存キーは上書きされる。
    pub fn insert_info(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.additional_information.insert(key.into(), value.into());
    }

    /// ヘッダーペア一覧からリクエストメタデータを復元する。
    ///
    /// `x-forwarded-for` が存在する場合は先頭のアドレスをピアアドレスより
    /// 優先する。未知のヘッダーは無視する。
    pub fn from_header_pairs(
        peer_ip: impl Into<String>,
        target: impl Into<String>,
        headers: &[(String, String)],
    ) -> Self {
        let mut info = Self {
            request_ip: peer_ip.into(),
            request_target: target.into(),
            ..Self::default()
        };

        for (key, value) in headers {
            match key.to_lowercase().as_str() {
                RequestHeaders::HOST => info.request_host = value.clone(),
                RequestHeaders::USER_AGENT => info.user_agent = value.clone(),
                RequestHeaders::FORWARDED_FOR => {
                    if let Some(first) = value.split(',').next() {
                        let first = first.trim();
                        if !first.is_empty() {
                            info.request_ip = first.to_string();
                        }
                    }
                }
                _ => {}
            }
        }

        info
    }
}

impl RequestContext for RequestInfo {
    fn request_ip(&self) -> &str {
        &self.request_ip
    }

    fn request_host(&self) -> &str {
        &self.request_host
    }

    fn request_target(&self) -> &str {
        &self.request_target
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn additional_information(&self) -> &HashMap<String, serde_json::Value> {
        &self.additional_information
    }
}

// --- axum integration ---

#[cfg(feature = "axum")]
impl<S> axum::extract::FromRequestParts<S> for RequestInfo
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let headers: Vec<(String, String)> = parts
            .headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        // ピア IP は Parts からは得られないため x-forwarded-for 頼みとなる
        let target = format!("{} {}", parts.method, parts.uri.path());
        Ok(Self::from_header_pairs(String::new(), target, &headers))
    }
}
