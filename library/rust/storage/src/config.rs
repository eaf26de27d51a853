use serde::{Deserialize, Serialize};

use crate::provider::UploadProvider;

/// UploadConfig はアップロード先ストレージの接続設定。
///
/// 保存先ごとに必要な項目だけを埋める。検証は行わず、
/// 不足項目の扱いはアダプタ実装に委ねる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadConfig {
    pub provider: UploadProvider,

    /// LOCAL の場合の保存先ディレクトリ。
    pub local_dir: Option<String>,

    /// オブジェクトストレージのエンドポイント。
    pub endpoint: Option<String>,

    /// バケット名。
    pub bucket: Option<String>,

    /// アクセスキー。
    pub access_key: Option<String>,

    /// シークレットキー。
    pub secret_key: Option<String>,
}

impl UploadConfig {
    /// ローカルディスク保存の設定を生成する。
    pub fn local(dir: impl Into<String>) -> Self {
        Self {
            provider: UploadProvider::Local,
            local_dir: Some(dir.into()),
            endpoint: None,
            bucket: None,
            access_key: None,
            secret_key: None,
        }
    }

    /// オブジェクトストレージ保存の設定を生成する。
    pub fn remote(
        provider: UploadProvider,
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            local_dir: None,
            endpoint: Some(endpoint.into()),
            bucket: Some(bucket.into()),
            access_key: None,
            secret_key: None,
        }
    }

    /// 資格情報を設定する。
    pub fn with_credentials(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }
}
