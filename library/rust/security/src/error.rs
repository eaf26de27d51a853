//! セキュリティ DTO の検証エラー定義。

use thiserror::Error;

/// SecurityError はセキュリティ DTO の検証で発生するエラーを表す。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SecurityError {
    /// client_id が空。
    #[error("client_id が空です")]
    MissingClientId,

    /// 有効期間に負の値が指定された。
    #[error("有効期間が負の値です: {0}")]
    NegativeExpiry(&'static str),

    /// リフレッシュトークンの有効期間がアクセストークンより短い。
    #[error("refresh_token_expire_time が access_token_expire_time より短いです")]
    ExpiryOrdering,
}
