//! b4se-web: HTTP リクエストメタデータの共有モデル。
//!
//! リクエストの出所情報（IP・ホスト・対象・User-Agent）と任意の追加情報を
//! 運ぶレコードを提供する。ログ・監査などの下流コンシューマは
//! `RequestContext` ケイパビリティ越しに参照する。

pub mod request;

pub use request::{RequestContext, RequestHeaders, RequestInfo};

#[cfg(feature = "mock")]
pub use request::MockRequestContext;
