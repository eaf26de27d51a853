//! b4se-security: セキュリティ関連の共有 DTO。
//!
//! OAuth2 クライアントアプリケーションの資格情報とトークン有効期間を
//! 層間で運ぶレコードを提供する。認可判定やトークン発行は本クレートの
//! 責務ではない。

pub mod application;
pub mod error;

pub use application::Application;
pub use error::SecurityError;
