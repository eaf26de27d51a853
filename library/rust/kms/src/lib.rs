//! b4se-kms: 鍵管理（KMS）サブシステムの共有エラー型。
//!
//! 鍵管理操作の失敗を呼び出し元へ伝播するためのエラー型のみを提供する。
//! リトライ・フォールバック等の回復ポリシーは持たず、`ApiResponse` への
//! 変換は捕捉した側のサービスが行う。

pub mod error;

pub use error::{KmsError, KmsResult};
