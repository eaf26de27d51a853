//! b4se-storage: リソースアップロード先の選択と設定。
//!
//! アップロードされたファイルの保存先（ローカルディスクまたは
//! オブジェクトストレージ）を識別する列挙型と、その接続設定を提供する。
//! 実際の転送処理は保存先ごとのアダプタ実装（本クレート外）が担う。

pub mod config;
pub mod provider;

pub use config::UploadConfig;
pub use provider::UploadProvider;
