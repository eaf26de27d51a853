//! 鍵管理エラー定義。

use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;

/// 鍵管理操作の結果型。
pub type KmsResult<T> = Result<T, KmsError>;

/// KmsError は鍵管理操作の失敗を表す。
///
/// メッセージと原因エラーはどちらも省略可能で、呼び出し側は型で捕捉して
/// そのまま伝播する。原因エラーは `std::error::Error::source` 経由で
/// チェーンをたどれる。バックトレースは既定で記録する
/// （実際に解決されるかは `RUST_BACKTRACE` に従う）。
#[derive(Debug)]
pub struct KmsError {
    message: Option<String>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
    backtrace: Option<Backtrace>,
}

impl KmsError {
    /// メッセージも原因も持たないエラーを生成する。
    pub fn new() -> Self {
        Self {
            message: None,
            source: None,
            backtrace: Some(Backtrace::capture()),
        }
    }

    /// メッセージのみを持つエラーを生成する。
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            source: None,
            backtrace: Some(Backtrace::capture()),
        }
    }

    /// メッセージと原因エラーを持つエラーを生成する。
    pub fn with_source(
        message: impl Into<String>,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: Some(message.into()),
            source: Some(Box::new(source)),
            backtrace: Some(Backtrace::capture()),
        }
    }

    /// 原因エラーのみからエラーを生成する。
    pub fn from_source(source: impl Error + Send + Sync + 'static) -> Self {
        Self {
            message: None,
            source: Some(Box::new(source)),
            backtrace: Some(Backtrace::capture()),
        }
    }

    /// すべての構成要素を指定してエラーを生成する。
    ///
    /// `capture_backtrace` が false の場合はバックトレースを記録しない。
    pub fn with_capture(
        message: Option<String>,
        source: Option<Box<dyn Error + Send + Sync + 'static>>,
        capture_backtrace: bool,
    ) -> Self {
        Self {
            message,
            source,
            backtrace: capture_backtrace.then(Backtrace::capture),
        }
    }

    /// メッセージを返す。
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// 記録済みのバックトレースを返す。
    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_ref()
    }
}

impl Default for KmsError {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for KmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, &self.source) {
            (Some(message), _) => write!(f, "{}", message),
            (None, Some(source)) => write!(f, "{}", source),
            (None, None) => write!(f, "鍵管理操作に失敗しました"),
        }
    }
}

impl Error for KmsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct FakeCause(&'static str);

    impl fmt::Display for FakeCause {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl Error for FakeCause {}

    #[test]
    fn test_new_has_no_message_or_source() {
        let err = KmsError::new();
        assert!(err.message().is_none());
        assert!(err.source().is_none());
        assert!(err.backtrace().is_some());
    }

    #[test]
    fn test_from_message() {
        let err = KmsError::from_message("鍵が見つかりません");
        assert_eq!(err.message(), Some("鍵が見つかりません"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_with_source_keeps_both() {
        let err = KmsError::with_source("復号に失敗しました", FakeCause("invalid tag"));
        assert_eq!(err.message(), Some("復号に失敗しました"));
        assert_eq!(err.source().unwrap().to_string(), "invalid tag");
    }

    #[test]
    fn test_from_source_only() {
        let err = KmsError::from_source(FakeCause("timeout"));
        assert!(err.message().is_none());
        assert_eq!(err.source().unwrap().to_string(), "timeout");
    }

    #[test]
    fn test_with_capture_disabled_records_no_backtrace() {
        let err = KmsError::with_capture(Some("x".to_string()), None, false);
        assert!(err.backtrace().is_none());
        let err = KmsError::with_capture(None, None, true);
        assert!(err.backtrace().is_some());
    }

    #[test]
    fn test_display_prefers_message() {
        let err = KmsError::with_source("メッセージ", FakeCause("cause"));
        assert_eq!(err.to_string(), "メッセージ");
    }

    #[test]
    fn test_display_falls_back_to_source() {
        let err = KmsError::from_source(FakeCause("cause"));
        assert_eq!(err.to_string(), "cause");
    }

    #[test]
    fn test_display_fixed_text_when_empty() {
        let err = KmsError::new();
        assert_eq!(err.to_string(), "鍵管理操作に失敗しました");
    }

    #[test]
    fn test_propagates_through_question_mark() {
        fn failing() -> KmsResult<()> {
            Err(KmsError::from_message("rotation failed"))
        }
        fn caller() -> KmsResult<()> {
            failing()?;
            Ok(())
        }
        let err = caller().unwrap_err();
        assert_eq!(err.message(), Some("rotation failed"));
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KmsError>();
    }
}
