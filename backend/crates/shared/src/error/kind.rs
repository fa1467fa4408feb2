//! Error Kind
//!
//! [`ErrorKind`] はゲートウェイが返し得るステータスの分類。

/// ゲートウェイが返すエラーの分類
///
/// 上流（認証バックエンド / オリジン）起因の失敗はすべて 5xx 側に入る。
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::BadGateway.status_code(), 502);
/// assert!(ErrorKind::BadGateway.is_server_error());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// 401: セッションなし / 失効
    Unauthorized,
    /// 404: 未知のロール
    NotFound,
    /// 500: 認証バックエンドに到達できない
    InternalServerError,
    /// 502: オリジンに到達できない
    BadGateway,
}

impl ErrorKind {
    pub const fn status_code(self) -> u16 {
        match self {
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::InternalServerError => 500,
            Self::BadGateway => 502,
        }
    }

    /// 理由フレーズ（ログ表示用）
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Unauthorized => "Unauthorized",
            Self::NotFound => "Not Found",
            Self::InternalServerError => "Internal Server Error",
            Self::BadGateway => "Bad Gateway",
        }
    }

    /// 5xx。詳細メッセージはクライアントへ出さない
    pub const fn is_server_error(self) -> bool {
        self.status_code() >= 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}
