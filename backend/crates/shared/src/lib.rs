//! Shared Kernel
//!
//! エラー表現だけを持つ最小コア。ゲート本体・プラットフォーム・
//! バイナリのどこから返されても、クライアントには同じ JSON 形状で届く。

pub mod error {
    pub mod app_error;
    pub mod kind;
    #[cfg(feature = "axum")]
    pub mod response;
}
