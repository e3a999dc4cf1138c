//! 環境変数による設定管理
//!
//! 設定は起動時に一度だけ読み込み、必要なコンポーネントへ明示的に渡す。

use crate::common::error::SentinelError;
use std::time::Duration;

/// デフォルトのバインドアドレス
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// デフォルトの待ち受けポート
pub const DEFAULT_PORT: u16 = 8080;
/// デフォルトのSQLiteデータベースURL
pub const DEFAULT_DATABASE_URL: &str = "sqlite:data/sentinel.db";
/// デフォルトのトークン有効期間（時間）
pub const DEFAULT_JWT_EXPIRATION_HOURS: u64 = 24;

/// 環境変数を取得する（空文字は未設定扱い）
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// 環境変数を取得し、未設定ならデフォルト値を返す
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env(name).unwrap_or_else(|| default.to_string())
}

/// 環境変数を指定型にパースして取得する
///
/// パースできない値は警告ログを出してデフォルト値に置き換える。
pub fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    match get_env(name) {
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    "Environment variable '{}' has invalid value '{}', using default",
                    name,
                    raw
                );
                default
            }
        },
        None => default,
    }
}

/// HTTPサーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// バインドアドレス
    pub host: String,
    /// 待ち受けポート
    pub port: u16,
    /// SQLiteデータベースURL
    pub database_url: String,
}

impl ServerConfig {
    /// 環境変数からサーバー設定を読み込む
    pub fn from_env() -> Self {
        Self {
            host: get_env_or("SENTINEL_HOST", DEFAULT_HOST),
            port: get_env_parse("SENTINEL_PORT", DEFAULT_PORT),
            database_url: get_env_or("SENTINEL_DATABASE_URL", DEFAULT_DATABASE_URL),
        }
    }

    /// `TcpListener::bind`用の`host:port`文字列
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// トークン発行設定
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC署名鍵
    pub jwt_secret: String,
    /// トークン有効期間
    pub token_ttl: Duration,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

/// 時間単位の有効期間を検証して`Duration`に変換する
///
/// 0、秒換算でのオーバーフロー、現在時刻に加算できない長さはエラー。
pub fn token_ttl_from_hours(hours: u64) -> Result<Duration, SentinelError> {
    let invalid = |reason: &str| {
        SentinelError::Config(format!(
            "SENTINEL_JWT_EXPIRATION_HOURS={} is invalid: {}",
            hours, reason
        ))
    };

    if hours == 0 {
        return Err(invalid("must be at least 1"));
    }
    let secs = hours
        .checked_mul(3600)
        .ok_or_else(|| invalid("overflows when converted to seconds"))?;
    let ttl = Duration::from_secs(secs);

    let signed = chrono::Duration::from_std(ttl).map_err(|_| invalid("out of range"))?;
    chrono::Utc::now()
        .checked_add_signed(signed)
        .ok_or_else(|| invalid("expiration time is out of range"))?;

    Ok(ttl)
}

impl AuthConfig {
    /// 署名鍵と有効期間を指定して構築する
    pub fn new(jwt_secret: impl Into<String>, token_ttl: Duration) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl,
        }
    }

    /// 環境変数からトークン設定を読み込む
    ///
    /// `SENTINEL_JWT_SECRET` が未設定の場合はランダムな鍵を生成する。
    /// その場合、再起動前に発行したトークンは検証できなくなる。
    /// 有効期間が範囲外の場合は`SentinelError::Config`を返す。
    pub fn from_env() -> Result<Self, SentinelError> {
        let jwt_secret = match get_env("SENTINEL_JWT_SECRET") {
            Some(secret) => secret,
            None => {
                tracing::warn!(
                    "SENTINEL_JWT_SECRET is not set; generated an ephemeral signing key \
                     (tokens will not survive a restart)"
                );
                crate::auth::generate_random_token(64)
            }
        };
        let hours = get_env_parse(
            "SENTINEL_JWT_EXPIRATION_HOURS",
            DEFAULT_JWT_EXPIRATION_HOURS,
        );

        Ok(Self::new(jwt_secret, token_ttl_from_hours(hours)?))
    }
}
