// 認証モジュール

/// JWT生成・検証（jsonwebtoken）
pub mod jwt;

/// 資格情報の検証とトークン発行
pub mod issuer;

/// 認証ミドルウェア（Bearer JWT）
pub mod middleware;

/// ランダムトークン生成
pub fn generate_random_token(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
