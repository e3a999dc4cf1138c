//! 疑わしいペイロードの簡易検出
//!
//! 生のクエリ文字列に`script`または`select`が（大文字小文字を区別して）
//! 含まれる場合にフラグを立てる。正規化・パーセントデコード・正規表現は行わない。
//! セキュリティ対策ではなくレビュー用の目印。

/// 検出対象の部分文字列
pub const SUSPICIOUS_MARKERS: [&str; 2] = ["script", "select"];

/// 生のクエリ文字列を検査する
///
/// 該当した場合はクエリ文字列全体を返し、それ以外は`None`。
pub fn detect_suspicious_payload(raw_query: Option<&str>) -> Option<String> {
    let query = raw_query?;
    if SUSPICIOUS_MARKERS
        .iter()
        .any(|marker| query.contains(marker))
    {
        Some(query.to_string())
    } else {
        None
    }
}
