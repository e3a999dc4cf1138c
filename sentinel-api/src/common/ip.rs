//! IPアドレス正規化ユーティリティ
//!
//! デュアルスタックで待ち受けると、IPv4クライアントのピアアドレスは
//! `::ffff:x.x.x.x`として届く。監査ログの`ip_address`列は同じクライアントを
//! 同じ文字列で記録する必要があるため、IPv4表記に揃えてから保存する。

use std::net::{IpAddr, SocketAddr};

/// IPアドレスを正規化する
///
/// IPv4-mapped IPv6（::ffff:x.x.x.x）のみIPv4に変換し、それ以外はそのまま返す。
pub fn normalize_ip(addr: IpAddr) -> IpAddr {
    addr.to_canonical()
}

/// 接続元ソケットアドレスを監査ログ用のIPアドレスにする（ポートは捨てる）
pub fn normalize_socket_ip(addr: &SocketAddr) -> IpAddr {
    normalize_ip(addr.ip())
}
