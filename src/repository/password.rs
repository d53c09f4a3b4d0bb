//! # 密码哈希与校验
//!
//! 会员与管理员共用的单向加盐哈希，基于 bcrypt。

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::error::Result;

/// 对明文密码做 bcrypt 哈希
pub fn hash_password(password: &str) -> Result<String> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// 校验明文密码与存储哈希是否匹配
///
/// 哈希格式损坏时返回错误而非 `false`。
pub fn check_password(stored_hash: &str, password: &str) -> Result<bool> {
    Ok(verify(password, stored_hash)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_password_roundtrip() {
        let hashed = hash_password("secret").expect("hash");
        assert!(check_password(&hashed, "secret").expect("verify"));
        assert!(!check_password(&hashed, "wrong").expect("verify"));
    }

    #[test]
    fn test_check_password_malformed_hash() {
        assert!(check_password("not-a-bcrypt-hash", "secret").is_err());
    }
}
