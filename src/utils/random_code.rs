use rand::Rng;

/// 新账号密码长度
pub const GENERATED_PASSWORD_LENGTH: usize = 12;

const PASSWORD_CHARSET: &[u8] =
    b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789!@#$%";

fn random_from(charset: &[u8], length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| charset[rng.random_range(0..charset.len())] as char)
        .collect()
}

/// 生成随机密码，保证同时包含大写、小写字母和数字
pub fn generate_password(length: usize) -> String {
    loop {
        let candidate = random_from(PASSWORD_CHARSET, length);
        if length < 3
            || (candidate.chars().any(|c| c.is_ascii_uppercase())
                && candidate.chars().any(|c| c.is_ascii_lowercase())
                && candidate.chars().any(|c| c.is_ascii_digit()))
        {
            return candidate;
        }
    }
}

/// 收据编号：REC-<年月日>-<6位随机码>
pub fn generate_receipt_number(at: chrono::DateTime<chrono::Utc>) -> String {
    const CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
    format!(
        "REC-{}-{}",
        at.format("%Y%m%d"),
        random_from(CODE_CHARSET, 6)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_password_shape() {
        for _ in 0..50 {
            let pwd = generate_password(GENERATED_PASSWORD_LENGTH);
            assert_eq!(pwd.chars().count(), GENERATED_PASSWORD_LENGTH);
            assert!(pwd.chars().any(|c| c.is_ascii_uppercase()));
            assert!(pwd.chars().any(|c| c.is_ascii_lowercase()));
            assert!(pwd.chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_receipt_number_format() {
        let at = chrono::DateTime::parse_from_rfc3339("2025-03-01T10:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let receipt = generate_receipt_number(at);
        assert!(receipt.starts_with("REC-20250301-"));
        assert_eq!(receipt.len(), "REC-20250301-".len() + 6);
    }
}
