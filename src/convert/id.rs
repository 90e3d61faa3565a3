use chrono::Utc;
use rand::Rng;

/// UUID v4 文本模板，`x` 为任意十六进制位，`y` 的高两位固定为 `10`
const TEMPLATE: &str = "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";

/// 集合 ID 生成器
///
/// 仅用于展示用的 `_postman_id`，不保证全局唯一
pub struct IdGenerator;

impl IdGenerator {
    /// 生成一个新的 ID，每次调用都重新取时间作为熵源
    pub fn generate() -> String {
        let now = Utc::now();
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or_default();
        let nanos = u64::from(now.timestamp_subsec_nanos());

        let mut rng = rand::rng();
        Self::fill(millis, nanos, || rng.random_range(0..16))
    }

    /// 用两个递减的熵池加随机数填充模板
    ///
    /// 先消耗 `primary`，耗尽后再消耗 `secondary`
    pub(crate) fn fill(
        mut primary: u64,
        mut secondary: u64,
        mut nibble: impl FnMut() -> u64,
    ) -> String {
        TEMPLATE
            .chars()
            .map(|c| match c {
                'x' | 'y' => {
                    let r = nibble();
                    let digit = if primary > 0 {
                        let d = (primary.wrapping_add(r)) % 16;
                        primary /= 16;
                        d
                    } else {
                        let d = (secondary.wrapping_add(r)) % 16;
                        secondary /= 16;
                        d
                    };
                    let digit = if c == 'y' { (digit & 0x3) | 0x8 } else { digit };
                    char::from_digit(digit as u32, 16).unwrap_or('0')
                }
                other => other,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_v4_shape(id: &str) {
        assert_eq!(id.len(), 36);
        for (i, c) in id.chars().enumerate() {
            match i {
                8 | 13 | 18 | 23 => assert_eq!(c, '-'),
                14 => assert_eq!(c, '4'),
                19 => assert!(matches!(c, '8' | '9' | 'a' | 'b'), "variant digit {}", c),
                _ => assert!(c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            }
        }
    }

    #[test]
    fn test_generate_shape() {
        for _ in 0..64 {
            assert_v4_shape(&IdGenerator::generate());
        }
    }

    #[test]
    fn test_fill_with_empty_pools() {
        let id = IdGenerator::fill(0, 0, || 0);
        assert_eq!(id, "00000000-0000-4000-8000-000000000000");
    }

    #[test]
    fn test_fill_consumes_primary_then_secondary() {
        // primary = 0xab 只够两位，其余来自 secondary = 0xf
        let id = IdGenerator::fill(0xab, 0xf, || 0);
        assert!(id.starts_with("baf0"));
    }

    #[test]
    fn test_fill_variant_bits() {
        let id = IdGenerator::fill(0, 0, || 15);
        assert_v4_shape(&id);
        assert_eq!(&id[19..20], "b");
    }
}
