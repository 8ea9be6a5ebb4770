//! Corpus Context - Value Objects

use std::fmt;

/// 8 位通道颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// 归一化到 0.0..=1.0，顺序为 [r, g, b, a]
    pub fn to_f32(&self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }
}

/// 主题色
///
/// 接受 `#RGB`、`#RRGGBB`、`#AARRGGBB`（`#` 可省略）。
/// 保留原始写法，编码时原样输出。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThemeColor {
    hex: String,
    rgba: Rgba,
}

impl ThemeColor {
    /// 无效颜色的替代值：不透明中灰
    pub const FALLBACK_HEX: &'static str = "#808080";

    pub fn parse(value: &str) -> Result<Self, &'static str> {
        let trimmed = value.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.is_empty() {
            return Err("颜色值不能为空");
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err("颜色值包含非十六进制字符");
        }

        let n = u32::from_str_radix(digits, 16).map_err(|_| "颜色值无法解析")?;
        let rgba = match digits.len() {
            3 => Rgba {
                r: (((n >> 8) & 0xF) * 17) as u8,
                g: (((n >> 4) & 0xF) * 17) as u8,
                b: ((n & 0xF) * 17) as u8,
                a: 0xFF,
            },
            6 => Rgba {
                r: (n >> 16) as u8,
                g: (n >> 8) as u8,
                b: n as u8,
                a: 0xFF,
            },
            // ARGB
            8 => Rgba {
                a: (n >> 24) as u8,
                r: (n >> 16) as u8,
                g: (n >> 8) as u8,
                b: n as u8,
            },
            _ => return Err("颜色值长度必须为 3、6 或 8 位"),
        };

        Ok(Self {
            hex: trimmed.to_string(),
            rgba,
        })
    }

    pub fn fallback() -> Self {
        Self {
            hex: Self::FALLBACK_HEX.to_string(),
            rgba: Rgba {
                r: 0x80,
                g: 0x80,
                b: 0x80,
                a: 0xFF,
            },
        }
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }

    pub fn rgba(&self) -> Rgba {
        self.rgba
    }

    pub fn to_rgb_f32(&self) -> [f32; 4] {
        self.rgba.to_f32()
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex)
    }
}

/// 诗节路径 `book.chapter.verse`，例如 `1.1.1`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersePath {
    book: String,
    chapter: String,
    verse: String,
}

impl VersePath {
    pub fn parse(value: &str) -> Result<Self, &'static str> {
        let mut parts = value.split('.');
        let (Some(book), Some(chapter), Some(verse), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err("诗节路径必须由三段组成");
        };
        if book.is_empty() || chapter.is_empty() || verse.is_empty() {
            return Err("诗节路径的每一段都不能为空");
        }
        Ok(Self {
            book: book.to_string(),
            chapter: chapter.to_string(),
            verse: verse.to_string(),
        })
    }

    pub fn book(&self) -> &str {
        &self.book
    }

    pub fn chapter(&self) -> &str {
        &self.chapter
    }

    pub fn verse(&self) -> &str {
        &self.verse
    }
}

impl fmt::Display for VersePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.book, self.chapter, self.verse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit() {
        let color = ThemeColor::parse("#FFA500").unwrap();
        assert_eq!(
            color.rgba(),
            Rgba {
                r: 0xFF,
                g: 0xA5,
                b: 0x00,
                a: 0xFF
            }
        );
        assert_eq!(color.as_str(), "#FFA500");
    }

    #[test]
    fn test_parse_shorthand_and_argb() {
        let short = ThemeColor::parse("#f80").unwrap();
        assert_eq!(
            short.rgba(),
            Rgba {
                r: 0xFF,
                g: 0x88,
                b: 0x00,
                a: 0xFF
            }
        );

        let argb = ThemeColor::parse("80228B22").unwrap();
        assert_eq!(argb.rgba().a, 0x80);
        assert_eq!(argb.rgba().g, 0x8B);
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(ThemeColor::parse("not-a-color").is_err());
        assert!(ThemeColor::parse("#12345").is_err());
        assert!(ThemeColor::parse("#").is_err());
        assert!(ThemeColor::parse("#GGGGGG").is_err());
    }

    #[test]
    fn test_fallback_is_opaque_grey() {
        let fallback = ThemeColor::fallback();
        assert_eq!(fallback.as_str(), ThemeColor::FALLBACK_HEX);
        assert_eq!(fallback, ThemeColor::parse(ThemeColor::FALLBACK_HEX).unwrap());
        assert_eq!(fallback.to_rgb_f32()[3], 1.0);
    }

    #[test]
    fn test_verse_path() {
        let path = VersePath::parse("1.2.3").unwrap();
        assert_eq!(path.book(), "1");
        assert_eq!(path.chapter(), "2");
        assert_eq!(path.verse(), "3");
        assert_eq!(path.to_string(), "1.2.3");

        assert!(VersePath::parse("1.2").is_err());
        assert!(VersePath::parse("1.2.3.4").is_err());
        assert!(VersePath::parse("1..3").is_err());
    }
}
