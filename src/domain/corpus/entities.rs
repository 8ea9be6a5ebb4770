//! Corpus Context - Entities

use super::ThemeColor;

/// 诗节 (Shloka) - 最小引用单位
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    /// 点分路径，例如 "1.1.1"
    id: String,
    /// 天城体原文
    original_text: String,
    /// 罗马转写
    transliteration: String,
    /// 译文
    translation: String,
}

impl Verse {
    pub fn new(
        id: impl Into<String>,
        original_text: impl Into<String>,
        transliteration: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            original_text: original_text.into(),
            transliteration: transliteration.into(),
            translation: translation.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn transliteration(&self) -> &str {
        &self.transliteration
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }
}

/// 章 (Sarga)
///
/// 不变量:
/// - verse_count 只是声明总数，verses 可以少于它（尚未录入的章节为空列表）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    id: String,
    description: String,
    verse_count: u32,
    verses: Vec<Verse>,
}

impl Chapter {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        verse_count: u32,
        verses: Vec<Verse>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            verse_count,
            verses,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn verse_count(&self) -> u32 {
        self.verse_count
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn verse(&self, id: &str) -> Option<&Verse> {
        self.verses.iter().find(|v| v.id() == id)
    }

    /// 声明了诗节但正文尚未录入
    pub fn is_stub(&self) -> bool {
        self.verses.is_empty() && self.verse_count > 0
    }

    /// 尚未录入的诗节数
    pub fn pending_verses(&self) -> u32 {
        let populated = u32::try_from(self.verses.len()).unwrap_or(u32::MAX);
        self.verse_count.saturating_sub(populated)
    }
}

/// 卷 (Kanda)
///
/// 不变量:
/// - 同一卷内 Chapter.id 唯一（由解码器校验）
/// - chapters 保持叙事顺序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: String,
    /// 梵文卷名
    title: String,
    description: String,
    chapters: Vec<Chapter>,
    theme_color: ThemeColor,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        chapters: Vec<Chapter>,
        theme_color: ThemeColor,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            chapters,
            theme_color,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn theme_color(&self) -> &ThemeColor {
        &self.theme_color
    }

    pub fn chapter(&self, id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id() == id)
    }

    /// 本卷所有已录入诗节，按叙事顺序
    pub fn verses(&self) -> impl Iterator<Item = &Verse> {
        self.chapters.iter().flat_map(|c| c.verses().iter())
    }
}
