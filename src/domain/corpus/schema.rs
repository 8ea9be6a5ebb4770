//! Corpus Context - 字段映射表
//!
//! 每个实体的外部字段名（JSON 中出现的名字）与语义字段名不同，
//! 例如 `Kanda_Number` → `id`。解码器和编码器都只通过这里的表访问字段。

/// 字段的 JSON 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Array,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "unsigned integer",
            FieldKind::Array => "array",
        }
    }
}

/// 单个字段的映射规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// 语义字段名
    pub semantic: &'static str,
    /// 序列化形式中的字段名
    pub external: &'static str,
    pub kind: FieldKind,
    /// 缺失时是否报错；可选字段缺失或为 null 时按空值处理
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(semantic: &'static str, external: &'static str, kind: FieldKind) -> Self {
        Self {
            semantic,
            external,
            kind,
            required: true,
        }
    }

    pub const fn optional(semantic: &'static str, external: &'static str, kind: FieldKind) -> Self {
        Self {
            semantic,
            external,
            kind,
            required: false,
        }
    }
}

/// 实体的完整字段表
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    pub entity: &'static str,
    pub fields: &'static [FieldSpec],
}

/// 根对象: `{ "kandas": [...] }`
pub mod corpus {
    use super::{EntitySchema, FieldKind, FieldSpec};

    pub const BOOKS: FieldSpec = FieldSpec::required("books", "kandas", FieldKind::Array);

    pub const SCHEMA: EntitySchema = EntitySchema {
        entity: "Corpus",
        fields: &[BOOKS],
    };
}

/// Kanda (काण्ड)
pub mod book {
    use super::{EntitySchema, FieldKind, FieldSpec};

    pub const ID: FieldSpec = FieldSpec::required("id", "Kanda_Number", FieldKind::String);
    pub const TITLE: FieldSpec = FieldSpec::required("title", "Sanskrit_Name", FieldKind::String);
    pub const DESCRIPTION: FieldSpec =
        FieldSpec::required("description", "Description", FieldKind::String);
    pub const CHAPTERS: FieldSpec = FieldSpec::required("chapters", "Sargas", FieldKind::Array);
    pub const THEME_COLOR: FieldSpec =
        FieldSpec::required("theme_color", "Theme_Color", FieldKind::String);

    pub const SCHEMA: EntitySchema = EntitySchema {
        entity: "Book",
        fields: &[ID, TITLE, DESCRIPTION, CHAPTERS, THEME_COLOR],
    };
}

/// Sarga (सर्ग)
pub mod chapter {
    use super::{EntitySchema, FieldKind, FieldSpec};

    pub const ID: FieldSpec = FieldSpec::required("id", "Sarga_Number", FieldKind::String);
    pub const DESCRIPTION: FieldSpec =
        FieldSpec::required("description", "Description", FieldKind::String);
    pub const VERSE_COUNT: FieldSpec =
        FieldSpec::required("verse_count", "Sloka_Count", FieldKind::Integer);
    pub const VERSES: FieldSpec = FieldSpec::optional("verses", "Shlokas", FieldKind::Array);

    pub const SCHEMA: EntitySchema = EntitySchema {
        entity: "Chapter",
        fields: &[ID, DESCRIPTION, VERSE_COUNT, VERSES],
    };
}

/// Shloka (श्लोक)
pub mod verse {
    use super::{EntitySchema, FieldKind, FieldSpec};

    pub const ID: FieldSpec = FieldSpec::required("id", "Shloka_Number", FieldKind::String);
    pub const ORIGINAL_TEXT: FieldSpec =
        FieldSpec::required("original_text", "Sanskrit", FieldKind::String);
    pub const TRANSLITERATION: FieldSpec =
        FieldSpec::required("transliteration", "Roman_Transliteration", FieldKind::String);
    pub const TRANSLATION: FieldSpec =
        FieldSpec::required("translation", "Meaning", FieldKind::String);

    pub const SCHEMA: EntitySchema = EntitySchema {
        entity: "Verse",
        fields: &[ID, ORIGINAL_TEXT, TRANSLITERATION, TRANSLATION],
    };
}
