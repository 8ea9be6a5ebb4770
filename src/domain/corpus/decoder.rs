//! Corpus Decoder
//!
//! JSON → Corpus 的纯转换，完全由 [`schema`](super::schema) 中的映射表驱动：
//! 1. 解析为 `serde_json::Value`（语法错误 → Malformed）
//! 2. 按实体字段表校验必填字段和类型
//! 3. 构造实体；无效主题色原地替换为中性色并记录警告

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::schema::{self, EntitySchema, FieldKind, FieldSpec};
use super::{Book, Chapter, Corpus, DecodeError, FieldWarning, ThemeColor, Verse};

const ROOT_PATH: &str = "$";

/// 解码结果及已恢复的字段级问题
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeReport {
    pub corpus: Corpus,
    pub warnings: Vec<FieldWarning>,
}

/// 解码 UTF-8 JSON 字节
pub fn decode(raw: &[u8]) -> Result<Corpus, DecodeError> {
    decode_with_report(raw).map(|report| report.corpus)
}

pub fn decode_str(raw: &str) -> Result<Corpus, DecodeError> {
    decode(raw.as_bytes())
}

/// 解码并返回字段级警告
pub fn decode_with_report(raw: &[u8]) -> Result<DecodeReport, DecodeError> {
    let root: Value = serde_json::from_slice(raw)?;
    let mut warnings = Vec::new();
    let corpus = decode_corpus(&root, &mut warnings)?;
    Ok(DecodeReport { corpus, warnings })
}

fn decode_corpus(value: &Value, warnings: &mut Vec<FieldWarning>) -> Result<Corpus, DecodeError> {
    let record = Record::bind(value, &schema::corpus::SCHEMA, ROOT_PATH)?;
    let books_path = record.field_path(&schema::corpus::BOOKS);

    let mut books = Vec::new();
    for (i, item) in record.array(&schema::corpus::BOOKS)?.iter().enumerate() {
        books.push(decode_book(item, &index_path(&books_path, i), warnings)?);
    }
    ensure_unique(books.iter().map(Book::id), &books_path)?;

    Ok(Corpus::new(books))
}

fn decode_book(
    value: &Value,
    path: &str,
    warnings: &mut Vec<FieldWarning>,
) -> Result<Book, DecodeError> {
    use super::schema::book::{CHAPTERS, DESCRIPTION, ID, SCHEMA, THEME_COLOR, TITLE};

    let record = Record::bind(value, &SCHEMA, path)?;

    let raw_color = record.string(&THEME_COLOR)?;
    let theme_color = match ThemeColor::parse(raw_color) {
        Ok(color) => color,
        Err(reason) => {
            let color_path = record.field_path(&THEME_COLOR);
            tracing::warn!(
                path = %color_path,
                value = %raw_color,
                reason = reason,
                "Invalid theme color, substituting fallback"
            );
            warnings.push(FieldWarning::InvalidColor {
                path: color_path,
                value: raw_color.to_string(),
            });
            ThemeColor::fallback()
        }
    };

    let chapters_path = record.field_path(&CHAPTERS);
    let mut chapters = Vec::new();
    for (i, item) in record.array(&CHAPTERS)?.iter().enumerate() {
        chapters.push(decode_chapter(item, &index_path(&chapters_path, i))?);
    }
    ensure_unique(chapters.iter().map(Chapter::id), &chapters_path)?;

    Ok(Book::new(
        record.string(&ID)?,
        record.string(&TITLE)?,
        record.string(&DESCRIPTION)?,
        chapters,
        theme_color,
    ))
}

fn decode_chapter(value: &Value, path: &str) -> Result<Chapter, DecodeError> {
    use super::schema::chapter::{DESCRIPTION, ID, SCHEMA, VERSES, VERSE_COUNT};

    let record = Record::bind(value, &SCHEMA, path)?;

    // Shlokas 缺失或为空都是合法的章节占位
    let verses_path = record.field_path(&VERSES);
    let verses = record
        .array(&VERSES)?
        .iter()
        .enumerate()
        .map(|(i, item)| decode_verse(item, &index_path(&verses_path, i)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Chapter::new(
        record.string(&ID)?,
        record.string(&DESCRIPTION)?,
        record.integer(&VERSE_COUNT)?,
        verses,
    ))
}

fn decode_verse(value: &Value, path: &str) -> Result<Verse, DecodeError> {
    use super::schema::verse::{ID, ORIGINAL_TEXT, SCHEMA, TRANSLATION, TRANSLITERATION};

    let record = Record::bind(value, &SCHEMA, path)?;
    Ok(Verse::new(
        record.string(&ID)?,
        record.string(&ORIGINAL_TEXT)?,
        record.string(&TRANSLITERATION)?,
        record.string(&TRANSLATION)?,
    ))
}

/// 已按字段表校验过的 JSON 对象
struct Record<'a> {
    object: &'a Map<String, Value>,
    path: &'a str,
}

impl<'a> Record<'a> {
    /// 校验对象形状：所有必填字段存在且类型正确（按表顺序报告第一个错误）
    fn bind(value: &'a Value, schema: &EntitySchema, path: &'a str) -> Result<Self, DecodeError> {
        let object = value.as_object().ok_or_else(|| DecodeError::TypeMismatch {
            path: path.to_string(),
            expected: "object",
            actual: json_type(value),
        })?;

        let record = Self { object, path };
        for spec in schema.fields {
            record.lookup(spec)?;
        }
        Ok(record)
    }

    fn field_path(&self, spec: &FieldSpec) -> String {
        format!("{}.{}", self.path, spec.external)
    }

    /// 可选字段缺失或为 null 时返回 None
    fn lookup(&self, spec: &FieldSpec) -> Result<Option<&'a Value>, DecodeError> {
        match self.object.get(spec.external) {
            None | Some(Value::Null) if !spec.required => Ok(None),
            None => Err(DecodeError::MissingField(self.field_path(spec))),
            Some(value) if matches_kind(value, spec.kind) => Ok(Some(value)),
            Some(value) => Err(DecodeError::TypeMismatch {
                path: self.field_path(spec),
                expected: spec.kind.as_str(),
                actual: json_type(value),
            }),
        }
    }

    fn string(&self, spec: &FieldSpec) -> Result<&'a str, DecodeError> {
        Ok(self
            .lookup(spec)?
            .and_then(Value::as_str)
            .unwrap_or_default())
    }

    fn integer(&self, spec: &FieldSpec) -> Result<u32, DecodeError> {
        Ok(self
            .lookup(spec)?
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or_default())
    }

    fn array(&self, spec: &FieldSpec) -> Result<&'a [Value], DecodeError> {
        Ok(self
            .lookup(spec)?
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]))
    }
}

fn matches_kind(value: &Value, kind: FieldKind) -> bool {
    match kind {
        FieldKind::String => value.is_string(),
        FieldKind::Integer => value
            .as_u64()
            .is_some_and(|n| u32::try_from(n).is_ok()),
        FieldKind::Array => value.is_array(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn index_path(base: &str, index: usize) -> String {
    format!("{}[{}]", base, index)
}

/// 兄弟节点之间 id 唯一（不要求全局唯一）
fn ensure_unique<'a>(ids: impl Iterator<Item = &'a str>, base: &str) -> Result<(), DecodeError> {
    let mut seen = HashSet::new();
    for (i, id) in ids.enumerate() {
        if !seen.insert(id) {
            return Err(DecodeError::DuplicateId {
                path: index_path(base, i),
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn book_json(id: &str, color: &str, sargas: Value) -> Value {
        json!({
            "Kanda_Number": id,
            "Sanskrit_Name": "बालकाण्ड",
            "Description": "Bāla Kāṇḍa - The Book of Youth",
            "Theme_Color": color,
            "Sargas": sargas
        })
    }

    fn decode_value(value: Value) -> Result<DecodeReport, DecodeError> {
        decode_with_report(value.to_string().as_bytes())
    }

    #[test]
    fn test_decode_stub_chapter() {
        let doc = json!({
            "kandas": [book_json("1", "#FFA500", json!([
                { "Sarga_Number": "1", "Description": "Stub", "Sloka_Count": 43, "Shlokas": [] },
                { "Sarga_Number": "2", "Description": "No verses key", "Sloka_Count": 12 },
                { "Sarga_Number": "3", "Description": "Null verses", "Sloka_Count": 5, "Shlokas": null }
            ]))]
        });

        let corpus = decode_value(doc).unwrap().corpus;
        let chapters = corpus.books()[0].chapters();
        assert_eq!(chapters.len(), 3);
        assert_eq!(chapters[0].verse_count(), 43);
        assert!(chapters.iter().all(|c| c.verses().is_empty()));
        assert!(chapters.iter().all(Chapter::is_stub));
    }

    #[test]
    fn test_decode_verse_fields() {
        let doc = json!({
            "kandas": [book_json("1", "#FFA500", json!([{
                "Sarga_Number": "1",
                "Description": "First chapter",
                "Sloka_Count": 1,
                "Shlokas": [{
                    "Meaning": "Vālmīki asked Nārada.",
                    "Roman_Transliteration": "tapaḥsvādhyāyaniratam",
                    "Sanskrit": "तपःस्वाध्यायनिरतं",
                    "Shloka_Number": "1.1.1",
                    "Extra": "ignored"
                }]
            }]))]
        });

        let corpus = decode_value(doc).unwrap().corpus;
        let verse = corpus.verse("1.1.1").unwrap();
        assert_eq!(verse.original_text(), "तपःस्वाध्यायनिरतं");
        assert_eq!(verse.transliteration(), "tapaḥsvādhyāyaniratam");
        assert_eq!(verse.translation(), "Vālmīki asked Nārada.");
    }

    #[test]
    fn test_invalid_color_is_isolated() {
        let doc = json!({
            "kandas": [
                book_json("1", "#FFA500", json!([])),
                book_json("2", "not-a-color", json!([])),
                book_json("3", "#228B22", json!([]))
            ]
        });

        let report = decode_value(doc).unwrap();
        assert_eq!(report.corpus.len(), 3);
        assert_eq!(report.corpus.books()[0].theme_color().as_str(), "#FFA500");
        assert_eq!(report.corpus.books()[1].theme_color(), &ThemeColor::fallback());
        assert_eq!(report.corpus.books()[2].theme_color().as_str(), "#228B22");
        assert_eq!(
            report.warnings,
            vec![FieldWarning::InvalidColor {
                path: "$.kandas[1].Theme_Color".to_string(),
                value: "not-a-color".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_field_reports_path() {
        let doc = json!({
            "kandas": [book_json("1", "#FFA500", json!([
                { "Sarga_Number": "1", "Description": "No count" }
            ]))]
        });

        let err = decode_value(doc).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingField("$.kandas[0].Sargas[0].Sloka_Count".to_string())
        );
    }

    #[test]
    fn test_missing_kandas() {
        let err = decode_str(r#"{ "books": [] }"#).unwrap_err();
        assert_eq!(err, DecodeError::MissingField("$.kandas".to_string()));
    }

    #[test]
    fn test_type_mismatch() {
        let doc = json!({
            "kandas": [book_json("1", "#FFA500", json!([
                { "Sarga_Number": "1", "Description": "", "Sloka_Count": "43" }
            ]))]
        });

        let err = decode_value(doc).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                path: "$.kandas[0].Sargas[0].Sloka_Count".to_string(),
                expected: "unsigned integer",
                actual: "string",
            }
        );
    }

    #[test]
    fn test_negative_count_is_type_mismatch() {
        let doc = json!({
            "kandas": [book_json("1", "#FFA500", json!([
                { "Sarga_Number": "1", "Description": "", "Sloka_Count": -1 }
            ]))]
        });
        assert!(matches!(
            decode_value(doc),
            Err(DecodeError::TypeMismatch { actual: "number", .. })
        ));
    }

    #[test]
    fn test_required_null_is_type_mismatch() {
        let doc = json!({ "kandas": [book_json("1", "#FFA500", Value::Null)] });
        assert!(matches!(
            decode_value(doc),
            Err(DecodeError::TypeMismatch { actual: "null", .. })
        ));
    }

    #[test]
    fn test_root_must_be_object() {
        let err = decode_str("[]").unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                path: "$".to_string(),
                expected: "object",
                actual: "array",
            }
        );
    }

    #[test]
    fn test_malformed_json() {
        let err = decode_str("{ \"kandas\": [ ").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { line: 1, .. }));

        let err = decode(&[0xFF, 0xFE, 0x00]).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { .. }));
    }

    #[test]
    fn test_duplicate_sibling_ids() {
        let doc = json!({
            "kandas": [
                book_json("1", "#FFA500", json!([])),
                book_json("1", "#8B0000", json!([]))
            ]
        });
        assert_eq!(
            decode_value(doc).unwrap_err(),
            DecodeError::DuplicateId {
                path: "$.kandas[1]".to_string(),
                id: "1".to_string(),
            }
        );
    }

    #[test]
    fn test_chapter_ids_only_unique_within_book() {
        let sarga = json!([{ "Sarga_Number": "1", "Description": "", "Sloka_Count": 0 }]);
        let doc = json!({
            "kandas": [
                book_json("1", "#FFA500", sarga.clone()),
                book_json("2", "#8B0000", sarga)
            ]
        });
        assert!(decode_value(doc).is_ok());
    }

    #[test]
    fn test_preserves_order() {
        let doc = json!({
            "kandas": [
                book_json("3", "#228B22", json!([])),
                book_json("1", "#FFA500", json!([])),
                book_json("2", "#8B0000", json!([]))
            ]
        });
        let corpus = decode_value(doc).unwrap().corpus;
        let ids: Vec<_> = corpus.books().iter().map(Book::id).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}
