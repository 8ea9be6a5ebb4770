//! Corpus Encoder
//!
//! 与解码器对称：按同一张映射表写出外部字段名

use serde_json::{Map, Value};

use super::schema::{self, FieldSpec};
use super::{Book, Chapter, Corpus, Verse};

pub fn encode(corpus: &Corpus) -> Value {
    let mut object = Map::new();
    put(
        &mut object,
        &schema::corpus::BOOKS,
        Value::Array(corpus.books().iter().map(encode_book).collect()),
    );
    Value::Object(object)
}

pub fn encode_to_string_pretty(corpus: &Corpus) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&encode(corpus))
}

fn encode_book(book: &Book) -> Value {
    use super::schema::book::{CHAPTERS, DESCRIPTION, ID, THEME_COLOR, TITLE};

    let mut object = Map::new();
    put(&mut object, &ID, book.id().into());
    put(&mut object, &TITLE, book.title().into());
    put(&mut object, &DESCRIPTION, book.description().into());
    put(&mut object, &THEME_COLOR, book.theme_color().as_str().into());
    put(
        &mut object,
        &CHAPTERS,
        Value::Array(book.chapters().iter().map(encode_chapter).collect()),
    );
    Value::Object(object)
}

fn encode_chapter(chapter: &Chapter) -> Value {
    use super::schema::chapter::{DESCRIPTION, ID, VERSES, VERSE_COUNT};

    let mut object = Map::new();
    put(&mut object, &ID, chapter.id().into());
    put(&mut object, &DESCRIPTION, chapter.description().into());
    put(&mut object, &VERSE_COUNT, chapter.verse_count().into());
    put(
        &mut object,
        &VERSES,
        Value::Array(chapter.verses().iter().map(encode_verse).collect()),
    );
    Value::Object(object)
}

fn encode_verse(verse: &Verse) -> Value {
    use super::schema::verse::{ID, ORIGINAL_TEXT, TRANSLATION, TRANSLITERATION};

    let mut object = Map::new();
    put(&mut object, &ID, verse.id().into());
    put(&mut object, &ORIGINAL_TEXT, verse.original_text().into());
    put(&mut object, &TRANSLITERATION, verse.transliteration().into());
    put(&mut object, &TRANSLATION, verse.translation().into());
    Value::Object(object)
}

fn put(object: &mut Map<String, Value>, spec: &FieldSpec, value: Value) {
    object.insert(spec.external.to_string(), value);
}
