//! Corpus Context - Aggregate Root

use super::{Book, Verse, VersePath};

/// Corpus 聚合根
///
/// 不变量:
/// - Book 顺序即经典卷序，不可重排
/// - 构造后不可变；重新加载产生新的 Corpus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    books: Vec<Book>,
}

impl Corpus {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id() == id)
    }

    /// 按点分路径定位诗节: book → chapter → verse
    pub fn verse(&self, dotted_id: &str) -> Option<&Verse> {
        let path = VersePath::parse(dotted_id).ok()?;
        self.book(path.book())?
            .chapter(path.chapter())?
            .verse(dotted_id)
    }

    /// 各章声明的诗节总数
    pub fn total_declared_verses(&self) -> u64 {
        self.books
            .iter()
            .flat_map(|b| b.chapters())
            .map(|c| u64::from(c.verse_count()))
            .sum()
    }

    /// 实际已录入的诗节总数
    pub fn total_populated_verses(&self) -> usize {
        self.books
            .iter()
            .flat_map(|b| b.chapters())
            .map(|c| c.verses().len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::corpus::{Chapter, ThemeColor};

    fn sample() -> Corpus {
        Corpus::new(vec![
            Book::new(
                "1",
                "बालकाण्ड",
                "Bāla Kāṇḍa",
                vec![
                    Chapter::new("1", "", 2, vec![Verse::new("1.1.1", "", "", "")]),
                    Chapter::new("2", "", 43, Vec::new()),
                ],
                ThemeColor::fallback(),
            ),
            Book::new("2", "अयोध्याकाण्ड", "", Vec::new(), ThemeColor::fallback()),
        ])
    }

    #[test]
    fn test_lookup() {
        let corpus = sample();
        assert_eq!(corpus.len(), 2);
        assert!(!corpus.is_empty());
        assert_eq!(corpus.book("2").map(|b| b.title()), Some("अयोध्याकाण्ड"));
        assert!(corpus.verse("1.1.1").is_some());
        assert!(corpus.verse("1.2.1").is_none());
        assert!(corpus.verse("9.1.1").is_none());
        assert!(corpus.verse("garbage").is_none());
    }

    #[test]
    fn test_verse_totals() {
        let corpus = sample();
        assert_eq!(corpus.total_declared_verses(), 45);
        assert_eq!(corpus.total_populated_verses(), 1);
    }
}
