//! Catalog Filtering
//!
//! Search, multi-field filter and sort over an already fetched book list.
//! All active criteria combine with AND; an empty filter matches everything.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::models::Book;

/// Sort orders offered by the catalog pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Title,
    PriceAsc,
    PriceDesc,
    Rating,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [SortOrder::Title, SortOrder::PriceAsc, SortOrder::PriceDesc, SortOrder::Rating];

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Title => "Title (A-Z)",
            SortOrder::PriceAsc => "Price: low to high",
            SortOrder::PriceDesc => "Price: high to low",
            SortOrder::Rating => "Top rated",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Title => "title",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::Rating => "rating",
        }
    }

    fn compare(&self, a: &Book, b: &Book) -> Ordering {
        match self {
            SortOrder::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortOrder::PriceAsc => a.price.total_cmp(&b.price),
            SortOrder::PriceDesc => b.price.total_cmp(&a.price),
            SortOrder::Rating => b.rating.unwrap_or(0.0).total_cmp(&a.rating.unwrap_or(0.0)),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| format!("unknown sort order: {}", s))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    /// Free text matched against title, author, ISBN and subject
    pub query: String,
    pub subject: Option<String>,
    pub grade: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub in_stock_only: bool,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl CatalogFilter {
    /// True when any criterion narrows the list
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty()
            || self.subject.is_some()
            || self.grade.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.in_stock_only
    }

    pub fn matches(&self, book: &Book) -> bool {
        let query = self.query.trim().to_lowercase();
        if !query.is_empty() {
            let hit = contains_ci(&book.title, &query)
                || contains_ci(&book.author, &query)
                || book.isbn.as_deref().is_some_and(|isbn| contains_ci(isbn, &query))
                || book.subject.as_deref().is_some_and(|s| contains_ci(s, &query));
            if !hit {
                return false;
            }
        }
        if let Some(subject) = &self.subject {
            if !book.subject.as_deref().is_some_and(|s| s.eq_ignore_ascii_case(subject)) {
                return false;
            }
        }
        if let Some(grade) = &self.grade {
            if !book.grade.as_deref().is_some_and(|g| g.eq_ignore_ascii_case(grade)) {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| book.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| book.price > max) {
            return false;
        }
        if self.in_stock_only && !book.in_stock() {
            return false;
        }
        true
    }
}

/// Filter then sort. The sort is stable so equal keys keep API order.
pub fn apply(books: &[Book], filter: &CatalogFilter, sort: SortOrder) -> Vec<Book> {
    let mut result: Vec<Book> = books.iter().filter(|b| filter.matches(b)).cloned().collect();
    result.sort_by(|a, b| sort.compare(a, b));
    result
}

/// Distinct, sorted values of a text field, for filter dropdowns
pub fn distinct_values<F>(books: &[Book], field: F) -> Vec<String>
where
    F: Fn(&Book) -> Option<&str>,
{
    let mut values: Vec<String> = books
        .iter()
        .filter_map(|b| field(b))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    values.sort_by_key(|v| v.to_lowercase());
    values.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
    values
}

/// Parse a price input box; blank or invalid means "no bound"
pub fn parse_price(input: &str) -> Option<f64> {
    let trimmed = input.trim().trim_start_matches('$');
    trimmed.parse::<f64>().ok().filter(|p| p.is_finite() && *p >= 0.0)
}

/// Empty select value means "any"
pub fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookKind;

    fn textbook(id: &str, title: &str, subject: &str, grade: &str, price: f64, stock: u32) -> Book {
        let mut book: Book = serde_json::from_str(&format!(r#"{{"id":"{}","title":"{}"}}"#, id, title)).unwrap();
        book.declared_kind = Some(BookKind::Textbook);
        book.author = "Author".to_string();
        book.subject = Some(subject.to_string());
        book.grade = Some(grade.to_string());
        book.price = price;
        book.stock = Some(stock);
        book
    }

    fn shelf() -> Vec<Book> {
        vec![
            textbook("1", "Calculus I", "Math", "College", 80.0, 3),
            textbook("2", "Algebra Basics", "Math", "Grade 9", 35.0, 0),
            textbook("3", "Biology Today", "Science", "Grade 10", 55.0, 5),
            textbook("4", "Chemistry", "Science", "College", 90.0, 1),
        ]
    }

    fn ids(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_matches_all_sorted_by_title() {
        assert!(!CatalogFilter::default().is_active());
        let result = apply(&shelf(), &CatalogFilter::default(), SortOrder::Title);
        assert_eq!(ids(&result), vec!["2", "3", "1", "4"]);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let filter = CatalogFilter {
            subject: Some("science".to_string()),
            grade: Some("College".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&shelf(), &filter, SortOrder::Title)), vec!["4"]);
    }

    #[test]
    fn test_price_range_and_stock() {
        let filter = CatalogFilter {
            min_price: Some(30.0),
            max_price: Some(80.0),
            in_stock_only: true,
            ..Default::default()
        };
        assert_eq!(ids(&apply(&shelf(), &filter, SortOrder::PriceAsc)), vec!["3", "1"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let filter = CatalogFilter { query: "  BIO ".to_string(), ..Default::default() };
        assert_eq!(ids(&apply(&shelf(), &filter, SortOrder::Title)), vec!["3"]);
    }

    #[test]
    fn test_sort_desc_and_rating() {
        let result = apply(&shelf(), &CatalogFilter::default(), SortOrder::PriceDesc);
        assert_eq!(ids(&result), vec!["4", "1", "3", "2"]);

        let mut books = shelf();
        books[2].rating = Some(4.8);
        books[0].rating = Some(3.1);
        let result = apply(&books, &CatalogFilter::default(), SortOrder::Rating);
        // Unrated books keep their relative order
        assert_eq!(ids(&result), vec!["3", "1", "2", "4"]);
    }

    #[test]
    fn test_distinct_values() {
        let subjects = distinct_values(&shelf(), |b| b.subject.as_deref());
        assert_eq!(subjects, vec!["Math", "Science"]);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("$12.50"), Some(12.5));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("-3"), None);
        assert_eq!(parse_price("abc"), None);
    }

    #[test]
    fn test_sort_order_round_trip_names() {
        for order in SortOrder::ALL {
            assert_eq!(order.as_str().parse::<SortOrder>(), Ok(order));
        }
        assert!("newest".parse::<SortOrder>().is_err());
    }
}
