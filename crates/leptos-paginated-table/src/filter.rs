//! Columns and Client-Side Search
//!
//! Column descriptors and the substring filter applied to the rows of the
//! already-fetched page.

use leptos::prelude::AnyView;

/// A record the table can display
pub trait TableRow {
    /// Stringified value of the field named `key`, if the row has one
    fn field(&self, key: &str) -> Option<String>;
}

/// Describes one table column
pub struct Column<T> {
    pub key: &'static str,
    pub header: String,
    /// Custom cell renderer; the stringified field is shown otherwise
    pub cell: Option<fn(&T) -> AnyView>,
    pub searchable: bool,
}

// Manual impls: a derive would require `T: Clone`.
impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header.clone(),
            cell: self.cell,
            searchable: self.searchable,
        }
    }
}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("searchable", &self.searchable)
            .finish()
    }
}

impl<T> Column<T> {
    pub fn new(key: &'static str, header: impl Into<String>) -> Self {
        Self {
            key,
            header: header.into(),
            cell: None,
            searchable: true,
        }
    }

    pub fn with_cell(mut self, cell: fn(&T) -> AnyView) -> Self {
        self.cell = Some(cell);
        self
    }

    /// Exclude this column from the client-side search
    pub fn not_searchable(mut self) -> Self {
        self.searchable = false;
        self
    }
}

impl<T: TableRow> Column<T> {
    /// Plain-text cell value (empty when the row lacks the field)
    pub fn text(&self, row: &T) -> String {
        row.field(self.key).unwrap_or_default()
    }
}

/// Whether `row` matches the lower-cased `query` in any searchable column
pub fn row_matches<T: TableRow>(row: &T, columns: &[Column<T>], query: &str) -> bool {
    columns
        .iter()
        .filter(|column| column.searchable)
        .filter_map(|column| row.field(column.key))
        .any(|value| value.to_lowercase().contains(query))
}

/// Keep the rows matching `search`; a blank search keeps everything
pub fn filter_rows<T: TableRow + Clone>(rows: &[T], columns: &[Column<T>], search: &str) -> Vec<T> {
    if search.trim().is_empty() {
        return rows.to_vec();
    }

    let query = search.to_lowercase();
    rows.iter()
        .filter(|row| row_matches(*row, columns, &query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Person {
        name: &'static str,
        email: &'static str,
        phone: Option<&'static str>,
    }

    impl TableRow for Person {
        fn field(&self, key: &str) -> Option<String> {
            match key {
                "name" => Some(self.name.to_string()),
                "email" => Some(self.email.to_string()),
                "phone" => self.phone.map(str::to_string),
                _ => None,
            }
        }
    }

    fn people() -> Vec<Person> {
        vec![
            Person { name: "Ivan Petrov", email: "ivan@example.com", phone: Some("0888123456") },
            Person { name: "Maria Ivanova", email: "maria@example.com", phone: None },
            Person { name: "Georgi Dimitrov", email: "g.d@mail.bg", phone: Some("0877000111") },
        ]
    }

    fn columns() -> Vec<Column<Person>> {
        vec![
            Column::new("name", "Name"),
            Column::new("email", "Email"),
            Column::new("phone", "Phone").not_searchable(),
        ]
    }

    #[test]
    fn blank_search_keeps_all() {
        assert_eq!(filter_rows(&people(), &columns(), ""), people());
        assert_eq!(filter_rows(&people(), &columns(), "   "), people());
    }

    #[test]
    fn matches_any_column_case_insensitively() {
        let names: Vec<_> = filter_rows(&people(), &columns(), "IVAN")
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Ivan Petrov", "Maria Ivanova"]);

        let names: Vec<_> = filter_rows(&people(), &columns(), "mail.bg")
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Georgi Dimitrov"]);
    }

    #[test]
    fn skips_non_searchable_columns() {
        assert!(filter_rows(&people(), &columns(), "0888").is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        for query in ["iva", "example", "zzz", ""] {
            let once = filter_rows(&people(), &columns(), query);
            let twice = filter_rows(&once, &columns(), query);
            assert_eq!(once, twice, "query {query:?}");
        }
    }

    #[test]
    fn missing_fields_never_match() {
        let cols = vec![Column::<Person>::new("unknown", "Unknown")];
        assert!(filter_rows(&people(), &cols, "a").is_empty());
    }
}
