//! Statement handle
//!
//! The result of one executed statement. Rows are buffered client-side when
//! the statement runs, the MySQL driver default, and handed out cursor-style.

use std::collections::VecDeque;
use type_mapping::{ResultSet, Row};

/// An executed statement: remaining rows plus the execution summary
#[derive(Debug, Clone, Default)]
pub struct Statement {
    query: String,
    rows: VecDeque<Row>,
    total_rows: u64,
    rows_affected: u64,
    last_insert_id: u64,
    has_result_set: bool,
}

impl Statement {
    pub(crate) fn new(
        query: String,
        rows: VecDeque<Row>,
        rows_affected: u64,
        last_insert_id: u64,
        has_result_set: bool,
    ) -> Self {
        Self {
            query,
            total_rows: rows.len() as u64,
            rows,
            rows_affected,
            last_insert_id,
            has_result_set,
        }
    }

    /// The statement text as sent, with named placeholders intact
    pub fn query_string(&self) -> &str {
        &self.query
    }

    /// Advance the cursor and return the next row, if any
    pub fn fetch(&mut self) -> Option<Row> {
        self.rows.pop_front()
    }

    /// Take every row not yet fetched
    pub fn fetch_all(&mut self) -> ResultSet {
        self.rows.drain(..).collect()
    }

    /// Rows not yet fetched
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }

    /// Rows produced by a SELECT, otherwise rows changed by INSERT/UPDATE/DELETE
    pub fn row_count(&self) -> u64 {
        if self.has_result_set {
            self.total_rows
        } else {
            self.rows_affected
        }
    }

    /// Auto-increment id generated by the statement, 0 when none
    pub fn last_insert_id(&self) -> u64 {
        self.last_insert_id
    }

    /// Whether the statement produced rows at all
    pub fn has_result_set(&self) -> bool {
        self.has_result_set
    }
}

impl Iterator for Statement {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        self.fetch()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rows.len(), Some(self.rows.len()))
    }
}

/// Output of a read: materialized rows, or the statement to pull rows from
#[derive(Debug, Clone)]
pub enum Fetched {
    Rows(ResultSet),
    Cursor(Statement),
}

impl Fetched {
    pub(crate) fn from_statement(mut statement: Statement, fetch: bool) -> Self {
        if fetch {
            Fetched::Rows(statement.fetch_all())
        } else {
            Fetched::Cursor(statement)
        }
    }

    /// Materialize into rows, draining the cursor when there is one
    pub fn into_rows(self) -> ResultSet {
        match self {
            Fetched::Rows(rows) => rows,
            Fetched::Cursor(mut statement) => statement.fetch_all(),
        }
    }

    pub fn into_statement(self) -> Option<Statement> {
        match self {
            Fetched::Rows(_) => None,
            Fetched::Cursor(statement) => Some(statement),
        }
    }

    pub fn is_cursor(&self) -> bool {
        matches!(self, Fetched::Cursor(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use type_mapping::params_from;

    fn rows(n: i64) -> VecDeque<Row> {
        (1..=n)
            .map(|id| params_from([("id", json!(id)), ("name", json!(format!("user{id}")))]))
            .collect()
    }

    #[test]
    fn test_cursor_fetch_then_fetch_all() {
        let mut statement = Statement::new("SELECT * FROM users".to_string(), rows(3), 0, 0, true);

        let first = statement.fetch().unwrap();
        assert_eq!(first["id"], json!(1));
        assert_eq!(statement.remaining(), 2);

        let rest = statement.fetch_all();
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[0]["name"], json!("user2"));
        assert!(statement.fetch().is_none());
        assert!(statement.fetch_all().is_empty());

        // row_count reports the result size regardless of how far the cursor moved
        assert_eq!(statement.row_count(), 3);
    }

    #[test]
    fn test_write_statement_summary() {
        let statement = Statement::new(
            "INSERT INTO users (name) VALUES (:name)".to_string(),
            VecDeque::new(),
            1,
            42,
            false,
        );
        assert_eq!(statement.row_count(), 1);
        assert_eq!(statement.last_insert_id(), 42);
        assert!(!statement.has_result_set());
        assert_eq!(
            statement.query_string(),
            "INSERT INTO users (name) VALUES (:name)"
        );
    }

    #[test]
    fn test_iterates_rows() {
        let statement = Statement::new("SELECT * FROM users".to_string(), rows(4), 0, 0, true);
        let ids: Vec<_> = statement.map(|row| row["id"].clone()).collect();
        assert_eq!(ids, vec![json!(1), json!(2), json!(3), json!(4)]);
    }

    #[test]
    fn test_fetched_into_rows() {
        let cursor = Fetched::Cursor(Statement::new("q".to_string(), rows(2), 0, 0, true));
        assert!(cursor.is_cursor());
        assert_eq!(cursor.into_rows().len(), 2);

        let materialized = Fetched::Rows(rows(5).into_iter().collect());
        assert!(!materialized.is_cursor());
        assert!(materialized.clone().into_statement().is_none());
        assert_eq!(materialized.into_rows().len(), 5);
    }
}
