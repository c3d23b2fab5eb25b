//! SQL text generation
//!
//! Table names and conditions are caller-trusted SQL text and are
//! interpolated verbatim. Only data values travel as named parameters.

use crate::pagination::Pagination;
use type_mapping::StatementParams;

/// Column holding the soft-delete timestamp
pub const SOFT_DELETE_COLUMN: &str = "deleted_at";

pub struct SqlGenerator;

impl SqlGenerator {
    /// `INSERT INTO t (a, b) VALUES (:a, :b)`, columns in parameter order
    pub fn insert(table: &str, data: &StatementParams) -> String {
        let keys: Vec<&str> = data.keys().map(|key| strip_colon(key)).collect();
        format!(
            "INSERT INTO {} ({}) VALUES (:{})",
            table,
            keys.join(", "),
            keys.join(", :")
        )
    }

    /// `SELECT * FROM t [WHERE condition]`
    pub fn select(table: &str, condition: &str) -> String {
        let mut sql = String::with_capacity(14 + table.len() + condition.len() + 7);
        sql.push_str("SELECT * FROM ");
        sql.push_str(table);
        if has_condition(condition) {
            sql.push_str(" WHERE ");
            sql.push_str(condition);
        }
        sql
    }

    /// `SELECT * FROM t WHERE deleted_at IS NULL [AND (condition)]`.
    /// The condition is parenthesized so an `OR` cannot escape the filter.
    pub fn select_active(table: &str, condition: &str) -> String {
        let mut sql = format!(
            "SELECT * FROM {} WHERE {} IS NULL",
            table, SOFT_DELETE_COLUMN
        );
        if has_condition(condition) {
            sql.push_str(" AND (");
            sql.push_str(condition);
            sql.push(')');
        }
        sql
    }

    /// `SELECT * FROM t [WHERE condition] LIMIT n OFFSET m`
    pub fn select_page(table: &str, condition: &str, pagination: &Pagination) -> String {
        let mut sql = Self::select(table, condition);
        sql.push(' ');
        sql.push_str(&pagination.to_sql());
        sql
    }

    /// `SELECT COUNT(*) AS total FROM t [WHERE condition]`
    pub fn count(table: &str, condition: &str) -> String {
        let mut sql = format!("SELECT COUNT(*) AS total FROM {}", table);
        if has_condition(condition) {
            sql.push_str(" WHERE ");
            sql.push_str(condition);
        }
        sql
    }

    /// `UPDATE t SET a = :a, b = :b WHERE condition`
    pub fn update(table: &str, data: &StatementParams, condition: &str) -> String {
        let set_clause = data
            .keys()
            .map(|key| {
                let key = strip_colon(key);
                let mut assignment = String::with_capacity(key.len() * 2 + 4);
                assignment.push_str(key);
                assignment.push_str(" = :");
                assignment.push_str(key);
                assignment
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!("UPDATE {} SET {} WHERE {}", table, set_clause, condition)
    }

    /// `DELETE FROM t WHERE condition`
    pub fn delete(table: &str, condition: &str) -> String {
        format!("DELETE FROM {} WHERE {}", table, condition)
    }

    /// `UPDATE t SET deleted_at = NOW() WHERE condition`
    pub fn soft_delete(table: &str, condition: &str) -> String {
        format!(
            "UPDATE {} SET {} = NOW() WHERE {}",
            table, SOFT_DELETE_COLUMN, condition
        )
    }

    /// `UPDATE t SET deleted_at = NULL WHERE condition`
    pub fn restore(table: &str, condition: &str) -> String {
        format!(
            "UPDATE {} SET {} = NULL WHERE {}",
            table, SOFT_DELETE_COLUMN, condition
        )
    }
}

/// Blank conditions are treated as absent
fn has_condition(condition: &str) -> bool {
    !condition.trim().is_empty()
}

fn strip_colon(key: &str) -> &str {
    key.strip_prefix(':').unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use type_mapping::params_from;

    #[test]
    fn test_insert_columns_match_placeholders() {
        let data = params_from([
            ("name", json!("Ada")),
            ("email", json!("ada@example.com")),
            ("age", json!(36)),
        ]);
        assert_eq!(
            SqlGenerator::insert("users", &data),
            "INSERT INTO users (name, email, age) VALUES (:name, :email, :age)"
        );
    }

    #[test]
    fn test_insert_n_columns_n_placeholders() {
        for n in 1..=12 {
            let data: StatementParams = (0..n).map(|i| (format!("c{i}"), json!(i))).collect();
            let sql = SqlGenerator::insert("t", &data);

            let (columns, values) = sql
                .strip_prefix("INSERT INTO t (")
                .and_then(|rest| rest.strip_suffix(')'))
                .and_then(|rest| rest.split_once(") VALUES ("))
                .unwrap();
            let columns: Vec<&str> = columns.split(", ").collect();
            let values: Vec<&str> = values.split(", ").collect();

            assert_eq!(columns.len(), n);
            assert_eq!(values.len(), n);
            for (column, value) in columns.iter().zip(&values) {
                assert_eq!(format!(":{column}"), *value);
            }
        }
    }

    #[test]
    fn test_insert_strips_colon_keys() {
        let data = params_from([(":name", json!("x"))]);
        assert_eq!(
            SqlGenerator::insert("t", &data),
            "INSERT INTO t (name) VALUES (:name)"
        );
    }

    #[test]
    fn test_select() {
        assert_eq!(SqlGenerator::select("users", ""), "SELECT * FROM users");
        assert_eq!(SqlGenerator::select("users", "   "), "SELECT * FROM users");
        assert_eq!(
            SqlGenerator::select("users", "id = 1"),
            "SELECT * FROM users WHERE id = 1"
        );
    }

    #[test]
    fn test_select_active() {
        assert_eq!(
            SqlGenerator::select_active("users", ""),
            "SELECT * FROM users WHERE deleted_at IS NULL"
        );
        assert_eq!(
            SqlGenerator::select_active("users", "role = 'admin'"),
            "SELECT * FROM users WHERE deleted_at IS NULL AND (role = 'admin')"
        );
    }

    #[test]
    fn test_select_active_keeps_or_inside_filter() {
        assert_eq!(
            SqlGenerator::select_active("users", "id = 2 OR id = 3"),
            "SELECT * FROM users WHERE deleted_at IS NULL AND (id = 2 OR id = 3)"
        );
    }

    #[test]
    fn test_select_page() {
        assert_eq!(
            SqlGenerator::select_page("users", "", &Pagination::new(2, 10)),
            "SELECT * FROM users LIMIT 10 OFFSET 10"
        );
        assert_eq!(
            SqlGenerator::select_page("users", "age > 30", &Pagination::default()),
            "SELECT * FROM users WHERE age > 30 LIMIT 10 OFFSET 0"
        );
    }

    #[test]
    fn test_count() {
        assert_eq!(
            SqlGenerator::count("users", ""),
            "SELECT COUNT(*) AS total FROM users"
        );
        assert_eq!(
            SqlGenerator::count("users", "age > 30"),
            "SELECT COUNT(*) AS total FROM users WHERE age > 30"
        );
    }

    #[test]
    fn test_update() {
        let data = params_from([("name", json!("A"))]);
        assert_eq!(
            SqlGenerator::update("table", &data, "id = 5"),
            "UPDATE table SET name = :name WHERE id = 5"
        );

        let data = params_from([("name", json!("A")), (":email", json!("a@x"))]);
        assert_eq!(
            SqlGenerator::update("users", &data, "id = 5"),
            "UPDATE users SET name = :name, email = :email WHERE id = 5"
        );
    }

    #[test]
    fn test_delete_and_soft_delete() {
        assert_eq!(
            SqlGenerator::delete("users", "id = 3"),
            "DELETE FROM users WHERE id = 3"
        );
        assert_eq!(
            SqlGenerator::soft_delete("users", "id = 3"),
            "UPDATE users SET deleted_at = NOW() WHERE id = 3"
        );
        assert_eq!(
            SqlGenerator::restore("users", "id = 3"),
            "UPDATE users SET deleted_at = NULL WHERE id = 3"
        );
    }

    #[test]
    fn test_conditions_are_interpolated_verbatim() {
        // caller-trusted text, no escaping
        assert_eq!(
            SqlGenerator::delete("users", "name = 'O''Brien'"),
            "DELETE FROM users WHERE name = 'O''Brien'"
        );
    }
}
