//! Row sources for model-backed selects.

use std::collections::BTreeMap;

use crate::mapping::{DatabaseMap, TableMap};
use crate::value::ValueMap;

/// A row, keyed by lower-case column name.
pub type Record = ValueMap;

/// Supplies rows (and optionally table metadata) to model selects.
pub trait RecordSource: Send + Sync {
    /// Every row of `table`, or `None` when the table is unknown.
    fn records(&self, table: &str) -> Option<Vec<Record>>;

    /// Metadata for `table`, when the source has any
    fn table_map(&self, _table: &str) -> Option<&TableMap> {
        None
    }

    fn has_table(&self, table: &str) -> bool {
        self.records(table).is_some()
    }
}

/// A [`RecordSource`] holding rows in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecords {
    tables: BTreeMap<String, Vec<Record>>,
    database: Option<DatabaseMap>,
}

impl InMemoryRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach table metadata, used to find primary keys
    pub fn with_database(mut self, database: DatabaseMap) -> Self {
        self.database = Some(database);
        self
    }

    /// Add a table and its rows
    pub fn with_table(mut self, table: impl Into<String>, rows: Vec<Record>) -> Self {
        self.insert_table(table, rows);
        self
    }

    pub fn insert_table(&mut self, table: impl Into<String>, rows: Vec<Record>) {
        self.tables.insert(table.into(), rows);
    }

    pub fn push(&mut self, table: &str, row: Record) {
        self.tables.entry(table.to_string()).or_default().push(row);
    }
}

impl From<BTreeMap<String, Vec<Record>>> for InMemoryRecords {
    fn from(tables: BTreeMap<String, Vec<Record>>) -> Self {
        Self {
            tables,
            database: None,
        }
    }
}

impl RecordSource for InMemoryRecords {
    fn records(&self, table: &str) -> Option<Vec<Record>> {
        self.tables.get(table).cloned()
    }

    fn table_map(&self, table: &str) -> Option<&TableMap> {
        self.database.as_ref().and_then(|db| db.table(table))
    }

    fn has_table(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::ArticleMapBuilder;
    use crate::value::value_map;

    #[test]
    fn test_in_memory_records() {
        let mut source =
            InMemoryRecords::new().with_table("category", vec![value_map([("id", 1)])]);
        source.push("category", value_map([("id", 2)]));
        source.push("book", value_map([("id", 7)]));

        assert_eq!(source.records("category").unwrap().len(), 2);
        assert_eq!(source.records("book").unwrap().len(), 1);
        assert!(source.records("author").is_none());
        assert!(!source.has_table("author"));
    }

    #[test]
    fn test_table_map_comes_from_database() {
        let source = InMemoryRecords::new()
            .with_database(DatabaseMap::new("main").with(&ArticleMapBuilder));

        assert!(source.table_map("article").is_some());
        assert!(source.table_map("category").is_none());
    }
}
