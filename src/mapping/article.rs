//! Table map for the `article` table.

use crate::mapping::{ColumnType, DatabaseMap, MapBuilder};

#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleMapBuilder;

impl ArticleMapBuilder {
    pub const TABLE_NAME: &'static str = "article";
}

impl MapBuilder for ArticleMapBuilder {
    fn table_name(&self) -> &str {
        Self::TABLE_NAME
    }

    fn build(&self, database: &mut DatabaseMap) {
        let table = database.add_table(Self::TABLE_NAME);
        table.set_model_name("Article");
        table.set_use_id_generator(true);

        table.add_primary_key("ID", "Id", "int", ColumnType::Integer, true, None);
        table.add_column("TITLE", "Title", "string", ColumnType::Varchar, true, Some(255));
        table.add_column("BODY", "Body", "string", ColumnType::LongVarchar, false, None);
        table.add_column("ONLINE", "Online", "boolean", ColumnType::Boolean, false, None);
        table.add_column("EXCERPT", "Excerpt", "string", ColumnType::Varchar, false, None);
        table.add_foreign_key(
            "CATEGORY_ID",
            "CategoryId",
            "int",
            ColumnType::Integer,
            "category",
            "ID",
            true,
            None,
        );
        table.add_column("CREATED_AT", "CreatedAt", "int", ColumnType::Timestamp, false, None);
        table.add_column("END_DATE", "EndDate", "int", ColumnType::Timestamp, false, None);
        table.add_foreign_key(
            "BOOK_ID",
            "BookId",
            "int",
            ColumnType::Integer,
            "book",
            "ID",
            false,
            None,
        );

        tracing::debug!("Built table map for {}", Self::TABLE_NAME);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_map() -> DatabaseMap {
        DatabaseMap::new("main").with(&ArticleMapBuilder)
    }

    #[test]
    fn test_article_table() {
        let db = article_map();
        let table = db.table("article").unwrap();

        assert_eq!(table.model_name, "Article");
        assert!(table.use_id_generator);
        assert_eq!(table.columns().len(), 9);
        assert!(ArticleMapBuilder.is_built(&db));
        assert!(!ArticleMapBuilder.is_built(&DatabaseMap::new("empty")));
    }

    #[test]
    fn test_article_primary_key() {
        let db = article_map();
        let keys: Vec<&str> = db
            .table("article")
            .unwrap()
            .primary_keys()
            .map(|c| c.column_name.as_str())
            .collect();

        assert_eq!(keys, vec!["ID"]);
    }

    #[test]
    fn test_article_foreign_keys() {
        let db = article_map();
        let table = db.table("article").unwrap();
        let fks: Vec<(&str, &str, bool)> = table
            .foreign_keys()
            .map(|c| {
                let target = c.foreign_key.as_ref().unwrap();
                (c.column_name.as_str(), target.table.as_str(), c.not_null)
            })
            .collect();

        assert_eq!(fks, vec![("CATEGORY_ID", "category", true), ("BOOK_ID", "book", false)]);
    }

    #[test]
    fn test_article_column_details() {
        let db = article_map();
        let title = db.table("article").unwrap().column("title").unwrap();

        assert_eq!(title.model_name, "Title");
        assert_eq!(title.column_type, ColumnType::Varchar);
        assert!(title.not_null);
        assert_eq!(title.size, Some(255));

        let body = db.table("article").unwrap().column("BODY").unwrap();
        assert!(!body.not_null);
        assert_eq!(body.column_type, ColumnType::LongVarchar);
    }
}
