//! Table metadata for model-backed widgets.
//!
//! A [`DatabaseMap`] is a plain container of [`TableMap`]s; map builders
//! declare one table each and are applied to a map explicitly.

pub mod article;

use serde::{Deserialize, Serialize};

pub use article::ArticleMapBuilder;

/// Column types as declared by the generated table maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnType {
    Boolean,
    Integer,
    BigInt,
    Float,
    Double,
    Decimal,
    Char,
    Varchar,
    LongVarchar,
    Date,
    Time,
    Timestamp,
    Blob,
    Clob,
}

/// Target of a foreign-key column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyRef {
    pub table: String,
    pub column: String,
}

/// Metadata for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    /// Column name in the database, e.g. `CATEGORY_ID`
    pub column_name: String,
    /// Name of the accessor on the model, e.g. `CategoryId`
    pub model_name: String,
    /// Model-level type of the field (`int`, `string`, `boolean`)
    pub field_type: String,
    pub column_type: ColumnType,
    pub not_null: bool,
    pub size: Option<u32>,
    pub primary_key: bool,
    pub foreign_key: Option<ForeignKeyRef>,
}

impl ColumnMap {
    pub fn is_foreign_key(&self) -> bool {
        self.foreign_key.is_some()
    }
}

/// Metadata for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMap {
    pub name: String,
    pub model_name: String,
    pub use_id_generator: bool,
    columns: Vec<ColumnMap>,
}

impl TableMap {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            model_name: name.clone(),
            name,
            use_id_generator: false,
            columns: Vec::new(),
        }
    }

    pub fn set_model_name(&mut self, model_name: impl Into<String>) {
        self.model_name = model_name.into();
    }

    pub fn set_use_id_generator(&mut self, use_id_generator: bool) {
        self.use_id_generator = use_id_generator;
    }

    pub fn add_column(
        &mut self,
        column_name: &str,
        model_name: &str,
        field_type: &str,
        column_type: ColumnType,
        not_null: bool,
        size: Option<u32>,
    ) -> &mut ColumnMap {
        self.columns.push(ColumnMap {
            column_name: column_name.to_string(),
            model_name: model_name.to_string(),
            field_type: field_type.to_string(),
            column_type,
            not_null,
            size,
            primary_key: false,
            foreign_key: None,
        });
        let index = self.columns.len() - 1;
        &mut self.columns[index]
    }

    pub fn add_primary_key(
        &mut self,
        column_name: &str,
        model_name: &str,
        field_type: &str,
        column_type: ColumnType,
        not_null: bool,
        size: Option<u32>,
    ) -> &mut ColumnMap {
        let column =
            self.add_column(column_name, model_name, field_type, column_type, not_null, size);
        column.primary_key = true;
        column
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_foreign_key(
        &mut self,
        column_name: &str,
        model_name: &str,
        field_type: &str,
        column_type: ColumnType,
        foreign_table: &str,
        foreign_column: &str,
        not_null: bool,
        size: Option<u32>,
    ) -> &mut ColumnMap {
        let column =
            self.add_column(column_name, model_name, field_type, column_type, not_null, size);
        column.foreign_key = Some(ForeignKeyRef {
            table: foreign_table.to_string(),
            column: foreign_column.to_string(),
        });
        column
    }

    /// Look a column up by database name, ignoring case.
    pub fn column(&self, column_name: &str) -> Option<&ColumnMap> {
        self.columns
            .iter()
            .find(|c| c.column_name.eq_ignore_ascii_case(column_name))
    }

    pub fn columns(&self) -> &[ColumnMap] {
        &self.columns
    }

    pub fn primary_keys(&self) -> impl Iterator<Item = &ColumnMap> {
        self.columns.iter().filter(|c| c.primary_key)
    }

    pub fn foreign_keys(&self) -> impl Iterator<Item = &ColumnMap> {
        self.columns.iter().filter(|c| c.is_foreign_key())
    }
}

/// Tables known to one database connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseMap {
    pub name: String,
    tables: Vec<TableMap>,
}

impl DatabaseMap {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: Vec::new(),
        }
    }

    /// Add a table, replacing any table of the same name.
    pub fn add_table(&mut self, name: &str) -> &mut TableMap {
        self.tables.retain(|t| t.name != name);
        self.tables.push(TableMap::new(name));
        let index = self.tables.len() - 1;
        &mut self.tables[index]
    }

    pub fn table(&self, name: &str) -> Option<&TableMap> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn tables(&self) -> &[TableMap] {
        &self.tables
    }

    /// Apply a builder to this map
    pub fn with<B: MapBuilder + ?Sized>(mut self, builder: &B) -> Self {
        builder.build(&mut self);
        self
    }
}

/// Declares one table's metadata into a [`DatabaseMap`].
pub trait MapBuilder {
    /// Name of the table this builder declares
    fn table_name(&self) -> &str;

    fn build(&self, database: &mut DatabaseMap);

    /// True when `database` already holds this builder's table
    fn is_built(&self, database: &DatabaseMap) -> bool {
        database.table(self.table_name()).is_some()
    }
}
