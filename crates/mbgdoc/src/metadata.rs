use std::fmt;

use serde::Deserialize;

/// Catalog/schema/table triple identifying an introspected table.
///
/// Displays as the non-empty parts joined with `.`; a runtime table name,
/// when set, replaces the introspected table name in the output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QualifiedTable {
    /// Database catalog, if the driver reports one.
    #[serde(default)]
    pub catalog: Option<String>,
    /// Database schema, if the driver reports one.
    #[serde(default)]
    pub schema: Option<String>,
    /// Table name as introspected.
    pub table: String,
    /// Override used by generated code instead of the introspected name.
    #[serde(default)]
    pub runtime_table: Option<String>,
}

impl QualifiedTable {
    /// Creates an unqualified table identifier.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    pub fn with_catalog(mut self, catalog: impl Into<String>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_runtime_table(mut self, runtime_table: impl Into<String>) -> Self {
        self.runtime_table = Some(runtime_table.into());
        self
    }
}

impl fmt::Display for QualifiedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self
            .runtime_table
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(self.table.as_str());

        let parts = [self.catalog.as_deref(), self.schema.as_deref(), Some(table)];
        let mut first = true;
        for part in parts.into_iter().flatten().filter(|part| !part.is_empty()) {
            if !first {
                f.write_str(".")?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}

/// Table-level metadata consumed by the comment builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TableMetadata {
    /// Human-readable description from the database catalog.
    #[serde(default)]
    pub remarks: Option<String>,
    /// Qualified identifier.
    pub table: QualifiedTable,
    /// Driver-reported table type, e.g. `TABLE` or `VIEW`.
    #[serde(default)]
    pub table_type: String,
}

impl TableMetadata {
    pub fn new(table: QualifiedTable) -> Self {
        Self {
            remarks: None,
            table,
            table_type: String::new(),
        }
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    pub fn with_table_type(mut self, table_type: impl Into<String>) -> Self {
        self.table_type = table_type.into();
        self
    }

    /// Remarks, or the empty string when the catalog had none.
    pub fn remarks(&self) -> &str {
        self.remarks.as_deref().unwrap_or_default()
    }

    /// The qualified identifier rendered as text.
    pub fn qualified_name(&self) -> String {
        self.table.to_string()
    }
}

/// Column-level metadata consumed by the comment builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ColumnMetadata {
    /// Human-readable description from the database catalog.
    #[serde(default)]
    pub remarks: Option<String>,
    /// Column name exactly as it appears in the database.
    pub actual_column_name: String,
}

impl ColumnMetadata {
    pub fn new(actual_column_name: impl Into<String>) -> Self {
        Self {
            remarks: None,
            actual_column_name: actual_column_name.into(),
        }
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    /// Remarks, or the empty string when the catalog had none.
    pub fn remarks(&self) -> &str {
        self.remarks.as_deref().unwrap_or_default()
    }
}
