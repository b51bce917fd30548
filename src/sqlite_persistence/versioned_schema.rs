use anyhow::{bail, Result};
use rusqlite::Connection;

/// Offset added to the schema version stored in `PRAGMA user_version`, so a
/// database that was never initialized (version 0) is not mistaken for one.
pub const BASE_DB_VERSION: usize = 700;

pub struct Table {
    pub name: &'static str,
    pub schema: &'static str,
    pub columns: &'static [&'static str],
    pub indices: &'static [&'static str],
}

impl Table {
    pub fn create(&self, conn: &Connection) -> Result<()> {
        conn.execute(self.schema, [])?;
        for index in self.indices {
            conn.execute(index, [])?;
        }
        Ok(())
    }
}

pub struct VersionedSchema {
    pub version: usize,
    pub tables: &'static [Table],
    pub migration: Option<fn(&Connection) -> Result<()>>,
}

impl VersionedSchema {
    /// Creates every table of this version from scratch and stamps the db.
    pub fn create(&self, conn: &Connection) -> Result<()> {
        conn.execute("PRAGMA foreign_keys = ON;", [])?;
        for table in self.tables {
            table.create(conn)?;
        }
        conn.execute(
            &format!("PRAGMA user_version = {}", BASE_DB_VERSION + self.version),
            [],
        )?;
        Ok(())
    }

    pub fn validate(&self, conn: &Connection) -> Result<()> {
        for table in self.tables {
            validate_table_columns(conn, table)?;
        }
        Ok(())
    }
}

pub fn validate_table_columns(conn: &Connection, table: &Table) -> Result<()> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({});", table.name))?;
    let columns: Vec<String> = stmt
        .query_map([], |row| row.get(1))?
        .collect::<Result<_, _>>()?;

    if columns.len() != table.columns.len() {
        bail!(
            "Schema validation failed for {} table, should have {} columns but actually has {}.",
            table.name,
            table.columns.len(),
            columns.len()
        );
    }
    for name in table.columns {
        if !columns.iter().any(|c| c == name) {
            bail!(
                "Schema validation failed for {} table, missing {} column.",
                table.name,
                name
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const THING_TABLE: Table = Table {
        name: "thing",
        schema: "CREATE TABLE thing (id INTEGER PRIMARY KEY, label TEXT NOT NULL)",
        columns: &["id", "label"],
        indices: &["CREATE INDEX thing_label_index ON thing (label);"],
    };

    #[test]
    fn creates_and_validates_schema() {
        let conn = Connection::open_in_memory().unwrap();
        let schema = VersionedSchema {
            version: 3,
            tables: &[THING_TABLE],
            migration: None,
        };
        schema.create(&conn).unwrap();
        schema.validate(&conn).unwrap();

        let version: usize = conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, BASE_DB_VERSION + 3);
    }

    #[test]
    fn validation_detects_missing_columns() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE thing (id INTEGER PRIMARY KEY, other TEXT)", [])
            .unwrap();
        assert!(validate_table_columns(&conn, &THING_TABLE).is_err());
    }
}
