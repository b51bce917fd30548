mod versioned_schema;

pub use versioned_schema::{validate_table_columns, Table, VersionedSchema, BASE_DB_VERSION};
