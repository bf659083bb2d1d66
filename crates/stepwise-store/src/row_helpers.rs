use crate::error::StoreError;

/// Get a required column value from a row, returning CorruptRow on failure.
pub fn get<T: rusqlite::types::FromSql>(
    row: &rusqlite::Row<'_>,
    idx: usize,
    table: &'static str,
    column: &'static str,
) -> Result<T, StoreError> {
    row.get(idx).map_err(|e| StoreError::CorruptRow {
        table,
        column,
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;

    #[test]
    fn get_maps_type_mismatch_to_corrupt_row() {
        let db = Database::in_memory().unwrap();
        let result = db.with_conn(|conn| {
            conn.query_row("SELECT 'not-a-number'", [], |row| {
                Ok(get::<i64>(row, 0, "tasks", "position"))
            })
            .map_err(StoreError::from)
        });
        assert!(matches!(
            result.unwrap(),
            Err(StoreError::CorruptRow {
                table: "tasks",
                column: "position",
                ..
            })
        ));
    }
}
