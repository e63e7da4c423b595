//! Per-dataset layouts: source columns, aliases, rules and outputs.

mod profile;

pub use profile::{ColumnMap, DatasetKind, DatasetProfile};

use tracing::debug;

use crate::input::Table;

/// Applies the header aliases of `profile` to `table`.
///
/// An alias is only applied when the target column is absent, so a sheet
/// carrying both names keeps its canonical column.
pub fn apply_aliases(table: &mut Table, profile: &DatasetProfile) {
    for (from, to) in profile.aliases {
        if table.column_index(to).is_none() && table.rename_column(from, to) {
            debug!(from = %from, to = %to, "Renamed column");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_alias_renames_missing_column() {
        let mut table = Table::new(
            "APOSENTADOS",
            headers(&["ID_APOSENTADO_CPF", "DATA DE INGRESSO NO ENTE"]),
            vec![],
        );
        apply_aliases(&mut table, &DatasetKind::Aposentados.profile());

        assert_eq!(table.column_index("DT_ING_ENTE"), Some(1));
        assert_eq!(table.column_index("DATA DE INGRESSO NO ENTE"), None);
    }

    #[test]
    fn test_alias_keeps_existing_canonical_column() {
        let mut table = Table::new(
            "APOSENTADOS",
            headers(&["DT_ING_ENTE", "DATA DE INGRESSO NO ENTE"]),
            vec![],
        );
        apply_aliases(&mut table, &DatasetKind::Aposentados.profile());

        assert_eq!(table.column_index("DT_ING_ENTE"), Some(0));
        assert_eq!(table.column_index("DATA DE INGRESSO NO ENTE"), Some(1));
    }
}
