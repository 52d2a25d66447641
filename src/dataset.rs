use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::AppResult;

/// A parsed tabular dataset prior to schema normalization.
///
/// Column names are kept verbatim; empty cells are represented as `None`
/// so that downstream defaulting is explicit rather than inherited from
/// whatever the file format does with missing values.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Reads a headed CSV file into a `RawTable`.
pub fn load_csv(path: &Path) -> AppResult<RawTable> {
    let file = File::open(path)?;
    from_reader(file)
}

/// Parses headed CSV from any reader.
///
/// Records shorter than the header are padded with `None`; extra trailing
/// fields are ignored.
pub fn from_reader<R: Read>(reader: R) -> AppResult<RawTable> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let mut row: Vec<Option<String>> = record
            .iter()
            .take(columns.len())
            .map(|field| {
                if field.is_empty() {
                    None
                } else {
                    Some(field.to_string())
                }
            })
            .collect();
        row.resize(columns.len(), None);
        rows.push(row);
    }

    Ok(RawTable { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cells_become_null() {
        let csv = "title,genre\nInception,Sci-Fi\nTitanic,\n";
        let table = from_reader(csv.as_bytes()).unwrap();

        assert_eq!(table.columns, vec!["title", "genre"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][1], Some("Sci-Fi".to_string()));
        assert_eq!(table.rows[1][1], None);
    }

    #[test]
    fn test_short_records_padded_with_null() {
        let csv = "title,genre,director\nInception\n";
        let table = from_reader(csv.as_bytes()).unwrap();

        assert_eq!(table.rows[0].len(), 3);
        assert_eq!(table.rows[0][0], Some("Inception".to_string()));
        assert_eq!(table.rows[0][1], None);
        assert_eq!(table.rows[0][2], None);
    }
}
