use crate::dataset::RawTable;
use crate::error::{AppError, AppResult};
use crate::models::{Catalog, CatalogItem, DESCRIPTION_PLACEHOLDER};

/// Title column candidates, highest priority first.
const TITLE_CANDIDATES: &[&str] = &["title", "name", "movie"];

/// Description column candidates, highest priority first.
const DESCRIPTION_CANDIDATES: &[&str] = &["description", "overview", "plot", "synopsis"];

/// Resolves the variable source schema and produces a uniform catalog.
///
/// Column names are matched case-insensitively. Every logical field is
/// resolved once, up front, from an ordered candidate list; absent columns
/// and null cells fall back to the field's named default. Rows whose
/// resolved title is empty are dropped; the order of surviving rows is
/// preserved.
pub fn normalize(table: &RawTable) -> AppResult<Catalog> {
    let columns: Vec<String> = table
        .columns
        .iter()
        .map(|c| c.trim().to_lowercase())
        .collect();
    let find = |name: &str| columns.iter().position(|c| c == name);

    let title_col = TITLE_CANDIDATES
        .iter()
        .find_map(|c| find(c))
        .ok_or_else(|| {
            AppError::Schema("no title-like column (title, name or movie) in dataset".to_string())
        })?;
    let desc_col = DESCRIPTION_CANDIDATES.iter().find_map(|c| find(c));

    let genre_col = find("genre");
    let director_col = find("director");
    let actors_col = find("actors");
    let stars_col = find("stars");
    let rating_col = find("rating");

    let mut items = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let title = text_field(row, Some(title_col));
        if title.is_empty() {
            continue;
        }

        let description = desc_col
            .and_then(|col| row.get(col))
            .and_then(|cell| cell.clone())
            .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string());

        items.push(CatalogItem::new(
            title,
            text_field(row, genre_col),
            text_field(row, director_col),
            text_field(row, actors_col),
            text_field(row, stars_col),
            text_field(row, rating_col),
            description,
        ));
    }

    if items.is_empty() {
        return Err(AppError::Schema(
            "no rows survived normalization; dataset is unusable".to_string(),
        ));
    }

    Ok(Catalog::new(items))
}

/// Resolved cell value for an optional column, defaulting to empty string
/// for absent columns and null cells.
fn text_field(row: &[Option<String>], col: Option<usize>) -> String {
    col.and_then(|c| row.get(c))
        .and_then(|cell| cell.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RawTable;

    fn table(columns: &[&str], rows: &[&[Option<&str>]]) -> RawTable {
        RawTable {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.map(str::to_string)).collect())
                .collect(),
        }
    }

    #[test]
    fn test_placeholder_when_no_description_column() {
        let table = table(
            &["title", "genre"],
            &[
                &[Some("Inception"), Some("Sci-Fi")],
                &[Some("Titanic"), Some("Romance")],
            ],
        );

        let catalog = normalize(&table).unwrap();
        for item in catalog.items() {
            assert_eq!(item.description, DESCRIPTION_PLACEHOLDER);
        }
    }

    #[test]
    fn test_null_description_cell_gets_placeholder() {
        let table = table(
            &["title", "overview"],
            &[
                &[Some("Inception"), Some("A thief steals secrets.")],
                &[Some("Titanic"), None],
            ],
        );

        let catalog = normalize(&table).unwrap();
        assert_eq!(
            catalog.get(0).unwrap().description,
            "A thief steals secrets."
        );
        assert_eq!(catalog.get(1).unwrap().description, DESCRIPTION_PLACEHOLDER);
    }

    #[test]
    fn test_empty_title_rows_dropped() {
        let table = table(
            &["title", "genre"],
            &[
                &[Some("Inception"), Some("Sci-Fi")],
                &[None, Some("Orphaned")],
                &[Some("Titanic"), Some("Romance")],
            ],
        );

        let catalog = normalize(&table).unwrap();
        assert_eq!(catalog.len(), 2);
        let titles: Vec<&str> = catalog.titles().collect();
        assert_eq!(titles, vec!["Inception", "Titanic"]);
    }

    #[test]
    fn test_missing_columns_default_to_empty() {
        let table = table(&["title"], &[&[Some("Inception")]]);

        let catalog = normalize(&table).unwrap();
        let item = catalog.get(0).unwrap();
        assert_eq!(item.genre, "");
        assert_eq!(item.director, "");
        assert_eq!(item.actors, "");
        assert_eq!(item.stars, "");
        assert_eq!(item.rating, "");
    }

    #[test]
    fn test_column_names_matched_case_insensitively() {
        let table = table(
            &["Name", "GENRE", "Director"],
            &[&[Some("Inception"), Some("Sci-Fi"), Some("Christopher Nolan")]],
        );

        let catalog = normalize(&table).unwrap();
        let item = catalog.get(0).unwrap();
        assert_eq!(item.title, "Inception");
        assert_eq!(item.genre, "Sci-Fi");
        assert_eq!(item.director, "Christopher Nolan");
    }

    #[test]
    fn test_title_candidates_resolve_in_priority_order() {
        // `name` outranks `movie` when both are present
        let table = table(
            &["movie", "name"],
            &[&[Some("From Movie Column"), Some("From Name Column")]],
        );

        let catalog = normalize(&table).unwrap();
        assert_eq!(catalog.get(0).unwrap().title, "From Name Column");
    }

    #[test]
    fn test_schema_error_when_no_title_column() {
        let table = table(&["genre"], &[&[Some("Sci-Fi")]]);
        let err = normalize(&table).unwrap_err();
        assert!(matches!(err, AppError::Schema(_)));
    }

    #[test]
    fn test_schema_error_when_no_rows_survive() {
        let table = table(&["title", "genre"], &[&[None, Some("Sci-Fi")]]);
        let err = normalize(&table).unwrap_err();
        assert!(matches!(err, AppError::Schema(_)));
    }
}
