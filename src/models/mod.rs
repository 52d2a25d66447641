use serde::{Deserialize, Serialize};

/// Fallback description applied when the source has no description-like
/// column or a row's cell is null.
pub const DESCRIPTION_PLACEHOLDER: &str = "Description not available";

/// One normalized row of the working dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub title: String,
    pub genre: String,
    pub director: String,
    pub actors: String,
    pub stars: String,
    pub rating: String,
    pub description: String,
    /// Lowercase space-join of genre, description, director, actors and
    /// stars. Derived once at construction; the unit of vectorization.
    pub tag: String,
}

impl CatalogItem {
    /// Creates a catalog item, deriving its composite tag
    pub fn new(
        title: String,
        genre: String,
        director: String,
        actors: String,
        stars: String,
        rating: String,
        description: String,
    ) -> Self {
        let tag = format!(
            "{} {} {} {} {}",
            genre, description, director, actors, stars
        )
        .to_lowercase();

        Self {
            title,
            genre,
            director,
            actors,
            stars,
            rating,
            description,
            tag,
        }
    }
}

/// Ordered, index-addressable sequence of catalog items.
///
/// Position is the stable identity correlating items with similarity
/// matrix rows and columns; the catalog is never mutated after build.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    /// Titles in catalog order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.title.as_str())
    }

    /// First catalog index whose title equals `title` exactly
    /// (case-sensitive; duplicate titles resolve to the first match)
    pub fn position(&self, title: &str) -> Option<usize> {
        self.items.iter().position(|item| item.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> CatalogItem {
        CatalogItem::new(
            title.to_string(),
            "Action".to_string(),
            "Jane Doe".to_string(),
            String::new(),
            String::new(),
            String::new(),
            "A Heist.".to_string(),
        )
    }

    #[test]
    fn test_tag_is_lowercase_five_field_join() {
        let item = CatalogItem::new(
            "Inception".to_string(),
            "Sci-Fi".to_string(),
            "Christopher Nolan".to_string(),
            "Leonardo DiCaprio".to_string(),
            "Elliot Page".to_string(),
            "PG-13".to_string(),
            "A thief steals secrets.".to_string(),
        );

        assert_eq!(
            item.tag,
            "sci-fi a thief steals secrets. christopher nolan leonardo dicaprio elliot page"
        );
    }

    #[test]
    fn test_position_first_match_wins() {
        let catalog = Catalog::new(vec![item("A"), item("B"), item("A")]);
        assert_eq!(catalog.position("A"), Some(0));
        assert_eq!(catalog.position("B"), Some(1));
        assert_eq!(catalog.position("C"), None);
    }

    #[test]
    fn test_position_is_case_sensitive() {
        let catalog = Catalog::new(vec![item("Inception")]);
        assert_eq!(catalog.position("inception"), None);
    }
}
