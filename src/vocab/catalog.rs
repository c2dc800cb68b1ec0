//! Vocabulary catalog - categories of words a game pool is drawn from.
//!
//! The catalog keeps categories in registration order (the order a category
//! picker lists them in) and indexes them by key for lookup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::item::VocabularyItem;
use crate::core::CatalogError;

/// A named group of vocabulary items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Lookup key (e.g. `"familia"`).
    pub key: String,

    /// Human-readable label.
    pub label: String,

    /// Words in display order.
    pub items: Vec<VocabularyItem>,
}

impl Category {
    /// Create an empty category.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            items: Vec::new(),
        }
    }

    /// Add a word.
    #[must_use]
    pub fn with_item(mut self, term: impl Into<String>, translation: impl Into<String>) -> Self {
        self.items.push(VocabularyItem::new(term, translation));
        self
    }
}

/// Registry of vocabulary categories.
///
/// ## Example
///
/// ```
/// use vocab_match::vocab::{Catalog, Category};
///
/// let mut catalog = Catalog::new();
/// catalog
///     .register(Category::new("colores", "Colores").with_item("Puka", "Rojo"))
///     .unwrap();
///
/// let pool = catalog.pool("colores").unwrap();
/// assert_eq!(pool[0].term, "Puka");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled Quechua/Spanish word lists.
    #[must_use]
    pub fn builtin() -> Self {
        let categories = vec![
            Category::new("basico", "Básico")
                .with_item("Allin", "Bueno/Bien")
                .with_item("Kusay", "Amor/Cariño")
                .with_item("Yachay", "Saber/Conocer")
                .with_item("Rimay", "Hablar")
                .with_item("Qhaway", "Ver/Mirar")
                .with_item("Pukllay", "Jugar")
                .with_item("Tusuy", "Bailar")
                .with_item("Takiy", "Cantar"),
            Category::new("familia", "Familia")
                .with_item("Ayllu", "Familia")
                .with_item("Mama", "Madre")
                .with_item("Tayta", "Padre")
                .with_item("Wawa", "Bebé/Niño")
                .with_item("Turi", "Hermano")
                .with_item("Pana", "Hermana")
                .with_item("Awicha", "Abuela")
                .with_item("Achu", "Abuelo"),
            Category::new("naturaleza", "Naturaleza")
                .with_item("Inti", "Sol")
                .with_item("Killa", "Luna")
                .with_item("Quyllur", "Estrella")
                .with_item("Mayu", "Río")
                .with_item("Urqu", "Montaña")
                .with_item("Sach'a", "Árbol")
                .with_item("Wayra", "Viento")
                .with_item("Para", "Lluvia"),
            Category::new("comida", "Comida")
                .with_item("Papa", "Papa/Patata")
                .with_item("Sara", "Maíz")
                .with_item("Kinwa", "Quinua")
                .with_item("Uchukuta", "Ají")
                .with_item("Yaku", "Agua")
                .with_item("Aswa", "Chicha")
                .with_item("T'anta", "Pan")
                .with_item("Aycha", "Carne"),
        ];

        let mut catalog = Self::new();
        for category in categories {
            catalog.insert(category);
        }
        catalog
    }

    /// Load a catalog from a JSON array of categories.
    ///
    /// Duplicate keys are rejected.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let categories: Vec<Category> = serde_json::from_str(content)?;

        let mut catalog = Self::new();
        for category in categories {
            catalog.register(category)?;
        }
        Ok(catalog)
    }

    /// Register a category.
    pub fn register(&mut self, category: Category) -> Result<(), CatalogError> {
        if self.index.contains_key(&category.key) {
            return Err(CatalogError::DuplicateCategory(category.key));
        }
        self.insert(category);
        Ok(())
    }

    fn insert(&mut self, category: Category) {
        self.index.insert(category.key.clone(), self.categories.len());
        self.categories.push(category);
    }

    /// Get a category by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Category> {
        self.index.get(key).map(|&i| &self.categories[i])
    }

    /// Get the words of a category, ready to hand to `MemoryGame::start_game`.
    pub fn pool(&self, key: &str) -> Result<&[VocabularyItem], CatalogError> {
        self.get(key)
            .map(|category| category.items.as_slice())
            .ok_or_else(|| CatalogError::UnknownCategory(key.to_string()))
    }

    /// Iterate over categories in registration order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the catalog has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();

        let keys: Vec<_> = catalog.categories().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["basico", "familia", "naturaleza", "comida"]);

        for category in catalog.categories() {
            assert_eq!(category.items.len(), 8, "{}", category.key);
        }

        let basico = catalog.pool("basico").unwrap();
        assert_eq!(basico[0], VocabularyItem::new("Allin", "Bueno/Bien"));
    }

    #[test]
    fn test_unknown_category() {
        let catalog = Catalog::builtin();
        let err = catalog.pool("numeros").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(ref key) if key == "numeros"));
    }

    #[test]
    fn test_duplicate_category() {
        let mut catalog = Catalog::new();
        catalog.register(Category::new("a", "A")).unwrap();

        let err = catalog.register(Category::new("a", "Again")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCategory(_)));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").unwrap().label, "A");
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"key": "colores", "label": "Colores", "items": [
                {"term": "Yurak", "translation": "Blanco"},
                {"term": "Yana", "translation": "Negro"}
            ]},
            {"key": "numeros", "label": "Números", "items": []}
        ]"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.pool("colores").unwrap().len(), 2);
        assert!(catalog.pool("numeros").unwrap().is_empty());
    }

    #[test]
    fn test_from_json_rejects_bad_content() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::InvalidContent(_))
        ));

        let dup = r#"[{"key": "a", "label": "A", "items": []},
                      {"key": "a", "label": "B", "items": []}]"#;
        assert!(matches!(
            Catalog::from_json(dup),
            Err(CatalogError::DuplicateCategory(_))
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.get("basico").is_none());
    }
}
