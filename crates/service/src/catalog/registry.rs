use std::sync::Arc;

use configs::CatalogConfig;
use models::Category;
use tracing::info;

use crate::catalog::store::CatalogStore;
use crate::recipe_book::RecipeBook;
use crate::storage::PersistenceAdapter;
use crate::store::LoadOutcome;

/// The four drink catalogs plus the recipe notes, all backed by one adapter
/// under distinct keys. Stores never interact with each other.
#[derive(Clone, Debug)]
pub struct CatalogRegistry {
    stores: [CatalogStore; 4],
    recipes: RecipeBook,
}

/// Per-store outcome of [`CatalogRegistry::activate_all`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivationReport {
    pub catalogs: Vec<(Category, LoadOutcome)>,
    pub recipes: LoadOutcome,
}

impl CatalogRegistry {
    pub fn new(adapter: Arc<dyn PersistenceAdapter>, config: &CatalogConfig) -> Self {
        let stores = Category::ALL.map(|c| CatalogStore::for_category(c, Arc::clone(&adapter), config));
        let recipes = RecipeBook::new(adapter, config.on_load_conflict);
        Self { stores, recipes }
    }

    pub fn store(&self, category: Category) -> &CatalogStore {
        &self.stores[category.index()]
    }

    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &CatalogStore)> {
        Category::ALL.into_iter().zip(self.stores.iter())
    }

    /// Activate every store concurrently. Each one loads at most once.
    pub async fn activate_all(&self) -> ActivationReport {
        let [sake, wine, beer, cocktail] = &self.stores;
        let (s, w, b, c, r) = tokio::join!(
            sake.activate(),
            wine.activate(),
            beer.activate(),
            cocktail.activate(),
            self.recipes.activate(),
        );
        let report = ActivationReport {
            catalogs: vec![(Category::Sake, s), (Category::Wine, w), (Category::Beer, b), (Category::Cocktail, c)],
            recipes: r,
        };
        for (category, outcome) in &report.catalogs {
            info!(catalog = %category, ?outcome, items = self.store(*category).len(), "catalog active");
        }
        info!(outcome = ?report.recipes, recipes = self.recipes.len(), "recipe book active");
        report
    }
}
