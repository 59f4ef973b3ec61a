use std::sync::Arc;

use configs::LoadConflictPolicy;
use models::{category::RECIPES_STORAGE_KEY, Recipe, RecipeDraft};

use crate::errors::StoreError;
use crate::storage::PersistenceAdapter;
use crate::store::{list_store::ListStore, LoadOutcome, PendingWrite, Subscription};

/// Free-form recipe notes kept under their own storage key.
///
/// Recipes carry no id; they are addressed by position in the list.
#[derive(Clone)]
pub struct RecipeBook {
    list: Arc<ListStore<Recipe>>,
}

impl RecipeBook {
    pub fn new(adapter: Arc<dyn PersistenceAdapter>, on_conflict: LoadConflictPolicy) -> Self {
        Self::with_key(RECIPES_STORAGE_KEY, adapter, on_conflict)
    }

    pub fn with_key(key: impl Into<String>, adapter: Arc<dyn PersistenceAdapter>, on_conflict: LoadConflictPolicy) -> Self {
        Self { list: ListStore::new(key, Vec::new(), adapter, on_conflict) }
    }

    pub fn key(&self) -> &str {
        self.list.key()
    }

    pub async fn activate(&self) -> LoadOutcome {
        self.list.activate().await
    }

    pub async fn load(&self) -> LoadOutcome {
        self.list.load().await
    }

    pub fn add(&self, draft: RecipeDraft) -> Result<PendingWrite, StoreError> {
        let recipe = draft.into_recipe()?;
        Ok(self.list.mutate(move |current| {
            let mut next = current.to_vec();
            next.push(recipe.clone());
            next
        }))
    }

    pub fn replace_at(&self, index: usize, draft: RecipeDraft) -> Result<PendingWrite, StoreError> {
        let recipe = draft.into_recipe()?;
        self.check_index(index)?;
        Ok(self.list.mutate(move |current| {
            let mut next = current.to_vec();
            if let Some(slot) = next.get_mut(index) {
                *slot = recipe.clone();
            }
            next
        }))
    }

    pub fn remove_at(&self, index: usize) -> Result<PendingWrite, StoreError> {
        self.check_index(index)?;
        Ok(self.list.mutate(move |current| {
            current
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, r)| r.clone())
                .collect()
        }))
    }

    pub fn current_list(&self) -> Arc<Vec<Recipe>> {
        self.list.snapshot()
    }

    pub fn len(&self) -> usize {
        self.list.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.snapshot().is_empty()
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&[Recipe]) + Send + Sync + 'static,
    {
        self.list.subscribe(listener)
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index >= self.len() {
            return Err(StoreError::not_found(&format!("recipe #{index}")));
        }
        Ok(())
    }
}

impl std::fmt::Debug for RecipeBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeBook")
            .field("key", &self.key())
            .field("recipes", &self.len())
            .finish()
    }
}
