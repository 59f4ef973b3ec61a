use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::item::CatalogItem;

/// Id carried by every built-in seed item.
pub const SEED_ITEM_ID: &str = "1";

/// Storage key of the free-form recipe notes.
pub const RECIPES_STORAGE_KEY: &str = "user_recipes";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sake,
    Wine,
    Beer,
    Cocktail,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Sake, Category::Wine, Category::Beer, Category::Cocktail];

    /// Fixed persistence key; these strings are on-device data and must not change.
    pub fn storage_key(self) -> &'static str {
        match self {
            Category::Sake => "user_sake_list",
            Category::Wine => "user_wine_list",
            Category::Beer => "user_beer_list",
            Category::Cocktail => "cocktailList",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Sake => "sake",
            Category::Wine => "wine",
            Category::Beer => "beer",
            Category::Cocktail => "cocktail",
        }
    }

    /// Position in [`Category::ALL`] and in per-category arrays.
    pub fn index(self) -> usize {
        match self {
            Category::Sake => 0,
            Category::Wine => 1,
            Category::Beer => 2,
            Category::Cocktail => 3,
        }
    }

    /// The single built-in item shown until storage supplies a list.
    pub fn seed(self) -> Vec<CatalogItem> {
        let (name, description, asset) = match self {
            Category::Sake => (
                "春鹿（奈良）",
                "冷やすと軽快に、お燗にするときりっとした旨味が味わえます。",
                "asset:/sakes/01.jpg",
            ),
            Category::Wine => (
                "サイゼリヤワイン１",
                "旨みのなるワイン。サイゼリヤの全てのメニューと合う。",
                "asset:/wines/wine01.png",
            ),
            Category::Beer => (
                "アサヒ　スーパードライ",
                "すっきりした飲み口で人気のビール。さすがに唐揚げとか焼き鳥との相性が最高。",
                "asset:/beers/beer01.png",
            ),
            Category::Cocktail => (
                "カシスオレンジ",
                "甘くて飲みやすいカクテル。自分は飲まないので何と合うかわからん。",
                "asset:/cocktails/cocktail01.png",
            ),
        };
        vec![CatalogItem {
            id: SEED_ITEM_ID.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            image_uri: asset.to_string(),
        }]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::Validation(format!("unknown category '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn storage_keys_are_distinct() {
        let keys: HashSet<_> = Category::ALL.iter().map(|c| c.storage_key()).collect();
        assert_eq!(keys.len(), 4);
        assert!(!keys.contains(RECIPES_STORAGE_KEY));
    }

    #[test]
    fn every_category_ships_one_seed_item() {
        for c in Category::ALL {
            let seed = c.seed();
            assert_eq!(seed.len(), 1, "{c}");
            assert_eq!(seed[0].id, SEED_ITEM_ID);
            assert!(seed[0].has_image());
        }
    }

    #[test]
    fn indices_match_all_order() {
        for (i, c) in Category::ALL.into_iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Beer".parse::<Category>(), Ok(Category::Beer));
        assert_eq!(" cocktail ".parse::<Category>(), Ok(Category::Cocktail));
        assert!("shochu".parse::<Category>().is_err());
    }
}
