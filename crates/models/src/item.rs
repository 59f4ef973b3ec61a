use serde::{Deserialize, Serialize};

/// One catalog entry, persisted as `{id, name, description, imageUri}`.
///
/// `image_uri` is opaque: a bundled-asset URI, a `data:` URI carrying the
/// picked image bytes, or empty for "no image". It is never decoded here.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_uri: String,
}

impl CatalogItem {
    pub fn has_image(&self) -> bool {
        !self.image_uri.is_empty()
    }
}

/// User-supplied fields of a new item; the store assigns the id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub image_uri: String,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn image_uri(mut self, image_uri: impl Into<String>) -> Self {
        self.image_uri = image_uri.into();
        self
    }

    pub fn into_item(self, id: String) -> CatalogItem {
        CatalogItem {
            id,
            name: self.name,
            description: self.description,
            image_uri: self.image_uri,
        }
    }
}
