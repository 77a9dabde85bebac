//! Item catalog.
//!
//! Read-only lookup of placeable item definitions by key. The built-in
//! catalog covers the common appliances, storage and work surfaces; hosts
//! can load their own from JSON.

use kitchenplan_core::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::{Dimensions, ItemKind, PlacementClass};

/// Grouping used when presenting the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogCategory {
    Appliances,
    Storage,
    WorkSurfaces,
}

impl CatalogCategory {
    pub fn title(&self) -> &'static str {
        match self {
            CatalogCategory::Appliances => "Appliances",
            CatalogCategory::Storage => "Storage",
            CatalogCategory::WorkSurfaces => "Work Surfaces",
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kind: ItemKind,
    pub category: CatalogCategory,
    pub default_dimensions: Dimensions,
    /// Defaults to the kind's color when absent
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub model_ref: Option<String>,
    #[serde(default = "default_floor_placement")]
    pub floor_placement: bool,
    #[serde(default)]
    pub label: Option<String>,
}

fn default_floor_placement() -> bool {
    true
}

impl ItemDefinition {
    pub fn placement_class(&self) -> PlacementClass {
        if self.floor_placement {
            PlacementClass::Floor
        } else {
            PlacementClass::Elevated
        }
    }

    pub fn color(&self) -> &str {
        self.color
            .as_deref()
            .unwrap_or_else(|| self.kind.default_color())
    }
}

#[derive(Deserialize)]
struct CatalogDocument {
    items: Vec<ItemDefinition>,
}

/// Ordered set of item definitions indexed by key.
#[derive(Debug, Clone)]
pub struct Catalog {
    definitions: Vec<ItemDefinition>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate keys and unusable dimensions.
    pub fn new(definitions: Vec<ItemDefinition>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(definitions.len());
        for (position, definition) in definitions.iter().enumerate() {
            if !definition.default_dimensions.is_valid() {
                return Err(CatalogError::InvalidDimensions {
                    key: definition.key.clone(),
                    reason: format!("{:?}", definition.default_dimensions),
                });
            }
            if index.insert(definition.key.clone(), position).is_some() {
                return Err(CatalogError::DuplicateItem {
                    key: definition.key.clone(),
                });
            }
        }
        Ok(Self { definitions, index })
    }

    /// Parse a catalog document of the form `{ "items": [ ... ] }`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::InvalidDocument {
                reason: e.to_string(),
            })?;
        let catalog = Self::new(document.items)?;
        tracing::debug!("Loaded catalog with {} definitions", catalog.len());
        Ok(catalog)
    }

    /// Look up a definition by key
    pub fn definition(&self, key: &str) -> Option<&ItemDefinition> {
        self.index.get(key).map(|&i| &self.definitions[i])
    }

    /// Like [`Catalog::definition`] but reports unknown keys as an error
    pub fn require(&self, key: &str) -> Result<&ItemDefinition, CatalogError> {
        self.definition(key).ok_or_else(|| CatalogError::UnknownItem {
            key: key.to_string(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Categories in first-appearance order with their definitions
    pub fn categories(&self) -> Vec<(CatalogCategory, Vec<&ItemDefinition>)> {
        let mut grouped: Vec<(CatalogCategory, Vec<&ItemDefinition>)> = Vec::new();
        for definition in &self.definitions {
            match grouped.iter_mut().find(|(c, _)| *c == definition.category) {
                Some((_, entries)) => entries.push(definition),
                None => grouped.push((definition.category, vec![definition])),
            }
        }
        grouped
    }

    /// The catalog shipped with the application
    pub fn builtin() -> Self {
        match Self::new(builtin_definitions()) {
            Ok(catalog) => catalog,
            Err(e) => {
                debug_assert!(false, "built-in catalog rejected: {}", e);
                tracing::error!("Built-in catalog rejected: {}", e);
                Self {
                    definitions: Vec::new(),
                    index: HashMap::new(),
                }
            }
        }
    }
}

fn builtin_definitions() -> Vec<ItemDefinition> {
    vec![
        builtin_entry(
            "refrigerator",
            "Refrigerator",
            "Full-height fridge freezer",
            ItemKind::Appliance,
            CatalogCategory::Appliances,
            Dimensions::new(0.9, 1.8, 0.75),
            true,
        ),
        builtin_entry(
            "oven",
            "Oven",
            "Built-in electric oven",
            ItemKind::Appliance,
            CatalogCategory::Appliances,
            Dimensions::new(0.6, 0.6, 0.6),
            true,
        ),
        builtin_entry(
            "cooktop",
            "Cooktop",
            "Four-zone induction hob",
            ItemKind::Appliance,
            CatalogCategory::Appliances,
            Dimensions::new(0.6, 0.05, 0.52),
            false,
        ),
        builtin_entry(
            "dishwasher",
            "Dishwasher",
            "Standard under-counter dishwasher",
            ItemKind::Appliance,
            CatalogCategory::Appliances,
            Dimensions::new(0.6, 0.85, 0.6),
            true,
        ),
        builtin_entry(
            "base-cabinet",
            "Base Cabinet",
            "Floor-standing cabinet with drawers",
            ItemKind::Cabinet,
            CatalogCategory::Storage,
            Dimensions::new(0.6, 0.8, 0.6),
            true,
        ),
        builtin_entry(
            "wall-cabinet",
            "Wall Cabinet",
            "Wall-mounted storage cabinet",
            ItemKind::Cabinet,
            CatalogCategory::Storage,
            Dimensions::new(0.6, 0.7, 0.35),
            false,
        ),
        builtin_entry(
            "countertop",
            "Countertop",
            "Laminate work surface",
            ItemKind::Countertop,
            CatalogCategory::WorkSurfaces,
            Dimensions::new(1.2, 0.04, 0.6),
            false,
        ),
    ]
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_entry(
    key: &str,
    name: &str,
    description: &str,
    kind: ItemKind,
    category: CatalogCategory,
    default_dimensions: Dimensions,
    floor_placement: bool,
) -> ItemDefinition {
    ItemDefinition {
        key: key.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        kind,
        category,
        default_dimensions,
        color: None,
        model_ref: Some(format!("{}.stl", key)),
        floor_placement,
        label: None,
    }
}
