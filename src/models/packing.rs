//! Packing list records and category grouping

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grouping key for packing items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackingCategory {
    Documents,
    Electronics,
    Clothing,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    Health,
    Accessories,
    Footwear,
}

impl PackingCategory {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PackingCategory::Documents => "Documents",
            PackingCategory::Electronics => "Electronics",
            PackingCategory::Clothing => "Clothing",
            PackingCategory::PersonalCare => "Personal Care",
            PackingCategory::Health => "Health",
            PackingCategory::Accessories => "Accessories",
            PackingCategory::Footwear => "Footwear",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            PackingCategory::Clothing => "👕",
            PackingCategory::Electronics => "📱",
            _ => "📦",
        }
    }
}

impl fmt::Display for PackingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingItem {
    pub label: String,
    pub category: PackingCategory,
    pub essential: bool,
}

impl fmt::Display for PackingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "☐ {}", self.label)?;
        if self.essential {
            write!(f, " (Essential)")?;
        }
        Ok(())
    }
}

/// All items of one category, in list order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: PackingCategory,
    pub items: Vec<PackingItem>,
}

/// Partition items by category, keeping categories in first-seen order
#[must_use]
pub fn group_by_category(items: &[PackingItem]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for item in items {
        match groups.iter_mut().find(|g| g.category == item.category) {
            Some(group) => group.items.push(item.clone()),
            None => groups.push(CategoryGroup {
                category: item.category,
                items: vec![item.clone()],
            }),
        }
    }

    groups
}
