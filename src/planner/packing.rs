//! Packing list generation

use tracing::{debug, instrument};

use crate::models::{ActivityTag, PackingCategory, PackingItem, TripParameters};

use super::itinerary::MAX_PLANNED_DAYS;

#[derive(Debug, Clone, Copy)]
struct ItemTemplate {
    label: &'static str,
    category: PackingCategory,
    essential: bool,
}

const fn essential(label: &'static str, category: PackingCategory) -> ItemTemplate {
    ItemTemplate {
        label,
        category,
        essential: true,
    }
}

const fn optional(label: &'static str, category: PackingCategory) -> ItemTemplate {
    ItemTemplate {
        label,
        category,
        essential: false,
    }
}

impl ItemTemplate {
    fn to_item(self) -> PackingItem {
        PackingItem {
            label: self.label.to_string(),
            category: self.category,
            essential: self.essential,
        }
    }
}

use PackingCategory::{
    Accessories, Clothing, Documents, Electronics, Footwear, Health, PersonalCare,
};

const BASELINE: [ItemTemplate; 8] = [
    essential("Passport/ID", Documents),
    essential("Travel Insurance", Documents),
    essential("Flight Tickets", Documents),
    essential("Phone Charger", Electronics),
    essential("Underwear", Clothing),
    essential("Socks", Clothing),
    essential("Toiletries", PersonalCare),
    essential("Medications", Health),
];

/// Clothing whose label carries a per-day quantity
const DAILY_CLOTHING: [ItemTemplate; 4] = [
    essential("T-shirts/Tops", Clothing),
    essential("Pants/Jeans", Clothing),
    optional("Pajamas", Clothing),
    optional("Jacket/Sweater", Clothing),
];

/// Activity blocks, checked in this order
const ACTIVITY_RULES: [(ActivityTag, &[ItemTemplate]); 5] = [
    (
        ActivityTag::BeachSwimming,
        &[
            essential("Swimwear", Clothing),
            essential("Sunscreen", PersonalCare),
            optional("Beach Towel", Accessories),
            optional("Sunglasses", Accessories),
        ],
    ),
    (
        ActivityTag::HikingOutdoor,
        &[
            essential("Hiking Boots", Footwear),
            essential("Backpack", Accessories),
            essential("Water Bottle", Accessories),
            optional("First Aid Kit", Health),
        ],
    ),
    (
        ActivityTag::BusinessWork,
        &[
            essential("Business Attire", Clothing),
            essential("Laptop", Electronics),
            optional("Business Cards", Documents),
            optional("Notebook", Accessories),
        ],
    ),
    (
        ActivityTag::FineDining,
        &[
            essential("Dress Clothes", Clothing),
            essential("Dress Shoes", Footwear),
        ],
    ),
    (
        ActivityTag::Photography,
        &[
            essential("Camera", Electronics),
            optional("Extra Batteries", Electronics),
            optional("Memory Cards", Electronics),
        ],
    ),
];

/// Generates the packing list for a trip
pub struct PackingListGenerator;

impl PackingListGenerator {
    /// Baseline items, quantity-labelled clothing, then every matching activity block
    #[instrument(skip(trip), fields(destination = %trip.destination, days = trip.duration_days))]
    #[must_use]
    pub fn generate(trip: &TripParameters) -> Vec<PackingItem> {
        let pieces = trip.duration_days.min(MAX_PLANNED_DAYS);

        let clothing = DAILY_CLOTHING.iter().map(|template| PackingItem {
            label: format!("{} ({pieces} pieces)", template.label),
            ..template.to_item()
        });

        let activity_items = ACTIVITY_RULES
            .iter()
            .filter(|(tag, _)| trip.has(*tag))
            .flat_map(|(_, block)| block.iter().map(|template| template.to_item()));

        let items: Vec<PackingItem> = BASELINE
            .iter()
            .map(|template| template.to_item())
            .chain(clothing)
            .chain(activity_items)
            .collect();

        debug!("Generated packing list with {} items", items.len());
        items
    }
}
