//! Built-in demo inventory

use super::collection::Inventory;
use super::errors::InventoryResult;
use super::record::{Ingredients, Snack};

#[allow(clippy::too_many_arguments)]
fn snack(
    id: u64,
    name: &str,
    category: &str,
    weight: &str,
    price: u64,
    calories: u32,
    ingredients: &[&str],
    in_stock: bool,
) -> Snack {
    Snack {
        id,
        name: name.into(),
        category: category.into(),
        weight: weight.into(),
        price,
        calories,
        ingredients: Ingredients::from(ingredients.to_vec()),
        in_stock,
    }
}

/// The four starter snacks
pub fn seed_records() -> Vec<Snack> {
    vec![
        snack(
            1,
            "Granola Bar",
            "Bars",
            "21g",
            299,
            150,
            &["Oats", "Honey", "Nuts", "Dried Fruits"],
            true,
        ),
        snack(
            2,
            "Fruit and Nut Mix",
            "Nuts",
            "73g",
            749,
            353,
            &["Almonds", "Cashews", "Dried Cranberries", "Dried Blueberries"],
            true,
        ),
        snack(
            3,
            "Veggie Chips",
            "Chips",
            "28g",
            279,
            130,
            &["Sweet Potatoes", "Beets", "Kale", "Sea Salt"],
            false,
        ),
        snack(
            4,
            "Protein Balls",
            "Protein",
            "100g",
            499,
            318,
            &["Dates", "Almond Butter", "Protein Powder", "Chia Seeds"],
            true,
        ),
    ]
}

impl Inventory {
    /// Creates the demo inventory
    pub fn seeded() -> InventoryResult<Self> {
        Inventory::from_records(seed_records())
    }
}
