//! Record types for the snack inventory
//!
//! - [`Snack`]: a stored record, id assigned by the inventory
//! - [`SnackDraft`]: new or edited values handed over by a form layer
//! - [`SnackForm`]: the same values as raw text fields
//! - [`StoredSnack`]: a record read from an inventory file, not yet validated

use serde::{Deserialize, Serialize};

use super::errors::InventoryError;

/// Ordered ingredient tokens.
///
/// Accepts either a JSON array of strings or comma separated free text
/// (`"Oats, Honey"`); always serializes as an array.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "IngredientsRepr")]
pub struct Ingredients(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum IngredientsRepr {
    List(Vec<String>),
    Text(String),
}

impl From<IngredientsRepr> for Ingredients {
    fn from(repr: IngredientsRepr) -> Self {
        match repr {
            IngredientsRepr::List(items) => Ingredients(items),
            IngredientsRepr::Text(text) => Ingredients::parse(&text),
        }
    }
}

impl Ingredients {
    pub const DELIMITER: char = ',';

    /// Splits free text on `,`, trimming tokens and dropping empty ones
    pub fn parse(text: &str) -> Self {
        Ingredients(
            text.split(Self::DELIMITER)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Ingredients {
    fn from(items: Vec<String>) -> Self {
        Ingredients(items)
    }
}

impl<'a> From<Vec<&'a str>> for Ingredients {
    fn from(items: Vec<&'a str>) -> Self {
        Ingredients(items.into_iter().map(String::from).collect())
    }
}

/// One inventory item.
///
/// `price` is in cents. Records are only built by the inventory after
/// validation, so `name` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snack {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub weight: String,
    pub price: u64,
    pub calories: u32,
    pub ingredients: Ingredients,
    pub in_stock: bool,
}

impl Snack {
    /// Formats the price as dollars and cents, e.g. `$2.99`
    pub fn display_price(&self) -> String {
        format!("${}.{:02}", self.price / 100, self.price % 100)
    }
}

fn default_in_stock() -> bool {
    true
}

/// Values for a new or edited record, before validation.
///
/// Numbers are signed so that negative input reaches the validator and is
/// reported as a malformed record instead of a decoding failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnackDraft {
    pub name: String,
    pub category: String,
    pub weight: String,
    /// Cents
    pub price: i64,
    pub calories: i64,
    #[serde(default)]
    pub ingredients: Ingredients,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

impl SnackDraft {
    /// Starts a draft for an in-stock snack with no ingredients
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        weight: impl Into<String>,
        price: i64,
        calories: i64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            weight: weight.into(),
            price,
            calories,
            ingredients: Ingredients::default(),
            in_stock: true,
        }
    }

    pub fn with_ingredients(mut self, ingredients: impl Into<Ingredients>) -> Self {
        self.ingredients = ingredients.into();
        self
    }

}

/// Prefills an edit from a stored record
impl TryFrom<&Snack> for SnackDraft {
    type Error = InventoryError;

    fn try_from(snack: &Snack) -> Result<Self, Self::Error> {
        let price = i64::try_from(snack.price).map_err(|_| {
            InventoryError::malformed("price", format!("out of range: {}", snack.price))
        })?;

        Ok(Self {
            name: snack.name.clone(),
            category: snack.category.clone(),
            weight: snack.weight.clone(),
            price,
            calories: i64::from(snack.calories),
            ingredients: snack.ingredients.clone(),
            in_stock: snack.in_stock,
        })
    }
}

/// Raw text values as typed into an add/edit form.
///
/// `price` is a decimal amount (`"2.99"`), `ingredients` comma separated.
/// Convert with [`RecordValidator::parse_form`](super::RecordValidator::parse_form).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnackForm {
    pub name: String,
    pub category: String,
    pub weight: String,
    pub price: String,
    pub calories: String,
    pub ingredients: String,
    pub in_stock: bool,
}

/// A record as it appears in an inventory file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSnack {
    pub id: u64,
    #[serde(flatten)]
    pub draft: SnackDraft,
}
