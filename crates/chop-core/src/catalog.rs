//! The fixed menu catalog.
//!
//! Catalog items are a static external list; the ordering core references
//! them by id but does not own or mutate them. The data here mirrors the
//! menu records the app ships with.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::ItemId;

/// Menu category for a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Breakfast,
    Lunch,
    Snacks,
    Drinks,
}

impl Category {
    /// All categories, in menu display order.
    pub const ALL: [Category; 4] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Snacks,
        Category::Drinks,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Snacks => "Snacks",
            Category::Drinks => "Drinks",
        };
        f.write_str(s)
    }
}

/// A static menu entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    /// Unit price in the smallest whole display unit.
    pub price: u64,
    pub image: String,
    pub description: String,
    pub rating: f32,
    #[serde(rename = "prepTime")]
    pub prep_time: String,
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    category: Category,
    price: u64,
    image: &str,
    description: &str,
    rating: f32,
    prep_time: &str,
) -> CatalogItem {
    CatalogItem {
        id: ItemId::from(id),
        name: name.to_owned(),
        category,
        price,
        image: format!("https://images.unsplash.com/{image}?w=400"),
        description: description.to_owned(),
        rating,
        prep_time: prep_time.to_owned(),
    }
}

/// The full menu, in display order.
pub fn menu() -> Vec<CatalogItem> {
    vec![
        item(
            "1",
            "Jollof Rice & Chicken",
            Category::Lunch,
            1500,
            "photo-1604329760661-e71dc83f8f26",
            "Delicious Nigerian jollof rice served with grilled chicken and coleslaw.",
            4.8,
            "15 mins",
        ),
        item(
            "2",
            "Fried Rice Special",
            Category::Lunch,
            1800,
            "photo-1603133872878-684f208fb84b",
            "Special fried rice with vegetables, shrimp, and chicken pieces.",
            4.7,
            "20 mins",
        ),
        item(
            "3",
            "Puff Puff (6pcs)",
            Category::Snacks,
            300,
            "photo-1586985289688-ca3cf47d3e6e",
            "Sweet and fluffy Nigerian puff puff, freshly made.",
            4.9,
            "5 mins",
        ),
        item(
            "4",
            "Meat Pie",
            Category::Snacks,
            400,
            "photo-1509440159596-0249088772ff",
            "Flaky pastry filled with seasoned minced meat and vegetables.",
            4.6,
            "5 mins",
        ),
        item(
            "5",
            "Chin Chin Bowl",
            Category::Snacks,
            500,
            "photo-1599785209707-a456fc1337bb",
            "Crunchy and sweet chin chin snacks, perfect for munching.",
            4.5,
            "2 mins",
        ),
        item(
            "6",
            "Egg Sandwich",
            Category::Breakfast,
            800,
            "photo-1525351484163-7529414344d8",
            "Fresh bread with scrambled eggs, mayonnaise, and vegetables.",
            4.7,
            "10 mins",
        ),
        item(
            "7",
            "Akara & Bread",
            Category::Breakfast,
            600,
            "photo-1619740455993-a42b8e51a3e8",
            "Traditional bean cakes with soft bread and pepper sauce.",
            4.8,
            "8 mins",
        ),
        item(
            "8",
            "Pancakes (3pcs)",
            Category::Breakfast,
            900,
            "photo-1567620905732-2d1ec7ab7445",
            "Fluffy pancakes served with honey and butter.",
            4.9,
            "12 mins",
        ),
        item(
            "9",
            "Fresh Orange Juice",
            Category::Drinks,
            500,
            "photo-1600271886742-f049cd451bba",
            "Freshly squeezed orange juice, no added sugar.",
            4.8,
            "3 mins",
        ),
        item(
            "10",
            "Chapman Cocktail",
            Category::Drinks,
            700,
            "photo-1544145945-f90425340c7e",
            "Refreshing Nigerian chapman with a blend of fruits and soda.",
            4.7,
            "5 mins",
        ),
        item(
            "11",
            "Zobo Drink",
            Category::Drinks,
            400,
            "photo-1556679343-c7306c1976bc",
            "Traditional hibiscus drink, sweetened and chilled.",
            4.6,
            "2 mins",
        ),
        item(
            "12",
            "Spaghetti Bolognese",
            Category::Lunch,
            1600,
            "photo-1621996346565-e3dbc646d9a9",
            "Classic spaghetti with rich meat sauce and cheese.",
            4.7,
            "18 mins",
        ),
    ]
}

/// Find a catalog item by id.
pub fn find(id: &ItemId) -> Option<CatalogItem> {
    menu().into_iter().find(|i| &i.id == id)
}
