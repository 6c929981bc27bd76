//! Tabular product view derived from [`DashboardState`]

use super::state::DashboardState;
use crate::core::Product;
use std::fmt;
use uuid::Uuid;

/// Products below this stock are flagged as low
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// What the list area shows
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loading,
    Empty,
    Table(ProductTable),
}

impl ListView {
    pub fn from_state(state: &DashboardState) -> Self {
        if state.loading {
            ListView::Loading
        } else if state.products.is_empty() {
            ListView::Empty
        } else {
            ListView::Table(ProductTable::new(&state.products))
        }
    }

    pub fn refresh(&self) -> ListIntent {
        ListIntent::Refresh
    }
}

/// Requests the list raises to the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum ListIntent {
    Edit(Product),
    Delete(Uuid),
    Refresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Low,
    Good,
}

impl StockLevel {
    pub fn of(stock: i64) -> Self {
        if stock < LOW_STOCK_THRESHOLD {
            StockLevel::Low
        } else {
            StockLevel::Good
        }
    }
}

/// Totals shown under the table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListStats {
    pub count: usize,
    pub total_stock: i64,
    /// Sum of unit prices
    pub total_value: f64,
}

impl ListStats {
    pub fn from_products(products: &[Product]) -> Self {
        Self {
            count: products.len(),
            total_stock: products
                .iter()
                .fold(0i64, |acc, p| acc.saturating_add(p.stock)),
            total_value: products.iter().map(|p| p.price).sum(),
        }
    }
}

/// One display-ready row
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub product: Product,
    pub description: String,
    pub price: String,
    pub stock_level: StockLevel,
    pub category: String,
    pub created: String,
}

impl ProductRow {
    pub fn new(product: &Product) -> Self {
        let description = product
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or("No description")
            .to_string();
        let category = if product.category.trim().is_empty() {
            "General".to_string()
        } else {
            product.category.clone()
        };

        Self {
            product: product.clone(),
            description,
            price: format_price(product.price),
            stock_level: StockLevel::of(product.stock),
            category,
            created: product.created_at.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn edit(&self) -> ListIntent {
        ListIntent::Edit(self.product.clone())
    }

    pub fn delete(&self) -> ListIntent {
        ListIntent::Delete(self.product.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductTable {
    pub rows: Vec<ProductRow>,
    pub stats: ListStats,
}

impl ProductTable {
    pub fn new(products: &[Product]) -> Self {
        Self {
            rows: products.iter().map(ProductRow::new).collect(),
            stats: ListStats::from_products(products),
        }
    }
}

/// Format a price as dollars with thousands separators, e.g. `$1,234.50`
pub fn format_price(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListView::Loading => writeln!(f, "Loading products..."),
            ListView::Empty => {
                writeln!(f, "No products registered")?;
                writeln!(f, "Start by adding your first product to the inventory")
            }
            ListView::Table(table) => write!(f, "{}", table),
        }
    }
}

impl fmt::Display for ProductTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<24} {:>12} {:>7} {:<5} {:<12} {:<10}",
            "Product", "Price", "Stock", "", "Category", "Created"
        )?;
        for row in &self.rows {
            let level = match row.stock_level {
                StockLevel::Low => "low",
                StockLevel::Good => "",
            };
            writeln!(
                f,
                "{:<24} {:>12} {:>7} {:<5} {:<12} {:<10}",
                row.product.name, row.price, row.product.stock, level, row.category, row.created
            )?;
            writeln!(f, "  {}", row.description)?;
        }
        writeln!(
            f,
            "Total products: {}  Total stock: {}  Total value: {}",
            self.stats.count,
            self.stats.total_stock,
            format_price(self.stats.total_value)
        )
    }
}
