//! Wire types shared by the repositories.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Smartphone,
    Laptops,
    Headphones,
    Cameras,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 4] = [
        Self::Smartphone,
        Self::Laptops,
        Self::Headphones,
        Self::Cameras,
    ];

    /// Returns the wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Smartphone => "SMARTPHONE",
            Self::Laptops => "LAPTOPS",
            Self::Headphones => "HEADPHONES",
            Self::Cameras => "CAMERAS",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parses a wire name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// A product as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub description: Option<String>,
    pub category: Category,
}

impl Product {
    /// Flattens the product into wire-named string fields.
    pub fn to_record(&self) -> BTreeMap<String, String> {
        let mut record = BTreeMap::new();
        record.insert("id".to_string(), self.id.to_string());
        record.insert("productName".to_string(), self.product_name.clone());
        record.insert("price".to_string(), self.price.to_string());
        record.insert("quantity".to_string(), self.quantity.to_string());
        if let Some(description) = &self.description {
            record.insert("description".to_string(), description.clone());
        }
        record.insert("category".to_string(), self.category.to_string());
        record
    }
}

/// Body of create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
    pub description: String,
    pub category: Category,
}

impl ProductInput {
    /// Builds the stored product for `id`.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            product_name: self.product_name,
            price: self.price,
            quantity: self.quantity,
            description: Some(self.description).filter(|d| !d.is_empty()),
            category: self.category,
        }
    }
}

/// Column a product list is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    Id,
    ProductName,
    Price,
    Quantity,
}

impl SortField {
    /// Returns the wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::ProductName => "productName",
            Self::Price => "price",
            Self::Quantity => "quantity",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "productName" | "name" => Ok(Self::ProductName),
            "price" => Ok(Self::Price),
            "quantity" => Ok(Self::Quantity),
            other => Err(format!("unknown sort field: {other}")),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns the wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(format!("unknown sort direction: {s}"))
        }
    }
}

/// Parameters of a product list query.
///
/// Pages are 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
    pub sort_by: SortField,
    pub sort_dir: SortDirection,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            limit: 10,
            sort_by: SortField::Id,
            sort_dir: SortDirection::Asc,
        }
    }
}

impl PageQuery {
    /// Returns the query string pairs sent to the backend.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("sortBy", self.sort_by.as_str().to_string()),
            ("sortDir", self.sort_dir.as_str().to_string()),
        ]
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

/// The authenticated user as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub username: String,
}

/// A newly registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub verify_password: &'a str,
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_wire_format() {
        let input = ProductInput {
            product_name: "iPhone 99".to_string(),
            price: 9999.0,
            quantity: 10,
            description: "ok".to_string(),
            category: Category::Smartphone,
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "productName": "iPhone 99",
                "price": 9999.0,
                "quantity": 10,
                "description": "ok",
                "category": "SMARTPHONE"
            })
        );
    }

    #[test]
    fn test_page_ignores_extra_fields() {
        let page: Page<Product> = serde_json::from_value(json!({
            "content": [{
                "id": 1,
                "productName": "Sony A7",
                "price": 1500.5,
                "quantity": 3,
                "category": "CAMERAS"
            }],
            "totalPages": 4,
            "pageable": {"pageNumber": 0},
            "last": false
        }))
        .unwrap();

        assert_eq!(page.total_pages, 4);
        assert_eq!(page.content[0].description, None);
        assert_eq!(page.content[0].category, Category::Cameras);
    }

    #[test]
    fn test_category_parse_ignores_case() {
        assert_eq!("laptops".parse::<Category>(), Ok(Category::Laptops));
        assert_eq!("HEADPHONES".parse::<Category>(), Ok(Category::Headphones));
        assert!("TABLETS".parse::<Category>().is_err());
    }

    #[test]
    fn test_user_session_id_accepts_numbers() {
        let user: UserSession =
            serde_json::from_value(json!({"id": 5, "username": "alice"})).unwrap();
        assert_eq!(user.id, "5");
        let user: UserSession = serde_json::from_value(
            json!({"id": "0d5c8c1e-7f0a-4a8e-9a43-2f3f4c9a1b11", "username": "bob"}),
        )
        .unwrap();
        assert_eq!(user.username, "bob");
    }

    #[test]
    fn test_page_query_params() {
        let query = PageQuery {
            page: 2,
            limit: 5,
            sort_by: SortField::Price,
            sort_dir: SortDirection::Desc,
        };
        assert_eq!(
            query.to_params(),
            vec![
                ("page", "2".to_string()),
                ("limit", "5".to_string()),
                ("sortBy", "price".to_string()),
                ("sortDir", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_product_record() {
        let product = ProductInput {
            product_name: "Pixel".to_string(),
            price: 499.0,
            quantity: 2,
            description: String::new(),
            category: Category::Smartphone,
        }
        .into_product(9);

        let record = product.to_record();
        assert_eq!(record["id"], "9");
        assert_eq!(record["price"], "499");
        assert!(!record.contains_key("description"));
    }
}
