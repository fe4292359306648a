use serde::{Deserialize, Serialize};

/// Product lifecycle status.
///
/// Unrecognized strings decode to `Unknown` rather than failing the whole
/// list response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Active,
    Draft,
    Archived,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ProductStatus {
    /// Wire name sent back to the API on status updates.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Draft => "draft",
            Self::Archived => "archived",
            Self::Unknown => "unknown",
        }
    }
}

/// A catalog product.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    #[serde(default)]
    pub status: ProductStatus,
    pub category: Option<String>,
}

/// Shallow product reference embedded in other entities.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl Product {
    /// Active products cannot be deleted; they must be archived first.
    pub fn deletable(&self) -> bool {
        self.status != ProductStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal_product() {
        let json = r#"{"id": "p-1", "name": "Mug"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, "p-1");
        assert_eq!(product.name, "Mug");
        assert!(product.sku.is_none());
        assert!(product.price.is_none());
        assert_eq!(product.status, ProductStatus::Unknown);
    }

    #[test]
    fn test_decode_unknown_status() {
        let json = r#"{"id": "p-1", "name": "Mug", "status": "discontinued"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.status, ProductStatus::Unknown);
    }

    #[test]
    fn test_active_product_is_not_deletable() {
        let json = r#"{"id": "p-1", "name": "Mug", "status": "active"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(!product.deletable());

        let json = r#"{"id": "p-2", "name": "Old Mug", "status": "archived"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.deletable());
    }
}
