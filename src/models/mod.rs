use serde::{Deserialize, Serialize};

/// Attribute bundle stored against a barcode. The barcode itself is the store
/// key and is never duplicated inside the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub category: String,
    pub size: String,
    pub color: String,
}

/// POST /clothing payload once all required fields are known to be present.
#[derive(Debug, Deserialize)]
pub struct CreateItem {
    pub barcode: String,
    pub category: String,
    pub size: String,
    pub color: String,
}

/// Required POST fields in the order they are checked. When several are
/// missing only the first one in this order is reported.
pub const REQUIRED_FIELDS: [&str; 4] = ["barcode", "category", "size", "color"];

impl CreateItem {
    /// Splits the payload into the store key and the stored value.
    pub fn into_parts(self) -> (String, ClothingItem) {
        (
            self.barcode,
            ClothingItem {
                category: self.category,
                size: self.size,
                color: self.color,
            },
        )
    }
}
