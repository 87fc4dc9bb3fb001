use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A single stored item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Request body for create and update
///
/// Both fields are optional on the wire. A `null` name is read the same as an
/// absent one. `description` keeps presence apart from value: an absent field
/// is `None`, an explicit `null` is `Some(None)`.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct ItemInput {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Response type for operations returning one item
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemResponse {
    pub success: bool,
    pub data: Item,
}

impl ItemResponse {
    pub fn ok(data: Item) -> Self {
        Self { success: true, data }
    }
}

/// Response type for the list endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemListResponse {
    pub success: bool,
    pub data: Vec<Item>,
}

/// Response type carrying only a message, used for deletes and every error
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Response type for the info endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct InfoResponse {
    pub success: bool,
    pub message: String,
    pub endpoints: BTreeMap<String, String>,
}

/// Parse an item id from a path segment.
///
/// Reads the leading integer of the segment and ignores whatever follows it,
/// so `"12abc"` is 12. Leading whitespace, a sign and a `0x` prefix are
/// accepted. Returns `None` when no digits are found.
pub fn parse_item_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    let value = i64::from_str_radix(&digits[..end], radix).ok()?;

    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_ids() {
        assert_eq!(parse_item_id("1"), Some(1));
        assert_eq!(parse_item_id("42"), Some(42));
        assert_eq!(parse_item_id("007"), Some(7));
    }

    #[test]
    fn test_parse_ignores_trailing_garbage() {
        assert_eq!(parse_item_id("12abc"), Some(12));
        assert_eq!(parse_item_id("3.9"), Some(3));
        assert_eq!(parse_item_id("  5"), Some(5));
    }

    #[test]
    fn test_parse_signs_and_hex() {
        assert_eq!(parse_item_id("-4"), Some(-4));
        assert_eq!(parse_item_id("+4"), Some(4));
        assert_eq!(parse_item_id("0x1A"), Some(26));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert_eq!(parse_item_id("abc"), None);
        assert_eq!(parse_item_id(""), None);
        assert_eq!(parse_item_id("-"), None);
        assert_eq!(parse_item_id("0x"), None);
        assert_eq!(parse_item_id("99999999999999999999"), None);
    }

    #[test]
    fn test_input_null_name_is_absent() {
        let input: ItemInput =
            serde_json::from_value(serde_json::json!({"name": null, "description": ""})).unwrap();
        assert_eq!(input.name, None);
        assert_eq!(input.description, Some(Some(String::new())));
    }

    #[test]
    fn test_input_description_presence() {
        let absent: ItemInput = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(absent.description, None);

        let null: ItemInput =
            serde_json::from_value(serde_json::json!({"description": null})).unwrap();
        assert_eq!(null.description, Some(None));

        let text: ItemInput =
            serde_json::from_value(serde_json::json!({"description": "d"})).unwrap();
        assert_eq!(text.description, Some(Some("d".to_string())));
    }
}
