//! Item model
//!
//! The record stored in the cache and its JSON wire form.

use serde::{Deserialize, Serialize};

/// A cached item.
///
/// `name` is the cache key. `id` is only a payload field to the cache and is
/// resolved by scanning.
///
/// Absent fields deserialize to their zero value so that incomplete payloads
/// are reported by [`Item::validate`] rather than by the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// Numeric identifier
    pub id: i64,
    /// Unique name, used as the cache key
    pub name: String,
    /// Item type, e.g. "Grass/Poison"
    #[serde(rename = "type")]
    pub item_type: String,
    pub height: i64,
    pub weight: i64,
    pub abilities: Vec<String>,
}

impl Item {
    /// Validates the item data
    ///
    /// Every field must be present and non-zero / non-empty. Returns an error
    /// message naming the offending fields, None if valid.
    pub fn validate(&self) -> Option<String> {
        let missing: Vec<&str> = [
            ("id", self.id == 0),
            ("name", self.name.is_empty()),
            ("type", self.item_type.is_empty()),
            ("height", self.height == 0),
            ("weight", self.weight == 0),
            ("abilities", self.abilities.is_empty()),
        ]
        .into_iter()
        .filter_map(|(field, missing)| missing.then_some(field))
        .collect();

        if missing.is_empty() {
            None
        } else {
            Some(format!("Missing item data: {}", missing.join(", ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulbasaur() -> Item {
        Item {
            id: 1,
            name: "Bulbasaur".to_string(),
            item_type: "Grass/Poison".to_string(),
            height: 7,
            weight: 69,
            abilities: vec!["Overgrow".to_string(), "Chlorophyll".to_string()],
        }
    }

    #[test]
    fn test_item_deserialize() {
        let json = r#"{"id":1,"name":"Bulbasaur","type":"Grass/Poison","height":7,"weight":69,"abilities":["Overgrow","Chlorophyll"]}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item, bulbasaur());
    }

    #[test]
    fn test_item_serializes_type_field() {
        let value = serde_json::to_value(bulbasaur()).unwrap();
        assert_eq!(value["type"], "Grass/Poison");
        assert!(value.get("item_type").is_none());
    }

    #[test]
    fn test_item_absent_fields_default() {
        let item: Item = serde_json::from_str(r#"{"name":"Ivysaur"}"#).unwrap();
        assert_eq!(item.id, 0);
        assert!(item.abilities.is_empty());
    }

    #[test]
    fn test_validate_valid_item() {
        assert!(bulbasaur().validate().is_none());
    }

    #[test]
    fn test_validate_each_required_field() {
        let broken: [fn(&mut Item); 6] = [
            |i| i.id = 0,
            |i| i.name.clear(),
            |i| i.item_type.clear(),
            |i| i.height = 0,
            |i| i.weight = 0,
            |i| i.abilities.clear(),
        ];

        for breaker in broken {
            let mut item = bulbasaur();
            breaker(&mut item);
            assert!(item.validate().is_some(), "accepted {item:?}");
        }
    }

    #[test]
    fn test_validate_lists_missing_fields() {
        let message = Item::default().validate().unwrap();
        assert!(message.contains("name"));
        assert!(message.contains("abilities"));
    }
}
