//! Property option formatting for enum attributes

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TopologyError;

/// Attribute definition from `search_object_attribute`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectAttribute {
    pub bk_property_id: String,
    #[serde(default)]
    pub bk_property_name: String,
    #[serde(default)]
    pub bk_property_type: String,
    /// Option list for enum attributes; other attribute types carry other shapes
    #[serde(default)]
    pub option: Value,
}

#[derive(Debug, Deserialize)]
struct PropertyOption {
    id: Value,
    name: String,
}

/// Build the `option name -> option id` map of `property_id`.
///
/// Only the first attribute with a matching id is used. No match, or a
/// matching attribute without options, yields an empty map. Names are trimmed.
pub fn format_property_options(
    attributes: &[ObjectAttribute],
    property_id: &str,
) -> Result<BTreeMap<String, Value>, TopologyError> {
    let Some(attribute) = attributes
        .iter()
        .find(|attr| attr.bk_property_id == property_id)
    else {
        return Ok(BTreeMap::new());
    };

    if attribute.option.is_null() {
        return Ok(BTreeMap::new());
    }

    let options: Vec<PropertyOption> =
        serde_json::from_value(attribute.option.clone()).map_err(|e| {
            TopologyError::UnexpectedPayload(format!(
                "options of property '{}' are not a list of {{id, name}}: {}",
                property_id, e
            ))
        })?;

    Ok(options
        .into_iter()
        .map(|option| (option.name.trim().to_string(), option.id))
        .collect())
}
