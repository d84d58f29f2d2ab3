//! Raw shapes returned by the content-listing endpoint.
//!
//! Every field can be absent, null, or carry an unexpected type; the gallery
//! endpoint is backed by hand-entered custom fields. The normalizer in
//! `gallery::record` turns these into well-formed records.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// One item of the listing response, before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItem {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<RenderedTitle>,
    #[serde(default, deserialize_with = "lenient")]
    pub acf: Option<CustomFields>,
}

/// WordPress ids are numeric, but the field is loosely typed upstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Numeric(u64),
    Text(String),
}

impl RawId {
    pub fn to_display(&self) -> String {
        match self {
            RawId::Numeric(n) => n.to_string(),
            RawId::Text(s) => s.clone(),
        }
    }
}

/// The `title` object as rendered by WordPress.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderedTitle {
    pub rendered: Option<String>,
}

/// The nested ACF custom-fields block. All keys optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomFields {
    pub nombre: Option<String>,
    pub cargo: Option<String>,
    pub departamento: Option<String>,
    pub municipio: Option<String>,
    pub descripcion: Option<String>,
    pub foto: Option<String>,
    pub enlace: Option<String>,
}

/// Deserialize to `Some(T)` when the value matches, `None` otherwise.
///
/// ACF serializes an empty custom-fields block as `false`, and ids have been
/// observed as both numbers and strings; a field with a shape we do not
/// understand counts as missing rather than failing the whole item.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fully_populated_item() {
        let item: RawItem = serde_json::from_str(
            r#"{
                "id": 7,
                "title": {"rendered": "Juan Pérez"},
                "acf": {"nombre": "Juan Pérez", "cargo": "Alcalde"}
            }"#,
        )
        .unwrap();

        assert_eq!(item.id, Some(RawId::Numeric(7)));
        assert_eq!(item.title.unwrap().rendered.as_deref(), Some("Juan Pérez"));
        let acf = item.acf.unwrap();
        assert_eq!(acf.nombre.as_deref(), Some("Juan Pérez"));
        assert_eq!(acf.cargo.as_deref(), Some("Alcalde"));
        assert_eq!(acf.enlace, None);
    }

    #[test]
    fn tolerates_false_acf_block() {
        // ACF emits `false` instead of an object when no fields are set
        let item: RawItem = serde_json::from_str(r#"{"id": 3, "acf": false}"#).unwrap();
        assert!(item.acf.is_none());
        assert_eq!(item.id, Some(RawId::Numeric(3)));
    }

    #[test]
    fn accepts_string_ids() {
        let item: RawItem = serde_json::from_str(r#"{"id": "abc-9"}"#).unwrap();
        assert_eq!(item.id, Some(RawId::Text("abc-9".into())));
        assert_eq!(item.id.unwrap().to_display(), "abc-9");
    }

    #[test]
    fn empty_object_is_a_valid_item() {
        let item: RawItem = serde_json::from_str("{}").unwrap();
        assert!(item.id.is_none());
        assert!(item.title.is_none());
        assert!(item.acf.is_none());
    }
}
