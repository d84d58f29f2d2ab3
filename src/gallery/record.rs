//! Record normalization.
//!
//! Raw items arrive with any subset of their fields populated. Normalization
//! substitutes the documented placeholder for every missing or empty field so
//! the rest of the program never sees an absent value; only a wholly absent
//! item is discarded.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::api::types::RawItem;

pub const PLACEHOLDER_NAME: &str = "Sin nombre";
pub const PLACEHOLDER_JOB_TITLE: &str = "Sin cargo";
pub const PLACEHOLDER_DEPARTMENT: &str = "Sin departamento";
pub const PLACEHOLDER_LOCATION: &str = "Sin municipio";
pub const PLACEHOLDER_DESCRIPTION: &str = "Sin descripción";
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/300";

/// One normalized public-official entry shown as a gallery card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub name: String,
    pub job_title: String,
    pub department: String,
    pub location: String,
    pub description: String,
    pub image_url: String,
    pub more_info_link: Option<String>,
}

impl Record {
    /// Uppercased first character of the display name, if any.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next().and_then(|c| c.to_uppercase().next())
    }
}

/// Normalize one raw item into a [`Record`].
///
/// Returns `None` only when the item itself is absent; per-field gaps are
/// absorbed by placeholders. `position` is the item's index within the fetched
/// page and feeds the fallback id so it stays stable across re-renders of the
/// same response.
pub fn normalize_item(position: usize, item: Option<&RawItem>) -> Option<Record> {
    let item = item?;
    let acf = item.acf.as_ref();

    let name = non_empty(acf.and_then(|a| a.nombre.as_deref()))
        .or_else(|| non_empty(item.title.as_ref().and_then(|t| t.rendered.as_deref())))
        .unwrap_or(PLACEHOLDER_NAME)
        .to_string();

    let id = item
        .id
        .as_ref()
        .map(|id| id.to_display())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| derived_id(position, &name));

    Some(Record {
        id,
        job_title: field_or(acf.and_then(|a| a.cargo.as_deref()), PLACEHOLDER_JOB_TITLE),
        department: field_or(
            acf.and_then(|a| a.departamento.as_deref()),
            PLACEHOLDER_DEPARTMENT,
        ),
        location: field_or(acf.and_then(|a| a.municipio.as_deref()), PLACEHOLDER_LOCATION),
        description: field_or(
            acf.and_then(|a| a.descripcion.as_deref()),
            PLACEHOLDER_DESCRIPTION,
        ),
        image_url: field_or(acf.and_then(|a| a.foto.as_deref()), PLACEHOLDER_IMAGE),
        more_info_link: non_empty(acf.and_then(|a| a.enlace.as_deref())).map(str::to_string),
        name,
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn field_or(value: Option<&str>, placeholder: &str) -> String {
    non_empty(value).unwrap_or(placeholder).to_string()
}

/// Deterministic fallback id: hash of name plus page position. The upstream
/// data loses its id occasionally; a random token here would make the id
/// change on every refresh.
fn derived_id(position: usize, name: &str) -> String {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    format!("gen-{}-{:08x}", position, hasher.finish() as u32)
}
