use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::features::selection::state::{Selection, SelectionLevel};
use crate::features::selection::view::{BreadcrumbItem, FilterForm, RegionContent};

/// Body of a selection change. `null`, an empty string or a missing `id`
/// clears the level, like picking the "Pilih ..." placeholder.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateSelectionRequestDto {
    #[serde(default, deserialize_with = "id_or_placeholder")]
    #[schema(value_type = Option<i64>, example = 32)]
    pub id: Option<i64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

/// Dropdown values arrive as numbers or as the option's string value
fn id_or_placeholder<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(id)) => Ok(Some(id)),
        Some(RawId::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid region id '{}'", text)))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectionDto {
    pub province_id: Option<i64>,
    pub regency_id: Option<i64>,
    pub district_id: Option<i64>,
}

impl From<Selection> for SelectionDto {
    fn from(selection: Selection) -> Self {
        Self {
            province_id: selection.province,
            regency_id: selection.regency,
            district_id: selection.district,
        }
    }
}

/// Everything a front-end needs to render after a selection event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSnapshotDto {
    pub selection: SelectionDto,
    pub level: SelectionLevel,
    pub breadcrumb: Vec<BreadcrumbItem>,
    pub content: RegionContent,
    pub filters: FilterForm,
}
