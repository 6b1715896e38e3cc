//! Display models derived from the catalog and a selection.
//!
//! Nothing here is stored; every call recomputes from the current selection,
//! so the options offered for a level are always scoped to its parent.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::regions::RegionCatalog;
use crate::features::selection::state::Selection;
use crate::shared::constants::{
    BREADCRUMB_ROOT, EMPTY_STATE_HINT, EMPTY_STATE_TITLE, HEADING_REGENCY, LABEL_DISTRICT,
    LABEL_PROVINCE, LABEL_REGENCY, PLACEHOLDER_DISTRICT, PLACEHOLDER_PROVINCE,
    PLACEHOLDER_REGENCY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RegionLevel {
    Country,
    Province,
    Regency,
    District,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbItem {
    pub name: String,
    /// None for the country root
    pub id: Option<i64>,
    pub level: RegionLevel,
    /// Last item in the trail
    pub current: bool,
}

/// One heading in the content panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    pub level: RegionLevel,
    pub heading: String,
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmptyState {
    pub title: String,
    pub hint: String,
}

/// Content panel: resolved levels top-down, or the empty state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionContent {
    pub sections: Vec<ContentSection>,
    pub empty: Option<EmptyState>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterOption {
    pub id: i64,
    pub name: String,
}

/// One dropdown of the filter panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub selected: Option<i64>,
    pub disabled: bool,
    pub options: Vec<FilterOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterForm {
    pub province: FilterField,
    pub regency: FilterField,
    pub district: FilterField,
}

/// Resolved (level, id, name) triples; unresolvable ids are skipped per level
fn resolved_levels(
    catalog: &RegionCatalog,
    selection: Selection,
) -> Vec<(RegionLevel, i64, String)> {
    let province = selection
        .province
        .and_then(|id| catalog.find_province(id))
        .map(|p| (RegionLevel::Province, p.id, p.name.clone()));
    let regency = selection
        .regency
        .and_then(|id| catalog.find_regency(id))
        .map(|r| (RegionLevel::Regency, r.id, r.name.clone()));
    let district = selection
        .district
        .and_then(|id| catalog.find_district(id))
        .map(|d| (RegionLevel::District, d.id, d.name.clone()));

    [province, regency, district].into_iter().flatten().collect()
}

/// `Indonesia › province › regency › district`, omitting levels that do not resolve
pub fn breadcrumb(catalog: &RegionCatalog, selection: Selection) -> Vec<BreadcrumbItem> {
    let mut items = vec![BreadcrumbItem {
        name: BREADCRUMB_ROOT.to_string(),
        id: None,
        level: RegionLevel::Country,
        current: false,
    }];

    items.extend(
        resolved_levels(catalog, selection)
            .into_iter()
            .map(|(level, id, name)| BreadcrumbItem {
                name,
                id: Some(id),
                level,
                current: false,
            }),
    );

    if let Some(last) = items.last_mut() {
        last.current = true;
    }
    items
}

pub fn region_content(catalog: &RegionCatalog, selection: Selection) -> RegionContent {
    let sections: Vec<ContentSection> = resolved_levels(catalog, selection)
        .into_iter()
        .map(|(level, id, name)| {
            let heading = match level {
                RegionLevel::Regency => HEADING_REGENCY,
                RegionLevel::District => LABEL_DISTRICT,
                _ => LABEL_PROVINCE,
            };
            ContentSection {
                level,
                heading: heading.to_string(),
                id,
                name,
            }
        })
        .collect();

    let empty = sections.is_empty().then(|| EmptyState {
        title: EMPTY_STATE_TITLE.to_string(),
        hint: EMPTY_STATE_HINT.to_string(),
    });

    RegionContent { sections, empty }
}

pub fn filter_form(catalog: &RegionCatalog, selection: Selection) -> FilterForm {
    let province_options = catalog
        .provinces()
        .iter()
        .map(|p| FilterOption {
            id: p.id,
            name: p.name.clone(),
        })
        .collect();
    let regency_options = catalog
        .regencies_of(selection.province)
        .into_iter()
        .map(|r| FilterOption {
            id: r.id,
            name: r.name.clone(),
        })
        .collect();
    let district_options = catalog
        .districts_of(selection.regency)
        .into_iter()
        .map(|d| FilterOption {
            id: d.id,
            name: d.name.clone(),
        })
        .collect();

    FilterForm {
        province: FilterField {
            name: "province".to_string(),
            label: LABEL_PROVINCE.to_string(),
            placeholder: PLACEHOLDER_PROVINCE.to_string(),
            selected: selection.province,
            disabled: false,
            options: province_options,
        },
        regency: FilterField {
            name: "regency".to_string(),
            label: LABEL_REGENCY.to_string(),
            placeholder: PLACEHOLDER_REGENCY.to_string(),
            selected: selection.regency,
            disabled: selection.province.is_none(),
            options: regency_options,
        },
        district: FilterField {
            name: "district".to_string(),
            label: LABEL_DISTRICT.to_string(),
            placeholder: PLACEHOLDER_DISTRICT.to_string(),
            selected: selection.district,
            disabled: selection.regency.is_none(),
            options: district_options,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::regions::catalog::sample_catalog;

    fn names(items: &[BreadcrumbItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_breadcrumb_full_trail() {
        let selection = Selection {
            province: Some(1),
            regency: Some(10),
            district: Some(100),
        };
        let items = breadcrumb(&sample_catalog(), selection);

        assert_eq!(names(&items), vec!["Indonesia", "Jawa Barat", "Bandung", "Coblong"]);
        assert_eq!(items[0].id, None);
        assert!(items[3].current);
        assert!(items[..3].iter().all(|i| !i.current));
    }

    #[test]
    fn test_breadcrumb_root_only_is_current() {
        let items = breadcrumb(&sample_catalog(), Selection::default());
        assert_eq!(names(&items), vec!["Indonesia"]);
        assert!(items[0].current);
    }

    #[test]
    fn test_breadcrumb_skips_stale_level() {
        let selection = Selection {
            province: Some(1),
            regency: Some(999),
            district: None,
        };
        let items = breadcrumb(&sample_catalog(), selection);
        assert_eq!(names(&items), vec!["Indonesia", "Jawa Barat"]);
        assert_eq!(items[1].level, RegionLevel::Province);
    }

    #[test]
    fn test_content_sections_and_empty_state() {
        let catalog = sample_catalog();

        let content = region_content(&catalog, Selection::default());
        assert!(content.sections.is_empty());
        assert_eq!(content.empty.unwrap().title, "Pilih Wilayah Anda");

        let content = region_content(
            &catalog,
            Selection {
                province: Some(2),
                regency: Some(20),
                district: None,
            },
        );
        assert!(content.empty.is_none());
        let headings: Vec<&str> = content.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["Provinsi", "Kota / Kabupaten"]);
        assert_eq!(content.sections[1].name, "Semarang");
    }

    #[test]
    fn test_content_with_only_stale_ids_is_empty_state() {
        let content = region_content(
            &sample_catalog(),
            Selection {
                province: Some(77),
                regency: None,
                district: None,
            },
        );
        assert!(content.empty.is_some());
    }

    #[test]
    fn test_filter_form_scoping_and_disabled_flags() {
        let catalog = sample_catalog();

        let form = filter_form(&catalog, Selection::default());
        assert_eq!(form.province.options.len(), 2);
        assert_eq!(form.province.placeholder, "Pilih Provinsi");
        assert!(!form.province.disabled);
        assert!(form.regency.disabled);
        assert!(form.regency.options.is_empty());
        assert!(form.district.disabled);

        let form = filter_form(
            &catalog,
            Selection {
                province: Some(2),
                regency: None,
                district: None,
            },
        );
        assert!(!form.regency.disabled);
        assert_eq!(
            form.regency.options,
            vec![FilterOption {
                id: 20,
                name: "Semarang".to_string()
            }]
        );
        assert!(form.district.disabled);
        assert_eq!(form.regency.label, "Kota/Kabupaten");
        assert_eq!(form.district.placeholder, "Pilih Kecamatan");
    }
}
