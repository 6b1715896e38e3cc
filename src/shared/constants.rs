// =============================================================================
// PERSISTED SELECTION KEYS
// =============================================================================

/// Store key holding the selected province id
pub const KEY_SELECTED_PROVINCE: &str = "selectedProvince";

/// Store key holding the selected regency id
pub const KEY_SELECTED_REGENCY: &str = "selectedRegency";

/// Store key holding the selected district id
pub const KEY_SELECTED_DISTRICT: &str = "selectedDistrict";

// =============================================================================
// DISPLAY LABELS
// =============================================================================

/// First breadcrumb item, always present
pub const BREADCRUMB_ROOT: &str = "Indonesia";

pub const LABEL_PROVINCE: &str = "Provinsi";
pub const LABEL_REGENCY: &str = "Kota/Kabupaten";
pub const LABEL_DISTRICT: &str = "Kecamatan";

/// Content panel heading for the regency level (spaced, unlike the filter label)
pub const HEADING_REGENCY: &str = "Kota / Kabupaten";

pub const PLACEHOLDER_PROVINCE: &str = "Pilih Provinsi";
pub const PLACEHOLDER_REGENCY: &str = "Pilih Kota/Kabupaten";
pub const PLACEHOLDER_DISTRICT: &str = "Pilih Kecamatan";

/// Content panel empty state shown when nothing resolves
pub const EMPTY_STATE_TITLE: &str = "Pilih Wilayah Anda";
pub const EMPTY_STATE_HINT: &str = "Mulai dengan memilih provinsi dari panel filter sebelah kiri";

// =============================================================================
// DATA PROVIDER
// =============================================================================

/// User agent sent with the region data request
pub const HTTP_USER_AGENT: &str = "WilayahPicker/0.1 (region-catalog)";
