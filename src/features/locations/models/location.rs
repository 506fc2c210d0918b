use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Stored location row. Columns are nullable since rows written outside
/// the HTTP path may only fill a few of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Location {
    pub postal_code: Option<String>,
    pub kelurahan_code: Option<String>,
    pub kelurahan_name: Option<String>,
    pub kecamatan_code: Option<String>,
    pub kecamatan_name: Option<String>,
    pub dati2_code: Option<String>,
    pub dati2_name: Option<String>,
    pub is_dati2_flag: Option<String>,
    pub main_kelurahan_code: Option<String>,
    pub main_kecamatan_code: Option<String>,
    pub main_dati2_code: Option<String>,
    pub city_code: Option<String>,
    pub city_name: Option<String>,
    pub province_code: Option<String>,
    pub province_name: Option<String>,
}
