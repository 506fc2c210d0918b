use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::core::extractor::RequiredFieldMessage;
use crate::features::locations::models::Location;
use crate::shared::constants::MSG_DATI2_CODE_REQUIRED;

/// One location row as submitted for insertion. Missing and `null` fields
/// are stored as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct LocationRowDto {
    #[schema(example = "10110")]
    #[serde(deserialize_with = "null_as_empty")]
    pub postal_code: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub kelurahan_code: String,
    #[schema(example = "Gambir")]
    #[serde(deserialize_with = "null_as_empty")]
    pub kelurahan_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub kecamatan_code: String,
    #[schema(example = "Gambir")]
    #[serde(deserialize_with = "null_as_empty")]
    pub kecamatan_name: String,
    #[schema(example = "3171")]
    #[serde(deserialize_with = "null_as_empty")]
    pub dati2_code: String,
    #[schema(example = "Kota Jakarta Pusat")]
    #[serde(deserialize_with = "null_as_empty")]
    pub dati2_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub is_dati2_flag: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub main_kelurahan_code: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub main_kecamatan_code: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub main_dati2_code: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub city_code: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub city_name: String,
    #[schema(example = "31")]
    #[serde(deserialize_with = "null_as_empty")]
    pub province_code: String,
    #[schema(example = "DKI Jakarta")]
    #[serde(deserialize_with = "null_as_empty")]
    pub province_name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Wrapper holding the row sequence: `{"Row": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Dati2DataDto {
    #[serde(rename = "Row")]
    pub row: Vec<LocationRowDto>,
}

/// Request body for batch insertion: `{"Dati2Data": {"Row": [...]}}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InsertLocationsDto {
    #[serde(rename = "Dati2Data")]
    pub dati2_data: Dati2DataDto,
}

/// Request body for the Dati2Code lookup
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Dati2CodeQueryDto {
    #[serde(rename = "Dati2Code")]
    #[schema(example = "3171")]
    pub dati2_code: String,
}

impl RequiredFieldMessage for Dati2CodeQueryDto {
    const MESSAGE: &'static str = MSG_DATI2_CODE_REQUIRED;
}

impl From<LocationRowDto> for Location {
    fn from(row: LocationRowDto) -> Self {
        Self {
            postal_code: Some(row.postal_code),
            kelurahan_code: Some(row.kelurahan_code),
            kelurahan_name: Some(row.kelurahan_name),
            kecamatan_code: Some(row.kecamatan_code),
            kecamatan_name: Some(row.kecamatan_name),
            dati2_code: Some(row.dati2_code),
            dati2_name: Some(row.dati2_name),
            is_dati2_flag: Some(row.is_dati2_flag),
            main_kelurahan_code: Some(row.main_kelurahan_code),
            main_kecamatan_code: Some(row.main_kecamatan_code),
            main_dati2_code: Some(row.main_dati2_code),
            city_code: Some(row.city_code),
            city_name: Some(row.city_name),
            province_code: Some(row.province_code),
            province_name: Some(row.province_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_body_uses_pascal_case_keys() {
        let body = json!({
            "Dati2Data": {
                "Row": [{
                    "PostalCode": "10110",
                    "Dati2Code": "3171",
                    "IsDati2Flag": "1",
                    "MainKecamatanCode": "3171.01"
                }]
            }
        });

        let dto: InsertLocationsDto = serde_json::from_value(body).unwrap();
        let row = &dto.dati2_data.row[0];
        assert_eq!(row.postal_code, "10110");
        assert_eq!(row.dati2_code, "3171");
        assert_eq!(row.is_dati2_flag, "1");
        assert_eq!(row.main_kecamatan_code, "3171.01");
        assert_eq!(row.province_name, "");
    }

    #[test]
    fn test_null_row_fields_become_empty() {
        let body = json!({
            "Dati2Data": {
                "Row": [{ "PostalCode": "1", "CityName": null, "ProvinceCode": null }]
            }
        });

        let dto: InsertLocationsDto = serde_json::from_value(body).unwrap();
        let row = &dto.dati2_data.row[0];
        assert_eq!(row.postal_code, "1");
        assert_eq!(row.city_name, "");
        assert_eq!(row.province_code, "");
    }

    #[test]
    fn test_insert_body_requires_row_path() {
        assert!(serde_json::from_value::<InsertLocationsDto>(json!({})).is_err());
        assert!(serde_json::from_value::<InsertLocationsDto>(json!({ "Dati2Data": {} })).is_err());
    }

    #[test]
    fn test_dati2_code_is_required() {
        assert!(serde_json::from_value::<Dati2CodeQueryDto>(json!({})).is_err());
        let dto: Dati2CodeQueryDto =
            serde_json::from_value(json!({ "Dati2Code": "3171" })).unwrap();
        assert_eq!(dto.dati2_code, "3171");
    }

    #[test]
    fn test_location_serializes_column_names() {
        let location: Location = LocationRowDto {
            dati2_code: "3171".to_string(),
            ..Default::default()
        }
        .into();

        let value = serde_json::to_value(&location).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 15);
        assert_eq!(object["Dati2Code"], "3171");
        assert_eq!(object["IsDati2Flag"], "");
        assert!(object.contains_key("MainDati2Code"));
        assert!(object.contains_key("ProvinceName"));
    }
}
