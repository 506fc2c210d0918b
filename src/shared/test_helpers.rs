#[cfg(test)]
use crate::features::locations::dtos::LocationRowDto;

#[cfg(test)]
use fake::{
    faker::address::en::{CityName, StateName, ZipCode},
    Fake,
};

#[cfg(test)]
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

/// In-memory SQLite pool. A single connection keeps every query on the
/// same memory database.
#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite pool")
}

/// A fully populated location row belonging to `dati2_code`
#[cfg(test)]
pub fn fake_location(dati2_code: &str) -> LocationRowDto {
    let kelurahan: String = CityName().fake();
    let kecamatan: String = CityName().fake();
    let city: String = CityName().fake();
    let province: String = StateName().fake();

    LocationRowDto {
        postal_code: ZipCode().fake(),
        kelurahan_code: format!("{}.001", dati2_code),
        kelurahan_name: kelurahan,
        kecamatan_code: format!("{}.01", dati2_code),
        kecamatan_name: kecamatan,
        dati2_code: dati2_code.to_string(),
        dati2_name: city.clone(),
        is_dati2_flag: "1".to_string(),
        main_kelurahan_code: format!("{}.001", dati2_code),
        main_kecamatan_code: format!("{}.01", dati2_code),
        main_dati2_code: dati2_code.to_string(),
        city_code: dati2_code.to_string(),
        city_name: city,
        province_code: dati2_code.chars().take(2).collect(),
        province_name: province,
    }
}
