use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::locations::dtos::LocationRowDto;
use crate::features::locations::models::Location;
use crate::shared::constants::{EXAMPLE_KELURAHAN_CODE, EXAMPLE_POSTAL_CODE};

const CREATE_LOCATIONS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS locations (
        PostalCode TEXT,
        KelurahanCode TEXT,
        KelurahanName TEXT,
        KecamatanCode TEXT,
        KecamatanName TEXT,
        Dati2Code TEXT,
        Dati2Name TEXT,
        IsDati2Flag TEXT,
        MainKelurahanCode TEXT,
        MainKecamatanCode TEXT,
        MainDati2Code TEXT,
        CityCode TEXT,
        CityName TEXT,
        ProvinceCode TEXT,
        ProvinceName TEXT
    )
"#;

const INSERT_LOCATION: &str = r#"
    INSERT INTO locations (
        PostalCode, KelurahanCode, KelurahanName, KecamatanCode, KecamatanName,
        Dati2Code, Dati2Name, IsDati2Flag, MainKelurahanCode, MainKecamatanCode,
        MainDati2Code, CityCode, CityName, ProvinceCode, ProvinceName
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

/// Service for storing and querying postal location rows
pub struct LocationService {
    pool: SqlitePool,
}

impl LocationService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `locations` table when it does not exist yet.
    ///
    /// Safe to call any number of times, including concurrently. Every
    /// operation below calls it before touching the table.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_LOCATIONS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create locations table: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(())
    }

    /// Insert rows one statement at a time, in input order.
    ///
    /// There is no enclosing transaction: the first failing row aborts the
    /// batch and rows inserted before it stay committed.
    pub async fn insert_batch(&self, rows: &[LocationRowDto]) -> Result<usize> {
        self.ensure_schema().await?;

        for (index, row) in rows.iter().enumerate() {
            sqlx::query(INSERT_LOCATION)
                .bind(&row.postal_code)
                .bind(&row.kelurahan_code)
                .bind(&row.kelurahan_name)
                .bind(&row.kecamatan_code)
                .bind(&row.kecamatan_name)
                .bind(&row.dati2_code)
                .bind(&row.dati2_name)
                .bind(&row.is_dati2_flag)
                .bind(&row.main_kelurahan_code)
                .bind(&row.main_kecamatan_code)
                .bind(&row.main_dati2_code)
                .bind(&row.city_code)
                .bind(&row.city_name)
                .bind(&row.province_code)
                .bind(&row.province_name)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!(
                        "Failed to insert location row {} (postal_code={}): {:?}",
                        index,
                        row.postal_code,
                        e
                    );
                    AppError::Database(e)
                })?;
        }

        tracing::info!("Inserted {} location rows", rows.len());

        Ok(rows.len())
    }

    /// List every stored row in the table's natural order
    pub async fn list_all(&self) -> Result<Vec<Location>> {
        self.ensure_schema().await?;

        let locations = sqlx::query_as::<_, Location>("SELECT * FROM locations")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch locations: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Fetched {} locations", locations.len());

        Ok(locations)
    }

    /// List rows whose Dati2Code equals `dati2_code` exactly (case-sensitive)
    pub async fn list_by_dati2_code(&self, dati2_code: &str) -> Result<Vec<Location>> {
        self.ensure_schema().await?;

        let locations =
            sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE Dati2Code = ?")
                .bind(dati2_code)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!(
                        "Failed to fetch locations by dati2 code {}: {:?}",
                        dati2_code,
                        e
                    );
                    AppError::Database(e)
                })?;

        tracing::info!(
            "Fetched {} locations for dati2 code {}",
            locations.len(),
            dati2_code
        );

        Ok(locations)
    }

    /// Maintenance insert: one row with only PostalCode and KelurahanCode
    /// set, every other column left NULL.
    pub async fn insert_example(&self) -> Result<()> {
        self.ensure_schema().await?;

        sqlx::query("INSERT INTO locations (PostalCode, KelurahanCode) VALUES (?, ?)")
            .bind(EXAMPLE_POSTAL_CODE)
            .bind(EXAMPLE_KELURAHAN_CODE)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert example location: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Inserted example location: postal_code={}, kelurahan_code={}",
            EXAMPLE_POSTAL_CODE,
            EXAMPLE_KELURAHAN_CODE
        );

        Ok(())
    }
}
