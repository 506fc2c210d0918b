//! Indonesian postal location store.
//!
//! Keeps postal codes together with their administrative hierarchy
//! (kelurahan, kecamatan, dati2/city, province) in one flat `locations`
//! table. Records have no identity beyond their field tuple and duplicates
//! are allowed.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/insert` | Insert a batch of location rows |
//! | GET | `/data` | List every stored row |
//! | POST | `/data/by-dati2code` | List rows with an exact Dati2Code |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::LocationService;
