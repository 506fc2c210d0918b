/// Acknowledgement returned after a batch insert succeeds
pub const MSG_LOCATIONS_INSERTED: &str = "Data inserted successfully";

/// Fixed rejection message for the Dati2Code lookup body
pub const MSG_DATI2_CODE_REQUIRED: &str = "Dati2Code is required in the request body";

// =============================================================================
// MAINTENANCE EXAMPLE ROW
// =============================================================================

pub const EXAMPLE_POSTAL_CODE: &str = "12345";
pub const EXAMPLE_KELURAHAN_CODE: &str = "KEL001";
