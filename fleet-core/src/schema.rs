//! Positional field schemas for flat vehicle records.
//!
//! Records carry no field names of their own; names are assigned purely by
//! position through one of the two schema tables below. The vehicle schema is
//! a strict prefix of the full schema, so vehicle-level projections of
//! full-schema records read the leading columns.

/// A named column position within a flat record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaField {
    /// Semantic field name.
    pub name: &'static str,
    /// Zero-based column position.
    pub index: usize,
}

/// Column positions shared by both schemas.
pub mod columns {
    pub const PLATE_NUMBER: usize = 0;
    pub const PLATE_STATE: usize = 1;
    pub const YEAR: usize = 2;
    pub const MAKE: usize = 3;
    pub const MODEL: usize = 4;
    pub const COLOR: usize = 5;
    pub const VIN: usize = 6;
    pub const BRAND: usize = 7;
    pub const VEHICLE_ID: usize = 8;
    pub const OWNER_FIRST_NAME: usize = 9;
    pub const OWNER_LAST_NAME: usize = 10;
    pub const ADDRESS_LINE_1: usize = 11;
    pub const ADDRESS_LINE_2: usize = 12;
    pub const CITY: usize = 13;
    pub const STATE: usize = 14;
    pub const POSTAL_CODE: usize = 15;
    pub const COUNTRY: usize = 16;
    pub const PHONE: usize = 17;
    pub const EMAIL: usize = 18;
}

/// The 7-field vehicle schema.
pub const VEHICLE_SCHEMA: &[SchemaField] = &[
    SchemaField { name: "plate_number", index: columns::PLATE_NUMBER },
    SchemaField { name: "plate_state", index: columns::PLATE_STATE },
    SchemaField { name: "year", index: columns::YEAR },
    SchemaField { name: "make", index: columns::MAKE },
    SchemaField { name: "model", index: columns::MODEL },
    SchemaField { name: "color", index: columns::COLOR },
    SchemaField { name: "vin", index: columns::VIN },
];

/// The 19-field full schema: vehicle fields plus brand, internal vehicle id,
/// and owner location/contact fields.
pub const FULL_SCHEMA: &[SchemaField] = &[
    SchemaField { name: "plate_number", index: columns::PLATE_NUMBER },
    SchemaField { name: "plate_state", index: columns::PLATE_STATE },
    SchemaField { name: "year", index: columns::YEAR },
    SchemaField { name: "make", index: columns::MAKE },
    SchemaField { name: "model", index: columns::MODEL },
    SchemaField { name: "color", index: columns::COLOR },
    SchemaField { name: "vin", index: columns::VIN },
    SchemaField { name: "brand", index: columns::BRAND },
    SchemaField { name: "vehicle_id", index: columns::VEHICLE_ID },
    SchemaField { name: "owner_first_name", index: columns::OWNER_FIRST_NAME },
    SchemaField { name: "owner_last_name", index: columns::OWNER_LAST_NAME },
    SchemaField { name: "address_line_1", index: columns::ADDRESS_LINE_1 },
    SchemaField { name: "address_line_2", index: columns::ADDRESS_LINE_2 },
    SchemaField { name: "city", index: columns::CITY },
    SchemaField { name: "state", index: columns::STATE },
    SchemaField { name: "postal_code", index: columns::POSTAL_CODE },
    SchemaField { name: "country", index: columns::COUNTRY },
    SchemaField { name: "phone", index: columns::PHONE },
    SchemaField { name: "email", index: columns::EMAIL },
];

/// Number of fields in the vehicle schema.
pub const VEHICLE_FIELD_COUNT: usize = VEHICLE_SCHEMA.len();

/// Number of fields in the full schema.
pub const FULL_FIELD_COUNT: usize = FULL_SCHEMA.len();

/// Resolves a field name to its column position within a schema.
pub fn field_index(schema: &[SchemaField], name: &str) -> Option<usize> {
    schema
        .iter()
        .find(|field| field.name == name)
        .map(|field| field.index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_sizes() {
        assert_eq!(VEHICLE_FIELD_COUNT, 7);
        assert_eq!(FULL_FIELD_COUNT, 19);
    }

    #[test]
    fn test_vehicle_schema_is_prefix_of_full_schema() {
        for (vehicle, full) in VEHICLE_SCHEMA.iter().zip(FULL_SCHEMA.iter()) {
            assert_eq!(vehicle, full);
        }
    }

    #[test]
    fn test_field_index_lookup() {
        assert_eq!(field_index(VEHICLE_SCHEMA, "color"), Some(columns::COLOR));
        assert_eq!(field_index(FULL_SCHEMA, "email"), Some(columns::EMAIL));
        assert_eq!(field_index(VEHICLE_SCHEMA, "email"), None);
    }

    #[test]
    fn test_indexes_are_contiguous() {
        for (position, field) in FULL_SCHEMA.iter().enumerate() {
            assert_eq!(field.index, position);
        }
    }
}
