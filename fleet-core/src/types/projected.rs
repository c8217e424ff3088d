use serde::Serialize;

use crate::schema::columns;
use crate::types::record::FlatRecord;

/// A flat record projected through the 7-field vehicle schema.
///
/// Missing columns project to empty strings; projection never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleRecord {
    pub plate_number: String,
    pub plate_state: String,
    pub year: String,
    pub make: String,
    pub model: String,
    pub color: String,
    pub vin: String,
}

impl VehicleRecord {
    /// Projects a flat record through the vehicle schema.
    pub fn project(record: &FlatRecord) -> Self {
        Self {
            plate_number: record.field(columns::PLATE_NUMBER).to_string(),
            plate_state: record.field(columns::PLATE_STATE).to_string(),
            year: record.field(columns::YEAR).to_string(),
            make: record.field(columns::MAKE).to_string(),
            model: record.field(columns::MODEL).to_string(),
            color: record.field(columns::COLOR).to_string(),
            vin: record.field(columns::VIN).to_string(),
        }
    }
}

/// A flat record projected through the 19-field full schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullRecord {
    pub plate_number: String,
    pub plate_state: String,
    pub year: String,
    pub make: String,
    pub model: String,
    pub color: String,
    pub vin: String,
    pub brand: String,
    pub vehicle_id: String,
    pub owner_first_name: String,
    pub owner_last_name: String,
    pub address_line_1: String,
    pub address_line_2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub phone: String,
    pub email: String,
}

impl FullRecord {
    /// Projects a flat record through the full schema.
    pub fn project(record: &FlatRecord) -> Self {
        Self {
            plate_number: record.field(columns::PLATE_NUMBER).to_string(),
            plate_state: record.field(columns::PLATE_STATE).to_string(),
            year: record.field(columns::YEAR).to_string(),
            make: record.field(columns::MAKE).to_string(),
            model: record.field(columns::MODEL).to_string(),
            color: record.field(columns::COLOR).to_string(),
            vin: record.field(columns::VIN).to_string(),
            brand: record.field(columns::BRAND).to_string(),
            vehicle_id: record.field(columns::VEHICLE_ID).to_string(),
            owner_first_name: record.field(columns::OWNER_FIRST_NAME).to_string(),
            owner_last_name: record.field(columns::OWNER_LAST_NAME).to_string(),
            address_line_1: record.field(columns::ADDRESS_LINE_1).to_string(),
            address_line_2: record.field(columns::ADDRESS_LINE_2).to_string(),
            city: record.field(columns::CITY).to_string(),
            state: record.field(columns::STATE).to_string(),
            postal_code: record.field(columns::POSTAL_CODE).to_string(),
            country: record.field(columns::COUNTRY).to_string(),
            phone: record.field(columns::PHONE).to_string(),
            email: record.field(columns::EMAIL).to_string(),
        }
    }
}

/// The minimal fleet identity of a vehicle: plate number plus plate state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FleetKey {
    pub plate_number: String,
    pub plate_state: String,
}

impl FleetKey {
    /// Reduces a vehicle record to its fleet identity.
    pub fn from_vehicle(record: &VehicleRecord) -> Self {
        Self {
            plate_number: record.plate_number.clone(),
            plate_state: record.plate_state.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> FlatRecord {
        FlatRecord::new(fields.iter().map(|field| field.to_string()).collect())
    }

    #[test]
    fn test_vehicle_projection_reads_leading_columns() {
        let flat = record(&["AAA1111", "CA", "2020", "Ford", "F-150", "blue", "VIN00000000000001"]);
        let vehicle = VehicleRecord::project(&flat);
        assert_eq!(vehicle.plate_number, "AAA1111");
        assert_eq!(vehicle.color, "blue");
        assert_eq!(vehicle.vin, "VIN00000000000001");
    }

    #[test]
    fn test_short_record_projects_empty_fields() {
        let flat = record(&["AAA1111", "CA", "2020"]);
        let vehicle = VehicleRecord::project(&flat);
        assert_eq!(vehicle.make, "");
        assert_eq!(vehicle.vin, "");

        let full = FullRecord::project(&flat);
        assert_eq!(full.email, "");
        assert_eq!(full.plate_number, "AAA1111");
    }

    #[test]
    fn test_fleet_key_is_strict_sub_projection() {
        let flat = record(&["AAA1111", "CA", "2020", "Ford", "F-150", "blue", "VIN00000000000001"]);
        let vehicle = VehicleRecord::project(&flat);
        let key = FleetKey::from_vehicle(&vehicle);
        assert_eq!(key.plate_number, vehicle.plate_number);
        assert_eq!(key.plate_state, vehicle.plate_state);
    }
}
