use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::classify::NEW_BATCH_ERROR_ROWS;
use crate::codec;
use crate::error::FleetResult;
use crate::schema::FULL_FIELD_COUNT;
use crate::source::base::RecordSource;
use crate::types::FlatRecord;

const PLATE_STATES: &[&str] = &["CA", "NY", "TX", "FL", "WA", "IL", "PA", "OH", "GA", "NC"];

const MAKES_AND_MODELS: &[(&str, &str)] = &[
    ("Ford", "F-150"),
    ("Toyota", "Camry"),
    ("Honda", "Civic"),
    ("Chevrolet", "Silverado"),
    ("Nissan", "Altima"),
    ("Jeep", "Wrangler"),
    ("Subaru", "Outback"),
    ("Hyundai", "Elantra"),
];

const COLORS: &[&str] = &["black", "white", "silver", "blue", "red", "gray", "green"];

const BRANDS: &[&str] = &["metro", "coastal", "summit", "pioneer"];

const FIRST_NAMES: &[&str] = &["Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Radia"];

const LAST_NAMES: &[&str] = &["Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth"];

const STREETS: &[&str] = &["Main St", "Oak Ave", "Maple Dr", "Cedar Ln", "Elm St", "Lake Rd"];

const CITIES: &[(&str, &str, &str)] = &[
    ("Austin", "TX", "73301"),
    ("Albany", "NY", "12207"),
    ("Sacramento", "CA", "94203"),
    ("Tampa", "FL", "33601"),
    ("Spokane", "WA", "99201"),
    ("Columbus", "OH", "43004"),
];

/// VIN alphabet, excluding I, O, and Q.
const VIN_CHARS: &[u8] = b"ABCDEFGHJKLMNPRSTUVWXYZ0123456789";

const VIN_LENGTH: usize = 17;

/// Number of leading fields kept when generating the trailing incomplete
/// entries of a batch.
const TRUNCATED_ERROR_FIELDS: usize = 4;

/// Random record source for the daily synthetic feed.
///
/// Generates schema-full records from fixed word pools, rendering them
/// through the codec. The trailing [`NEW_BATCH_ERROR_ROWS`] entries of every
/// batch are generated incomplete, matching the anomaly category the
/// classifier expects at the end of a batch.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    rng: Arc<Mutex<StdRng>>,
}

impl SyntheticSource {
    /// Creates a source seeded from entropy.
    pub fn new() -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::from_entropy())),
        }
    }

    /// Creates a deterministic source from a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    fn generate_record(rng: &mut StdRng) -> FlatRecord {
        let mut plate = String::with_capacity(7);
        for _ in 0..3 {
            plate.push(char::from(b'A' + rng.gen_range(0..26)));
        }
        for _ in 0..4 {
            plate.push(char::from(b'0' + rng.gen_range(0..10)));
        }

        let (make, model) = *choose(rng, MAKES_AND_MODELS);
        let (city, state, postal_code) = *choose(rng, CITIES);
        let first_name = *choose(rng, FIRST_NAMES);
        let last_name = *choose(rng, LAST_NAMES);

        let mut vin = String::with_capacity(VIN_LENGTH);
        for _ in 0..VIN_LENGTH {
            vin.push(char::from(*choose(rng, VIN_CHARS)));
        }

        let address_line_2 = if rng.gen_range(0..4) == 0 {
            format!("Unit {}", rng.gen_range(1..100))
        } else {
            String::new()
        };

        let fields = vec![
            plate,
            choose(rng, PLATE_STATES).to_string(),
            rng.gen_range(1998..=2025).to_string(),
            make.to_string(),
            model.to_string(),
            choose(rng, COLORS).to_string(),
            vin,
            choose(rng, BRANDS).to_string(),
            Uuid::from_u128(rng.r#gen()).to_string(),
            first_name.to_string(),
            last_name.to_string(),
            format!("{} {}", rng.gen_range(1..2000), choose(rng, STREETS)),
            address_line_2,
            city.to_string(),
            state.to_string(),
            postal_code.to_string(),
            "US".to_string(),
            format!(
                "{:03}-{:03}-{:04}",
                rng.gen_range(200..1000),
                rng.gen_range(100..1000),
                rng.gen_range(0..10000)
            ),
            format!(
                "{}.{}@fleetmail.test",
                first_name.to_lowercase(),
                last_name.to_lowercase()
            ),
        ];
        debug_assert_eq!(fields.len(), FULL_FIELD_COUNT);

        FlatRecord::new(fields)
    }

    fn truncate_record(record: FlatRecord) -> FlatRecord {
        let mut fields = record.fields().to_vec();
        fields.truncate(TRUNCATED_ERROR_FIELDS);
        FlatRecord::new(fields)
    }
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSource for SyntheticSource {
    async fn fetch_batch(&self, count: usize) -> FleetResult<Vec<String>> {
        let mut rng = self.rng.lock().await;

        let incomplete_from = count.saturating_sub(NEW_BATCH_ERROR_ROWS);
        let mut lines = Vec::with_capacity(count);
        for position in 0..count {
            let mut record = Self::generate_record(&mut rng);
            if position >= incomplete_from {
                record = Self::truncate_record(record);
            }
            lines.push(codec::encode(&record));
        }

        info!("generated a new batch of {} records", lines.len());

        Ok(lines)
    }
}

fn choose<'a, T>(rng: &mut StdRng, pool: &'a [T]) -> &'a T {
    // Pools are compile-time constants and never empty.
    pool.choose(rng).expect("pool is not empty")
}
