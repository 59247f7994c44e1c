//! Synthetic demo dataset — lets the TUI start with no CSV on disk.
//!
//! Deterministic per instrument: the RNG is seeded from the instrument code,
//! so repeated launches show the same rows. Callers must label the result as
//! synthetic; it never mixes with loaded data.

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::catalog::Instrument;
use crate::data::dataset::Dataset;
use crate::domain::{SequenceRow, Weekday, MODEL_VOCABULARY};

const START_POINTS: &[&str] = &[
    "OpenHigh (Green)",
    "OpenHigh (Red)",
    "OpenLow (Green)",
    "OpenLow (Red)",
    "MaxHigh (Green)",
    "MaxLow (Red)",
];

const POSITION_TYPES: &[&str] = &["High/Asia", "Low/Asia", "High/London", "Low/London"];

const END_POINTS: &[&str] = &[
    "RDR_London",
    "RDR_NY",
    "ADR_Asia",
    "ODR_London",
    "TRN_NY",
];

const INTEGRITY: &[&str] = &["Intact", "Broken"];

/// Generate `target_rows` synthetic sequence rows for an instrument.
///
/// Weekend dates are skipped, as the real exports contain trading days only.
pub fn demo_dataset(instrument: Instrument, target_rows: usize) -> Dataset {
    let seed_bytes = blake3::hash(instrument.as_str().as_bytes());
    let seed: [u8; 32] = *seed_bytes.as_bytes();
    let mut rng = StdRng::from_seed(seed);

    let mut rows = Vec::with_capacity(target_rows);
    let mut date = NaiveDate::from_ymd_opt(2019, 1, 2).expect("valid seed date");

    while rows.len() < target_rows {
        let weekday = Weekday::from(date.weekday());
        if weekday == Weekday::Saturday || weekday == Weekday::Sunday {
            date += chrono::Duration::days(1);
            continue;
        }

        let adr = pick_model(&mut rng);
        let odr = pick_model(&mut rng);
        let rdr = pick_model(&mut rng);
        let combination = match (instrument, &adr, &odr, &rdr) {
            (Instrument::Cl, Some(a), Some(o), Some(r)) => Some(format!("{a}-{o}-{r}")),
            _ => None,
        };

        rows.push(SequenceRow {
            date,
            weekday: Some(weekday),
            position_type: pick(&mut rng, POSITION_TYPES).to_string(),
            start_point: pick(&mut rng, START_POINTS).to_string(),
            end_point_session: pick(&mut rng, END_POINTS).to_string(),
            adr_model: adr,
            odr_model: odr,
            rdr_model: rdr,
            adr_integrity: Some(pick(&mut rng, INTEGRITY).to_string()),
            odr_integrity: Some(pick(&mut rng, INTEGRITY).to_string()),
            model_combination: combination,
        });

        date += chrono::Duration::days(1);
    }

    Dataset::new(instrument, rows, 0)
}

fn pick<'a>(rng: &mut StdRng, values: &'a [&'a str]) -> &'a str {
    values[rng.gen_range(0..values.len())]
}

/// Model cells are absent in roughly one row in ten, like the real exports.
fn pick_model(rng: &mut StdRng) -> Option<String> {
    if rng.gen_range(0..10) == 0 {
        None
    } else {
        Some(pick(rng, MODEL_VOCABULARY).to_string())
    }
}
