//! Writes a deterministic sample listings dataset to `data/listings.csv`,
//! for demos and manual testing. Fully seeded, so repeated runs produce the
//! same file.

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo)
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

struct CountySeed {
    state: &'static str,
    county: &'static str,
    latitude: f64,
    longitude: f64,
}

const COUNTIES: [CountySeed; 6] = [
    CountySeed { state: "CA", county: "Los Angeles", latitude: 34.05, longitude: -118.24 },
    CountySeed { state: "CA", county: "Orange", latitude: 33.70, longitude: -117.77 },
    CountySeed { state: "CA", county: "San Diego", latitude: 32.72, longitude: -117.16 },
    CountySeed { state: "TX", county: "Travis", latitude: 30.27, longitude: -97.74 },
    CountySeed { state: "TX", county: "Harris", latitude: 29.76, longitude: -95.37 },
    CountySeed { state: "FL", county: "Miami-Dade", latitude: 25.76, longitude: -80.19 },
];

const HOME_TYPES: [&str; 4] = ["SINGLE_FAMILY", "CONDO", "TOWNHOUSE", "MULTI_FAMILY"];

const DESCRIPTIONS: [&str; 5] = [
    "Charming starter home close to schools and transit",
    "Recently renovated with an updated kitchen",
    "Spacious lot with mature trees and a two-car garage",
    "Bright corner unit with open floor plan",
    "Quiet cul-de-sac location, move-in ready",
];

const LISTINGS_PER_COUNTY: usize = 40;

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    std::fs::create_dir_all("data").context("creating data directory")?;
    let mut writer =
        csv::Writer::from_path("data/listings.csv").context("creating data/listings.csv")?;

    writer.write_record([
        "zpid",
        "state",
        "County",
        "homeType",
        "Section_8",
        "bedrooms",
        "latitude",
        "longitude",
        "detailUrl_InfoTOD",
        "price_sq_foot",
        "FRM",
        "yearBuilt",
        "SCHOOLSMeandistance",
        "price_to_rent_ratio_InfoTOD",
        "livingArea",
        "lastSoldPrice",
        "description",
    ])?;

    let mut zpid: u64 = 20_000_000;
    for seed in &COUNTIES {
        for _ in 0..LISTINGS_PER_COUNTY {
            zpid += rng.range(11, 9_999);

            let home_type = HOME_TYPES[rng.range(0, HOME_TYPES.len() as u64) as usize];
            let section_8 = u8::from(rng.next_f64() < 0.35);
            // ~5% of listings come without bedroom data.
            let bedrooms = if rng.next_f64() < 0.05 {
                String::new()
            } else {
                rng.range(1, 6).to_string()
            };
            let latitude = rng.gauss(seed.latitude, 0.08);
            let longitude = rng.gauss(seed.longitude, 0.08);
            let price_sq_foot = rng.gauss(300.0, 80.0).max(50.0);
            let frm = rng.gauss(2000.0, 400.0).max(600.0);
            let year_built = 1950 + rng.range(0, 71);
            let schools = rng.gauss(1.5, 0.6).abs();
            let ratio = rng.gauss(16.0, 3.0).max(5.0);
            let living_area = rng.gauss(1500.0, 400.0).max(500.0).round();
            let last_sold = (living_area * price_sq_foot / 1000.0).round() * 1000.0;
            let description = DESCRIPTIONS[rng.range(0, DESCRIPTIONS.len() as u64) as usize];

            writer.write_record([
                zpid.to_string(),
                seed.state.to_string(),
                seed.county.to_string(),
                home_type.to_string(),
                section_8.to_string(),
                bedrooms,
                format!("{latitude:.5}"),
                format!("{longitude:.5}"),
                format!("https://www.zillow.com/homedetails/{zpid}_zpid/"),
                format!("{price_sq_foot:.2}"),
                format!("{frm:.0}"),
                year_built.to_string(),
                format!("{schools:.2}"),
                format!("{ratio:.1}"),
                format!("{living_area:.0}"),
                format!("{last_sold:.0}"),
                description.to_string(),
            ])?;
        }
    }

    writer.flush().context("writing data/listings.csv")?;
    println!(
        "Wrote {} listings across {} counties to data/listings.csv",
        LISTINGS_PER_COUNTY * COUNTIES.len(),
        COUNTIES.len()
    );
    Ok(())
}
