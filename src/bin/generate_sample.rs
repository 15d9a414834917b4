//! Writes a synthetic `spacex_launch_dash.csv` so the dashboard can run
//! without the real launch-records export. Deterministic: same seed, same
//! file.

use serde::Serialize;

#[derive(Serialize)]
struct SampleRow {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: &'static str,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: &'static str,
    #[serde(rename = "class")]
    class: u8,
}

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (site, launches, typical payload kg, payload spread)
    let sites: [(&str, u32, f64, f64); 4] = [
        ("CCAFS LC-40", 26, 3100.0, 1600.0),
        ("VAFB SLC-4E", 10, 4800.0, 2400.0),
        ("KSC LC-39A", 13, 5200.0, 2600.0),
        ("CCAFS SLC-40", 7, 3400.0, 1800.0),
    ];
    // (category, base success rate) – later boosters land more reliably
    let categories: [(&str, f64); 3] = [("v1.0", 0.2), ("v1.1", 0.45), ("FT", 0.75)];

    let output_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    let mut flight_number = 1;
    for (site, launches, payload_mean, payload_spread) in sites {
        for _ in 0..launches {
            let (category, base_rate) = categories[(rng.next_f64() * 3.0) as usize % 3];
            let payload_mass_kg = rng
                .gauss(payload_mean, payload_spread)
                .clamp(0.0, 9600.0)
                .round();

            // Heavier payloads push the booster harder.
            let success_rate = (base_rate - payload_mass_kg / 40_000.0).clamp(0.05, 0.95);
            let class = u8::from(rng.next_f64() < success_rate);

            writer
                .serialize(SampleRow {
                    flight_number,
                    launch_site: site,
                    payload_mass_kg,
                    booster_version_category: category,
                    class,
                })
                .expect("Failed to write record");
            flight_number += 1;
        }
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {} launch records to {output_path}", flight_number - 1);
}
