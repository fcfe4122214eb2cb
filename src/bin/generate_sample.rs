//! Generate a deterministic pair of demo CSVs: a baseline dataset at
//! nominal output and a live dataset with one disconnected string and a
//! couple of weak performers. Handy for trying the analyzer without real
//! telemetry:
//!
//! ```text
//! cargo run --bin generate_sample
//! cargo run -- hourly_data.csv standard_data.csv
//! ```

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

/// Solar output over a day: zero at night, a sine bell between sunrise and
/// sunset, scaled by the string's health factor.
fn hourly_output(hour: usize, health: f64, rng: &mut SimpleRng) -> f64 {
    const SUNRISE: f64 = 6.0;
    const SUNSET: f64 = 20.0;
    let h = hour as f64;
    if h < SUNRISE || h > SUNSET {
        return 0.01; // standby trickle, not the disconnection sentinel
    }
    let phase = (h - SUNRISE) / (SUNSET - SUNRISE) * std::f64::consts::PI;
    let nominal = 55.0 * phase.sin() * health;
    (nominal + rng.gauss(0.0, 1.2)).max(0.01)
}

fn write_dataset(
    path: &str,
    healths: &[f64],
    dead_string: Option<usize>,
    rng: &mut SimpleRng,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["Hour".to_string()];
    header.extend((1..=healths.len()).map(|i| format!("S{i}")));
    writer.write_record(&header)?;

    for hour in 0..24 {
        let mut record = vec![hour.to_string()];
        for (idx, &health) in healths.iter().enumerate() {
            let value = if dead_string == Some(idx) {
                0.0
            } else {
                hourly_output(hour, health, rng)
            };
            record.push(format!("{value:.2}"));
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = SimpleRng::new(42);

    // Baseline: eight healthy strings at nominal output.
    let nominal = [1.0; 8];
    write_dataset("standard_data.csv", &nominal, None, &mut rng)?;

    // Live: S3 dead all day, S6 and S7 degraded.
    let mut degraded = [1.0; 8];
    degraded[5] = 0.55;
    degraded[6] = 0.7;
    write_dataset("hourly_data.csv", &degraded, Some(2), &mut rng)?;

    println!("Wrote standard_data.csv and hourly_data.csv (8 strings x 24 hours)");
    Ok(())
}
