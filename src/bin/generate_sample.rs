use std::path::Path;

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

/// Long-run production trend: slow decline from ~6.3 Mt.
fn production_trend(year: i32) -> f64 {
    let t = (year - 1961) as f64;
    6_300_000.0 - 32_000.0 * t
}

/// Long-run consumption trend: exponential decline from 17.3 L per capita.
fn consumption_trend(year: i32) -> f64 {
    let t = (year - 1961) as f64;
    17.3 * (-0.0068 * t).exp()
}

/// Vintages the narrative annotates get a deterministic nudge.
fn vintage_factor(year: i32) -> f64 {
    match year {
        1962 => 1.18, // bumper harvest
        2017 => 0.72, // spring frost
        _ => 1.0,
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let out_dir = Path::new("data");
    std::fs::create_dir_all(out_dir).expect("Failed to create data directory");

    let years: Vec<i32> = (1961..=2018).collect();
    let mut production: Vec<(i32, f64)> = Vec::with_capacity(years.len());
    let mut consumption: Vec<(i32, f64)> = Vec::with_capacity(years.len());

    for &year in &years {
        let prod = (production_trend(year) + rng.gauss(0.0, 450_000.0)) * vintage_factor(year);
        production.push((year, prod.max(1_000_000.0)));

        let cons = consumption_trend(year) + rng.gauss(0.0, 0.35);
        consumption.push((year, cons.max(5.0)));
    }

    let prod_path = out_dir.join("wine_production.csv");
    let mut writer = csv::Writer::from_path(&prod_path).expect("Failed to create output file");
    writer
        .write_record(["Year", "Wine Production tonnes"])
        .expect("Failed to write header");
    for (year, value) in &production {
        writer
            .write_record([year.to_string(), format!("{value:.0}")])
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush writer");

    let cons_path = out_dir.join("alcohol_consumption.csv");
    let mut writer = csv::Writer::from_path(&cons_path).expect("Failed to create output file");
    writer
        .write_record(["Year", "Alcohol Consumption"])
        .expect("Failed to write header");
    for (year, value) in &consumption {
        writer
            .write_record([year.to_string(), format!("{value:.2}")])
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush writer");

    println!(
        "Wrote {} years to {} and {}",
        years.len(),
        prod_path.display(),
        cons_path.display()
    );
}
