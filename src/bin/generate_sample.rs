use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// Minimal deterministic PRNG (xoshiro256**), so the sample file is
/// reproducible without pulling in a randomness crate.
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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    fn range(&mut self, lo: u32, hi: u32) -> u32 {
        lo + (self.next_u64() % (hi - lo) as u64) as u32
    }
}

#[derive(Serialize)]
struct SampleRow<'a> {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Branch")]
    branch: &'a str,
    #[serde(rename = "Graduation Year")]
    graduation_year: i32,
    #[serde(rename = "Company")]
    company: &'a str,
    #[serde(rename = "Job Role")]
    job_role: &'a str,
    #[serde(rename = "Location")]
    location: &'a str,
    #[serde(rename = "Salary (INR)")]
    salary: String,
    #[serde(rename = "Placement Date")]
    placement_date: String,
}

const FIRST_NAMES: [&str; 12] = [
    "Aarav", "Asha", "Dev", "Isha", "Kiran", "Meera", "Nikhil", "Priya", "Rahul", "Sneha",
    "Tanvi", "Vikram",
];
const LAST_NAMES: [&str; 10] = [
    "Sharma", "Patel", "Reddy", "Iyer", "Khan", "Das", "Mehta", "Nair", "Singh", "Joshi",
];
const BRANCHES: [&str; 6] = ["CSE", "IT", "ECE", "EEE", "Mechanical", "Civil"];
const LOCATIONS: [&str; 7] = [
    "Bengaluru", "Hyderabad", "Pune", "Chennai", "Mumbai", "Delhi NCR", "Kolkata",
];

// (company, role, base salary in INR)
const OFFERS: [(&str, &str, f64); 12] = [
    ("TCS", "Software Engineer", 420_000.0),
    ("Infosys", "Systems Engineer", 450_000.0),
    ("Wipro", "Project Engineer", 400_000.0),
    ("Amazon", "SDE I", 1_800_000.0),
    ("Microsoft", "Software Engineer", 2_000_000.0),
    ("Flipkart", "SDE I", 1_600_000.0),
    ("Deloitte", "Analyst", 700_000.0),
    ("Accenture", "Associate Engineer", 480_000.0),
    ("Bosch", "Graduate Trainee", 550_000.0),
    ("L&T", "Graduate Engineer", 500_000.0),
    ("Zoho", "Member Technical Staff", 850_000.0),
    ("Cognizant", "Programmer Analyst", 430_000.0),
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = "placement_data.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut rows = 0usize;
    for year in 2019..=2024 {
        let batch = 60 + (rng.next_u64() % 40) as usize;
        for _ in 0..batch {
            let &(company, job_role, base) = rng.pick(&OFFERS);

            // Salaries vary ±20% around the offer base, with a slow
            // year-on-year drift. A few are left blank or garbled to
            // exercise the missing-salary path downstream.
            let drift = 1.0 + 0.03 * (year - 2019) as f64;
            let jitter = 0.8 + 0.4 * rng.next_f64();
            let salary = if rng.next_f64() < 0.04 {
                String::new()
            } else if rng.next_f64() < 0.02 {
                "not disclosed".to_string()
            } else {
                format!("{:.0}", base * drift * jitter)
            };

            // Placements land between January and September of the
            // graduation year; a handful of dates are malformed.
            let month = rng.range(1, 10);
            let day = rng.range(1, 28);
            let placement_date = if rng.next_f64() < 0.03 {
                "TBD".to_string()
            } else {
                NaiveDate::from_ymd_opt(year, month, day)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default()
            };

            writer.serialize(SampleRow {
                name: format!("{} {}", rng.pick(&FIRST_NAMES), rng.pick(&LAST_NAMES)),
                branch: *rng.pick(&BRANCHES),
                graduation_year: year,
                company,
                job_role,
                location: *rng.pick(&LOCATIONS),
                salary,
                placement_date,
            })?;
            rows += 1;
        }
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {rows} placement records to {output_path}");
    Ok(())
}
