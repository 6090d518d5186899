use std::io;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use thiserror::Error;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Column labels (matched after trimming surrounding whitespace)
// ---------------------------------------------------------------------------

const COL_NAME: &str = "Name";
const COL_BRANCH: &str = "Branch";
const COL_YEAR: &str = "Graduation Year";
const COL_COMPANY: &str = "Company";
const COL_JOB_ROLE: &str = "Job Role";
const COL_LOCATION: &str = "Location";
const COL_SALARY: &str = "Salary (INR)";
const COL_DATE: &str = "Placement Date";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal load failures. Per-record anomalies (bad salary, bad date) are
/// absorbed as missing values instead and never surface here.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the placement dataset from a CSV file.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    read_dataset(reader)
}

/// Parse a placement dataset from any CSV reader.
///
/// Rows whose graduation year does not parse are skipped (the schema makes
/// the year a required integer); everything else is kept, with salary and
/// placement date falling back to missing when they fail to parse.
pub fn read_dataset<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Dataset, LoadError> {
    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let raw = result?;
        // +2: records() starts after the header row, and CSV lines are 1-based.
        let line = row + 2;

        let year_field = columns.get(&raw, columns.year);
        let graduation_year = match year_field.parse::<i32>() {
            Ok(y) => y,
            Err(_) => {
                log::warn!("line {line}: skipping row with unparseable graduation year '{year_field}'");
                continue;
            }
        };

        records.push(Record {
            name: columns.get(&raw, columns.name).to_string(),
            branch: columns.get(&raw, columns.branch).to_string(),
            graduation_year,
            company: columns.get(&raw, columns.company).to_string(),
            job_role: columns.get(&raw, columns.job_role).to_string(),
            location: columns.get(&raw, columns.location).to_string(),
            salary: parse_salary(columns.get(&raw, columns.salary)),
            placement_date: parse_date(columns.get(&raw, columns.date)),
        });
    }

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Header resolution
// ---------------------------------------------------------------------------

struct ColumnIndex {
    name: usize,
    branch: usize,
    year: usize,
    company: usize,
    job_role: usize,
    location: usize,
    salary: usize,
    date: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |label: &'static str| -> Result<usize, LoadError> {
            headers
                .iter()
                .position(|h| h.trim() == label)
                .ok_or(LoadError::MissingColumn(label))
        };

        Ok(ColumnIndex {
            name: find(COL_NAME)?,
            branch: find(COL_BRANCH)?,
            year: find(COL_YEAR)?,
            company: find(COL_COMPANY)?,
            job_role: find(COL_JOB_ROLE)?,
            location: find(COL_LOCATION)?,
            salary: find(COL_SALARY)?,
            date: find(COL_DATE)?,
        })
    }

    fn get<'a>(&self, record: &'a StringRecord, idx: usize) -> &'a str {
        record.get(idx).map(str::trim).unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// Field coercion
// ---------------------------------------------------------------------------

/// Parse a salary cell. Thousands separators are tolerated; anything
/// non-numeric, non-finite, or negative becomes missing.
fn parse_salary(s: &str) -> Option<f64> {
    if s.is_empty() {
        return None;
    }
    let cleaned: String = s.chars().filter(|c| *c != ',').collect();
    let value = cleaned.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Parse a placement-date cell against the formats seen in real exports.
/// Failure yields a missing date rather than an error.
fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    const FMTS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];
    FMTS.iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset_from(csv_text: &str) -> Result<Dataset, LoadError> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv_text.as_bytes());
        read_dataset(reader)
    }

    const HEADER: &str =
        "Name,Branch,Graduation Year,Company,Job Role,Location,Salary (INR),Placement Date";

    #[test]
    fn loads_well_formed_rows() {
        let text = format!(
            "{HEADER}\n\
             Asha,CS,2023,Acme,Engineer,Pune,500000,2023-06-15\n\
             Ravi,EE,2022,Beta,Analyst,Mumbai,600000,14/07/2022\n"
        );
        let ds = dataset_from(&text).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].branch, "CS");
        assert_eq!(ds.records[0].salary, Some(500_000.0));
        assert_eq!(
            ds.records[0].placement_date,
            NaiveDate::from_ymd_opt(2023, 6, 15)
        );
        assert_eq!(
            ds.records[1].placement_date,
            NaiveDate::from_ymd_opt(2022, 7, 14)
        );
    }

    #[test]
    fn trims_header_whitespace() {
        let text = "Name , Branch,Graduation Year ,Company,Job Role,Location, Salary (INR) ,Placement Date\n\
                    Asha,CS,2023,Acme,Engineer,Pune,500000,2023-06-15\n";
        let ds = dataset_from(text).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].company, "Acme");
    }

    #[test]
    fn bad_salary_and_date_become_missing() {
        let text = format!(
            "{HEADER}\n\
             Asha,CS,2023,Acme,Engineer,Pune,n/a,soon\n\
             Ravi,EE,2022,Beta,Analyst,Mumbai,-5,\n\
             Mira,CS,2023,Acme,Engineer,Pune,\"7,50,000\",2023-08-01\n"
        );
        let ds = dataset_from(&text).unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records[0].salary, None);
        assert_eq!(ds.records[0].placement_date, None);
        assert_eq!(ds.records[1].salary, None);
        assert_eq!(ds.records[2].salary, Some(750_000.0));
    }

    #[test]
    fn rows_with_bad_year_are_skipped() {
        let text = format!(
            "{HEADER}\n\
             Asha,CS,2023,Acme,Engineer,Pune,500000,2023-06-15\n\
             Ravi,EE,unknown,Beta,Analyst,Mumbai,600000,2022-07-14\n"
        );
        let ds = dataset_from(&text).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].name, "Asha");
    }

    #[test]
    fn missing_required_column_fails() {
        let text = "Name,Branch,Company,Job Role,Location,Salary (INR),Placement Date\n";
        let err = dataset_from(text).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Graduation Year")));
    }
}
