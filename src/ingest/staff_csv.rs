//! Staff CSV reader.
//!
//! Each data row holds an employee's name, their pension flag, and then any
//! number of five-cell role groups:
//!
//! ```text
//! Name,Pensionable,Start,Hours,Rate,Category,Stop,Start,Hours,Rate,Category,Stop
//! Alice,Yes,01/01/2019,40,10,Clerk,01/02/2020,01/02/2020,40,14,Manager,
//! Bob,No,,20,9,Cook,
//! ```
//!
//! Dates are `dd/mm/yyyy`. A blank start date means the role has always
//! existed; a blank stop date means it is open-ended. A group with blank
//! hours holds no role.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Role, open_start_date};

const DATE_FORMAT: &str = "%d/%m/%Y";
const ROLE_GROUP_WIDTH: usize = 5;

/// Reads a staff list from a CSV file.
pub fn read_staff_file<P: AsRef<Path>>(path: P) -> EngineResult<Vec<Employee>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| EngineError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let staff = read_staff_csv(file)?;
    debug!(path = %path.display(), employees = staff.len(), "Loaded staff file");
    Ok(staff)
}

/// Reads a staff list from CSV data. The first row is a header and is skipped.
///
/// # Errors
///
/// - `InvalidPensionFlag` for a pension flag other than `Yes`, `No` or blank
/// - `InvalidDateRange` for a role whose stop date is not after its start date
/// - `MalformedRecord` for missing names, unparseable numbers or dates,
///   incomplete role groups, or unreadable CSV
///
/// # Example
///
/// ```
/// use staff_cost_engine::ingest::read_staff_csv;
///
/// let data = "Name,Pensionable,Start,Hours,Rate,Category,Stop\n\
///             Alice,Yes,01/01/2019,40,10,Clerk,\n";
/// let staff = read_staff_csv(data.as_bytes()).unwrap();
/// assert_eq!(staff[0].name, "Alice");
/// assert_eq!(staff[0].roles[0].category(), "Clerk");
/// ```
pub fn read_staff_csv<R: Read>(reader: R) -> EngineResult<Vec<Employee>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut staff = Vec::new();

    for (index, record) in csv_reader.records().enumerate() {
        // Row 1 is the header.
        let row_number = index + 2;
        let record = record.map_err(|e| EngineError::MalformedRecord {
            record: format!("row {}", row_number),
            message: e.to_string(),
        })?;

        if record.iter().all(str::is_empty) {
            continue;
        }

        let cells: Vec<&str> = record.iter().collect();
        let employee = parse_employee(&cells, row_number).inspect_err(|err| {
            warn!(row = row_number, error = %err, "Rejected staff record");
        })?;
        staff.push(employee);
    }

    Ok(staff)
}

fn parse_employee(cells: &[&str], row_number: usize) -> EngineResult<Employee> {
    let name = cells.first().copied().unwrap_or_default();
    if name.is_empty() {
        return Err(EngineError::MalformedRecord {
            record: format!("row {}", row_number),
            message: "employee name is missing".to_string(),
        });
    }

    let pensionable = parse_pension_flag(name, cells.get(1).copied().unwrap_or_default())?;
    let mut employee = Employee::new(name, pensionable);

    for group in cells.get(2..).unwrap_or_default().chunks(ROLE_GROUP_WIDTH) {
        if let Some(role) = parse_role_group(group).map_err(|e| e.in_record(name))? {
            employee.add_role(role);
        }
    }

    Ok(employee)
}

/// Interprets a pension flag: `Yes` or blank is in the scheme, `No` is not.
pub fn parse_pension_flag(employee: &str, value: &str) -> EngineResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        _ => Err(EngineError::InvalidPensionFlag {
            employee: employee.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_role_group(group: &[&str]) -> EngineResult<Option<Role>> {
    if group.len() < ROLE_GROUP_WIDTH {
        if group.iter().all(|cell| cell.is_empty()) {
            return Ok(None);
        }
        return Err(malformed(format!(
            "incomplete role group: expected {} cells, found {}",
            ROLE_GROUP_WIDTH,
            group.len()
        )));
    }

    let [start, hours, rate, category, stop] = [group[0], group[1], group[2], group[3], group[4]];

    if hours.is_empty() {
        return Ok(None);
    }

    let start_date = if start.is_empty() {
        open_start_date()
    } else {
        parse_date(start, "start date")?
    };
    let stop_date = if stop.is_empty() {
        None
    } else {
        Some(parse_date(stop, "stop date")?)
    };

    if rate.is_empty() {
        return Err(malformed(format!("hourly rate is missing for {} role", category)));
    }

    Role::new(
        start_date,
        stop_date,
        parse_decimal(hours, "hours per week")?,
        parse_decimal(rate, "hourly rate")?,
        category,
    )
    .map(Some)
}

fn parse_date(value: &str, field: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| malformed(format!("{} '{}' is not a dd/mm/yyyy date", field, value)))
}

fn parse_decimal(value: &str, field: &str) -> EngineResult<Decimal> {
    Decimal::from_str(value).map_err(|_| malformed(format!("{} '{}' is not a number", field, value)))
}

fn malformed(message: String) -> EngineError {
    EngineError::MalformedRecord {
        record: "role".to_string(),
        message,
    }
}
