//! Employee model and its wire representation.
//!
//! The upstream API (and our own HTTP surface, which mirrors it) transmits
//! salary and age as string-encoded integers under snake_cased field names.
//! [`EmployeeRow`] is that wire shape; [`Employee`] is the parsed domain
//! value used for comparisons and aggregates.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DirectoryError;

/// One employee record on the wire.
///
/// All scalar fields are strings. The upstream is inconsistent about
/// numeric encoding, so `id`, `employee_salary` and `employee_age` accept
/// either a JSON string or a JSON number on input; they are always
/// serialized back as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRow {
    /// Opaque identifier assigned by the upstream.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Display name.
    #[serde(rename = "employee_name")]
    pub name: String,
    /// Compensation value, string-encoded integer.
    #[serde(rename = "employee_salary", deserialize_with = "string_or_number")]
    pub salary: String,
    /// Age, string-encoded integer.
    #[serde(rename = "employee_age", deserialize_with = "string_or_number")]
    pub age: String,
    /// Profile image URL, may be empty.
    #[serde(rename = "profile_image", default)]
    pub profile_image: String,
}

/// An employee as used inside the service.
///
/// Immutable once constructed from an upstream payload; the client never
/// mutates a fetched record. Salary and age are parsed integers so that
/// derived computations compare numbers, not strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Opaque identifier assigned by the upstream.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Compensation value.
    pub salary: i64,
    /// Age, passed through unchanged apart from integer parsing.
    pub age: i64,
    /// Profile image URL, may be empty.
    pub profile_image: String,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = DirectoryError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let salary = parse_int_field(&row.salary, "employee_salary")?;
        let age = parse_int_field(&row.age, "employee_age")?;
        Ok(Employee {
            id: row.id,
            name: row.name,
            salary,
            age,
            profile_image: row.profile_image,
        })
    }
}

impl From<&Employee> for EmployeeRow {
    fn from(employee: &Employee) -> Self {
        EmployeeRow {
            id: employee.id.clone(),
            name: employee.name.clone(),
            salary: employee.salary.to_string(),
            age: employee.age.to_string(),
            profile_image: employee.profile_image.clone(),
        }
    }
}

fn parse_int_field(raw: &str, field: &str) -> Result<i64, DirectoryError> {
    raw.trim()
        .parse()
        .map_err(|_| DirectoryError::MalformedEmployee {
            field: field.to_string(),
            message: format!("'{}' is not an integer", raw),
        })
}

/// Accepts a JSON string or number and yields its string form.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> EmployeeRow {
        EmployeeRow {
            id: "1".to_string(),
            name: "Tiger Nixon".to_string(),
            salary: "320800".to_string(),
            age: "61".to_string(),
            profile_image: String::new(),
        }
    }

    #[test]
    fn test_deserialize_row_with_string_numbers() {
        let json = r#"{
            "id": "1",
            "employee_name": "Tiger Nixon",
            "employee_salary": "320800",
            "employee_age": "61",
            "profile_image": ""
        }"#;

        let row: EmployeeRow = serde_json::from_str(json).unwrap();
        assert_eq!(row, sample_row());
    }

    #[test]
    fn test_deserialize_row_with_numeric_fields() {
        // The live upstream emits numbers for id, salary and age.
        let json = r#"{
            "id": 1,
            "employee_name": "Tiger Nixon",
            "employee_salary": 320800,
            "employee_age": 61,
            "profile_image": ""
        }"#;

        let row: EmployeeRow = serde_json::from_str(json).unwrap();
        assert_eq!(row, sample_row());
    }

    #[test]
    fn test_deserialize_row_without_profile_image() {
        let json = r#"{
            "id": "2",
            "employee_name": "Garrett Winters",
            "employee_salary": "170750",
            "employee_age": "63"
        }"#;

        let row: EmployeeRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.profile_image, "");
    }

    #[test]
    fn test_row_converts_to_employee() {
        let employee = Employee::try_from(sample_row()).unwrap();
        assert_eq!(employee.id, "1");
        assert_eq!(employee.name, "Tiger Nixon");
        assert_eq!(employee.salary, 320_800);
        assert_eq!(employee.age, 61);
        assert_eq!(employee.profile_image, "");
    }

    #[test]
    fn test_non_numeric_salary_is_rejected() {
        let mut row = sample_row();
        row.salary = "a lot".to_string();

        let error = Employee::try_from(row).unwrap_err();
        match error {
            DirectoryError::MalformedEmployee { field, .. } => {
                assert_eq!(field, "employee_salary");
            }
            other => panic!("expected MalformedEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_age_is_rejected() {
        let mut row = sample_row();
        row.age = "old".to_string();

        let error = Employee::try_from(row).unwrap_err();
        match error {
            DirectoryError::MalformedEmployee { field, .. } => {
                assert_eq!(field, "employee_age");
            }
            other => panic!("expected MalformedEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_employee_serializes_back_to_wire_shape() {
        let employee = Employee::try_from(sample_row()).unwrap();
        let json = serde_json::to_value(EmployeeRow::from(&employee)).unwrap();

        assert_eq!(json["id"], "1");
        assert_eq!(json["employee_name"], "Tiger Nixon");
        assert_eq!(json["employee_salary"], "320800");
        assert_eq!(json["employee_age"], "61");
        assert_eq!(json["profile_image"], "");
    }

    #[test]
    fn test_wire_round_trip_preserves_fields() {
        let row = sample_row();
        let employee = Employee::try_from(row.clone()).unwrap();
        assert_eq!(EmployeeRow::from(&employee), row);
    }
}
