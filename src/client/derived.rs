//! Derived computations over a fetched employee collection.
//!
//! These are pure functions; the client wraps them after fetching the
//! list, and the benchmarks exercise them directly.

use crate::models::Employee;

/// Case-insensitive substring match of `query` against each employee name.
///
/// Matches keep the order of the source list. An empty query matches every
/// employee.
pub fn filter_by_name(employees: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.to_lowercase();
    employees
        .iter()
        .filter(|employee| employee.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// The maximum salary across all employees, or 0 for an empty collection.
pub fn highest_salary(employees: &[Employee]) -> i64 {
    employees
        .iter()
        .map(|employee| employee.salary)
        .max()
        .unwrap_or(0)
}

/// Names of the `limit` highest-paid employees, salary descending.
///
/// The sort is stable so ties keep their original list order and repeated
/// calls over the same snapshot are deterministic.
pub fn top_earning_names(employees: &[Employee], limit: usize) -> Vec<String> {
    let mut ranked: Vec<&Employee> = employees.iter().collect();
    ranked.sort_by(|a, b| b.salary.cmp(&a.salary));
    ranked
        .into_iter()
        .take(limit)
        .map(|employee| employee.name.clone())
        .collect()
}
