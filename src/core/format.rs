//! Cell formatting rules shared by every projector.
//!
//! All cells are plain strings; a missing value always renders as the
//! empty string rather than a zero or a literal "null".

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// `1234.5` → `"$1,234.50"`, `-42.1` → `"-$42.10"`, `None` → `""`.
pub fn currency(amount: Option<f64>) -> String {
    let Some(amount) = amount else {
        return String::new();
    };

    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let fraction = cents % 100;

    if amount < 0.0 {
        format!("-${}.{:02}", whole, fraction)
    } else {
        format!("${}.{:02}", whole, fraction)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Short date form: `2024-01-05` → `"1/5/2024"`.
pub fn short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Month-day stamp used for payment status updates: `"11-06"`.
pub fn month_day(timestamp: &DateTime<Utc>) -> String {
    format!("{:02}-{:02}", timestamp.month(), timestamp.day())
}

/// Joins a multi-valued field into one cell: `"a, b, c"`.
pub fn join_comma<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    items.into_iter().collect::<Vec<_>>().join(", ")
}

/// Category lists use the upstream hierarchical encoding:
/// `["Food", "Restaurants"]` → `"Food:Restaurants"`; nothing → `""`.
pub fn join_categories(categories: Option<&[String]>) -> String {
    categories.map(|c| c.join(":")).unwrap_or_default()
}

/// Security quantities render with three decimals.
pub fn quantity(value: f64) -> String {
    format!("{:.3}", value)
}

/// Whole-number rendering for counts and day spans.
pub fn whole_number(value: f64) -> String {
    format!("{:.0}", value)
}
