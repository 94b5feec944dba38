//! Reusable form validators.

use crate::ui::widgets::form::{FieldValues, ValidationReport, Validator};
use regex::Regex;

/// Rejects the form if any field is empty, one error per empty field
pub struct NonEmpty;

/// Require every field to be filled in
pub fn non_empty() -> NonEmpty {
    NonEmpty
}

impl Validator for NonEmpty {
    fn validate(&mut self, values: &FieldValues<'_>, report: &mut ValidationReport) -> bool {
        let mut valid = true;
        for (label, value) in values.iter() {
            if value.is_empty() {
                report.field_error(label, "cannot be empty.");
                valid = false;
            }
        }
        valid
    }
}

/// Rejects the form if one field does not match a pattern
pub struct Pattern {
    index: usize,
    regex: Regex,
    message: String,
}

/// Require the field at `index` to match `pattern`; empty values are left
/// to `non_empty`
pub fn matches(
    index: usize,
    pattern: &str,
    message: impl Into<String>,
) -> Result<Pattern, regex::Error> {
    Ok(Pattern {
        index,
        regex: Regex::new(pattern)?,
        message: message.into(),
    })
}

impl Validator for Pattern {
    fn validate(&mut self, values: &FieldValues<'_>, report: &mut ValidationReport) -> bool {
        match values.get(self.index) {
            Some(value) if !value.is_empty() && !self.regex.is_match(value) => {
                report.error(self.message.clone());
                false
            }
            _ => true,
        }
    }
}

/// Runs every validator, collecting all of their errors
pub struct All {
    validators: Vec<Box<dyn Validator>>,
}

/// Accept only if every validator accepts
pub fn all(validators: Vec<Box<dyn Validator>>) -> All {
    All { validators }
}

impl Validator for All {
    fn validate(&mut self, values: &FieldValues<'_>, report: &mut ValidationReport) -> bool {
        self.validators
            .iter_mut()
            .fold(true, |valid, v| v.validate(values, report) && valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Field;

    fn filled(values: &[(&str, &str)]) -> Vec<Field> {
        values
            .iter()
            .map(|(label, value)| Field::single(*label).with_default(*value))
            .collect()
    }

    #[test]
    fn test_non_empty_reports_each_field() {
        let fields = filled(&[("Username", ""), ("Email", "a@b.c"), ("Password", "")]);
        let mut report = ValidationReport::new();
        assert!(!non_empty().validate(&FieldValues::new(&fields), &mut report));
        assert_eq!(
            report.messages(),
            [
                "'Username' cannot be empty.".to_string(),
                "'Password' cannot be empty.".to_string(),
            ]
        );
    }

    #[test]
    fn test_pattern_skips_empty_values() {
        let fields = filled(&[("Date of Birth (YYYY-MM-DD)", "")]);
        let mut pattern = matches(0, r"^\d{4}-\d{2}-\d{2}$", "Date must be YYYY-MM-DD.").unwrap();
        let mut report = ValidationReport::new();
        assert!(pattern.validate(&FieldValues::new(&fields), &mut report));
        assert!(report.is_empty());

        let fields = filled(&[("Date of Birth (YYYY-MM-DD)", "1990-1-2")]);
        assert!(!pattern.validate(&FieldValues::new(&fields), &mut report));
        assert_eq!(report.messages(), ["Date must be YYYY-MM-DD.".to_string()]);
    }

    #[test]
    fn test_all_collects_every_error() {
        let fields = filled(&[("Username", ""), ("Email", "not-an-email")]);
        let mut validator = all(vec![
            Box::new(non_empty()),
            Box::new(matches(1, r"^[^@\s]+@[^@\s]+$", "Email is not valid.").unwrap()),
        ]);
        let mut report = ValidationReport::new();
        assert!(!validator.validate(&FieldValues::new(&fields), &mut report));
        assert_eq!(report.messages().len(), 2);
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        assert!(matches(0, "(", "unbalanced").is_err());
    }
}
