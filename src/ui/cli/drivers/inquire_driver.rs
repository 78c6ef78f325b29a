use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{Confirm, CustomType, CustomUserError, Select, Text, validator::Validation};
use std::fmt::Display;

pub struct InquireDriver;

fn within_bounds<T>(
    min: Option<T>,
    max: Option<T>,
) -> impl Fn(&T) -> Result<Validation, CustomUserError> + Clone + 'static
where
    T: PartialOrd + Display + Copy + 'static,
{
    move |x: &T| {
        let problem = match (min, max) {
            (Some(lo), Some(hi)) if *x < lo || *x > hi => {
                Some(format!("Must be between {lo} and {hi}"))
            }
            (Some(lo), None) if *x < lo => Some(format!("Must be ≥ {lo}")),
            (None, Some(hi)) if *x > hi => Some(format!("Must be ≤ {hi}")),
            _ => None,
        };
        Ok(problem.map_or(Validation::Valid, |msg| Validation::Invalid(msg.into())))
    }
}

fn finite(x: &f64) -> Result<Validation, CustomUserError> {
    if x.is_finite() {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid("Must be a finite number".into()))
    }
}

impl PromptDriver for InquireDriver {
    fn ask_select(&self, title: &str, help: Option<&str>, options: &[String]) -> Result<usize> {
        let mut select = Select::new(title, options.to_vec());
        if let Some(help) = help {
            select = select.with_help_message(help);
        }
        Ok(select.raw_prompt()?.index)
    }

    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        let mut q = CustomType::<u64>::new(title)
            .with_default(default)
            .with_help_message(help);
        if min.is_some() || max.is_some() {
            q = q.with_validator(within_bounds(min, max));
        }
        Ok(q.prompt()?)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        let mut q = CustomType::<f64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_validator(finite);
        if min.is_some() || max.is_some() {
            q = q.with_validator(within_bounds(min, max));
        }
        Ok(q.prompt()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid(v: Validation) -> bool {
        matches!(v, Validation::Valid)
    }

    #[test]
    fn bounds_are_inclusive() {
        let check = within_bounds(Some(1u64), Some(10u64));
        assert!(is_valid(check(&1).unwrap()));
        assert!(is_valid(check(&10).unwrap()));
        assert!(!is_valid(check(&0).unwrap()));
        assert!(!is_valid(check(&11).unwrap()));
    }

    #[test]
    fn one_sided_bounds() {
        let lower = within_bounds(Some(0.5), None);
        assert!(is_valid(lower(&0.5).unwrap()));
        assert!(!is_valid(lower(&0.25).unwrap()));

        let upper = within_bounds(None, Some(2.0));
        assert!(is_valid(upper(&-100.0).unwrap()));
        assert!(!is_valid(upper(&2.5).unwrap()));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        assert!(is_valid(finite(&1e300).unwrap()));
        assert!(!is_valid(finite(&f64::NAN).unwrap()));
        assert!(!is_valid(finite(&f64::NEG_INFINITY).unwrap()));
    }
}
