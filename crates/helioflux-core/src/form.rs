/// Outcome of checking a form's required fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequiredCheck {
    /// Per field, in the order given: true when the field is blank.
    pub blank: Vec<bool>,
}

impl RequiredCheck {
    pub fn is_valid(&self) -> bool {
        !self.blank.iter().any(|b| *b)
    }
}

/// A required field counts as missing when only whitespace was entered.
pub fn check_required<'a>(values: impl IntoIterator<Item = &'a str>) -> RequiredCheck {
    RequiredCheck {
        blank: values.into_iter().map(|v| v.trim().is_empty()).collect(),
    }
}
