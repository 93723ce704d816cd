//! Form draft editing and submission validation.
//!
//! The draft is freely editable; `submit` is the only way to obtain a
//! [`Settings`] record, so an invalid draft can never reach the driver.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::{Feature, ProjectType, Settings, Theme};

pub const NAME_REQUIRED: &str = "Project name is required";
pub const FEATURES_REQUIRED: &str = "Select at least one feature";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Field-level validation messages. `None` means the field is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
    pub project_name: Option<&'static str>,
    pub features: Option<&'static str>,
}

impl FormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.project_name.is_none() && self.features.is_none()
    }
}

/// Editable form contents before submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsDraft {
    pub project_name: String,
    pub project_type: ProjectType,
    pub features: Vec<Feature>,
    pub theme: Theme,
}

impl Default for SettingsDraft {
    fn default() -> Self {
        Self {
            project_name: "React Dashboard".to_owned(),
            project_type: ProjectType::Dashboard,
            features: vec![Feature::Auth, Feature::Api, Feature::DarkMode, Feature::Responsive],
            theme: Theme::Modern,
        }
    }
}

impl SettingsDraft {
    /// Add `feature` at the end if absent, remove it if present.
    pub fn toggle_feature(&mut self, feature: Feature) {
        if let Some(pos) = self.features.iter().position(|f| *f == feature) {
            self.features.remove(pos);
        } else {
            self.features.push(feature);
        }
    }

    #[must_use]
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// Validate the draft and produce a settings record.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once so the form can mark all of them.
    pub fn submit(&self) -> Result<Settings, FormErrors> {
        let mut errors = FormErrors::default();
        let name = self.project_name.trim();
        if name.is_empty() {
            errors.project_name = Some(NAME_REQUIRED);
        }
        if self.features.is_empty() {
            errors.features = Some(FEATURES_REQUIRED);
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Settings {
            project_name: self.project_name.clone(),
            project_type: self.project_type,
            features: self.features.clone(),
            theme: self.theme,
            email: None,
        })
    }
}

/// Check an address against the subscribe form's pattern.
///
/// # Errors
///
/// Returns [`EMAIL_INVALID`] when the address does not look like `x@y.z`.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    if EMAIL_RE.is_match(raw) {
        Ok(raw.to_owned())
    } else {
        Err(EMAIL_INVALID)
    }
}
