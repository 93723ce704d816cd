//! Visitor session: form draft, field errors, submitted settings, and the
//! subscribe flag.
//!
//! DESIGN
//! ======
//! Plain data held in an `RwSignal` by the page. Generation lists live in a
//! separate `GenerationState` signal so list renderers do not re-run when
//! the visitor types in the form.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use timeline::{Feature, FormErrors, ProjectType, Settings, SettingsDraft, Theme, validate_email};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub draft: SettingsDraft,
    pub errors: FormErrors,
    /// Set once on a successful submit. `None` until then.
    pub settings: Option<Settings>,
    pub submitting: bool,
    pub email_submitted: bool,
}

impl SessionState {
    pub fn set_project_name(&mut self, name: String) {
        self.draft.project_name = name;
        self.errors.project_name = None;
    }

    pub fn set_project_type(&mut self, project_type: ProjectType) {
        self.draft.project_type = project_type;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.draft.theme = theme;
    }

    pub fn toggle_feature(&mut self, feature: Feature) {
        self.draft.toggle_feature(feature);
        self.errors.features = None;
    }

    /// Validate the draft. On success stores the settings, enters the busy
    /// state, and returns the record to hand to the driver. Returns `None`
    /// while a submit is already in flight or when validation fails.
    pub fn begin_submit(&mut self) -> Option<Settings> {
        if self.submitting {
            return None;
        }
        match self.draft.submit() {
            Ok(settings) => {
                self.errors = FormErrors::default();
                self.settings = Some(settings.clone());
                self.submitting = true;
                Some(settings)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Record a subscribe address on the settings.
    ///
    /// # Errors
    ///
    /// Returns the inline message when the address is malformed.
    pub fn submit_email(&mut self, raw: &str) -> Result<(), &'static str> {
        let email = validate_email(raw)?;
        if let Some(settings) = self.settings.as_mut() {
            settings.email = Some(email);
        }
        self.email_submitted = true;
        Ok(())
    }

    /// Settings for display: the submitted record, or the draft's current
    /// values before any submit.
    #[must_use]
    pub fn effective_settings(&self) -> Settings {
        self.settings.clone().unwrap_or_else(|| Settings {
            project_name: self.draft.project_name.clone(),
            project_type: self.draft.project_type,
            features: self.draft.features.clone(),
            theme: self.draft.theme,
            email: None,
        })
    }
}
