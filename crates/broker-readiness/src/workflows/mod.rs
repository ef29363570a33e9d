pub mod form_export;
pub mod onboarding;
