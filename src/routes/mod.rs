pub mod dataset;
pub mod health_check;
pub mod home;
pub mod language;
pub mod onboarding;
pub mod question;
