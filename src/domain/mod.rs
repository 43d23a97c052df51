mod churn_metrics;
mod language;
mod new_user;
mod onboarding_state;
mod question_prompt;
mod status_chart;
mod user_name;

pub use churn_metrics::ChurnMetrics;
pub use language::Language;
pub use new_user::NewUser;
pub use onboarding_state::OnboardingState;
pub use question_prompt::{QuestionPrompt, CONTEXT_ROWS};
pub use status_chart::{BarColor, StatusBar, StatusChart};
pub use user_name::UserName;
