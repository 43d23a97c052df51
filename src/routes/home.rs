use crate::{
    app_state::AppState,
    dataset::Dataset,
    domain::{ChurnMetrics, Language, StatusChart},
    session::{Answer, TypedSession},
    translations::Translations,
    utils::UnexpectedError,
};
use askama_axum::Template;
use axum::{extract::State, routing::get, Router};
use axum_messages::{Level, Messages};

const PREVIEW_ROWS: usize = 5;

const CHART_WIDTH: u32 = 480;
const CHART_HEIGHT: u32 = 260;
const CHART_TOP: u32 = 20;
const CHART_BOTTOM: u32 = 40;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

#[tracing::instrument(name = "Render dashboard", skip_all)]
async fn dashboard(
    State(app_state): State<AppState>,
    session: TypedSession,
    messages: Messages,
) -> Result<DashboardTemplate, UnexpectedError> {
    let context = session.context().await?;
    let t = context.translations();

    let languages = Language::ALL
        .iter()
        .map(|language| LanguageOption {
            code: language.code(),
            name: t.language_name(*language),
            selected: *language == context.language,
        })
        .collect();

    let user_name = context.onboarding.user_name();
    let welcome = user_name.map(|name| Translations::with_name(t.welcome, name.as_ref()));
    let unlocked = !app_state.require_onboarding || user_name.is_some();

    Ok(DashboardTemplate {
        t,
        languages,
        flashes: messages.map(Flash::from).collect(),
        completion_enabled: app_state.completion_client.is_some(),
        show_start: user_name.is_none() && !context.onboarding.is_listening(),
        listening: context.onboarding.is_listening(),
        welcome,
        unlocked,
        data: context.dataset.as_ref().map(|dataset| DataView::new(dataset, t)),
        answer: context.answer,
    })
}

#[derive(Template)]
#[template(path = "web/dashboard.html")]
struct DashboardTemplate {
    t: &'static Translations,
    languages: Vec<LanguageOption>,
    flashes: Vec<Flash>,
    completion_enabled: bool,
    show_start: bool,
    listening: bool,
    welcome: Option<String>,
    unlocked: bool,
    data: Option<DataView>,
    answer: Option<Answer>,
}

struct LanguageOption {
    code: &'static str,
    name: &'static str,
    selected: bool,
}

struct Flash {
    class: &'static str,
    message: String,
}

impl From<axum_messages::Message> for Flash {
    fn from(message: axum_messages::Message) -> Self {
        let class = match message.level {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Success => "success",
            Level::Info | Level::Debug => "info",
        };

        Self {
            class,
            message: message.message,
        }
    }
}

struct DataView {
    columns: Vec<String>,
    preview: Vec<Vec<String>>,
    churn_rate: String,
    canceled: usize,
    total: usize,
    chart: ChartView,
}

impl DataView {
    fn new(dataset: &Dataset, t: &'static Translations) -> Self {
        let metrics = ChurnMetrics::compute(dataset);

        Self {
            columns: dataset.columns().to_vec(),
            preview: dataset
                .head(PREVIEW_ROWS)
                .map(|record| record.cells().iter().map(|cell| cell.to_string()).collect())
                .collect(),
            churn_rate: metrics.formatted_rate(),
            canceled: metrics.canceled(),
            total: metrics.total(),
            chart: ChartView::new(&StatusChart::build(dataset), t.status_chart),
        }
    }
}

/// Status chart laid out for inline SVG.
struct ChartView {
    title: &'static str,
    width: u32,
    height: u32,
    baseline: u32,
    bars: Vec<BarView>,
}

struct BarView {
    label: String,
    count: usize,
    color: &'static str,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    center: u32,
}

impl ChartView {
    fn new(chart: &StatusChart, title: &'static str) -> Self {
        let baseline = CHART_HEIGHT - CHART_BOTTOM;
        let plot_height = baseline - CHART_TOP;
        let max_count = chart.max_count().max(1) as f64;
        let slot = CHART_WIDTH / chart.bars().len().max(1) as u32;

        let bars = chart
            .bars()
            .iter()
            .enumerate()
            .map(|(position, bar)| {
                let height = (bar.count as f64 / max_count * plot_height as f64).round() as u32;
                let x = slot * position as u32 + slot / 5;
                BarView {
                    label: bar.label.clone(),
                    count: bar.count,
                    color: bar.color.as_str(),
                    x,
                    y: baseline - height,
                    width: slot * 3 / 5,
                    height,
                    center: x + slot * 3 / 10,
                }
            })
            .collect();

        Self {
            title,
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            baseline,
            bars,
        }
    }
}
