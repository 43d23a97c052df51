use crate::helpers::{
    assert_is_redirect_to, subscriptions_workbook, ten_subscriptions, TestApp,
};

#[tokio::test]
async fn uploading_a_workbook_shows_churn_metrics() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.post_dataset(ten_subscriptions()).await;

    // then
    assert_is_redirect_to(&response, "/");
    let html = app.get_dashboard_html().await;
    assert!(html.contains("Churn Rate"));
    assert!(html.contains("<p>40.00%</p>"));
    assert!(html.contains("<p>4</p>"));
    assert!(html.contains("<p>10</p>"));
}

#[tokio::test]
async fn the_status_chart_has_one_bar_per_status() {
    // given
    let app = TestApp::spawn().await;

    // when
    app.post_dataset(ten_subscriptions()).await;

    // then
    let html = app.get_dashboard_html().await;
    assert!(html.contains("Gráfico de estado"));
    assert!(html.contains("<title>activo: 6</title>"));
    assert!(html.contains("<title>cancelado: 4</title>"));
    assert!(html.contains(r#"fill="green""#));
    assert!(html.contains(r#"fill="red""#));
    assert!(!html.contains(r#"fill="blue""#));
}

#[tokio::test]
async fn the_preview_shows_the_first_five_rows() {
    // given
    let app = TestApp::spawn().await;
    let statuses = vec!["activo"; 8];

    // when
    app.post_dataset(subscriptions_workbook(&statuses)).await;

    // then
    let html = app.get_dashboard_html().await;
    assert_eq!(html.matches("<td>plan-").count(), 5);
    assert!(html.contains("<td>2024-01-15 00:00:00</td>"));
}

#[tokio::test]
async fn an_empty_workbook_has_zero_churn() {
    // given
    let app = TestApp::spawn().await;

    // when
    app.post_dataset(subscriptions_workbook(&[])).await;

    // then
    let html = app.get_dashboard_html().await;
    assert!(html.contains("<p>0.00%</p>"));
    assert!(html.contains("<p>0</p>"));
}

#[tokio::test]
async fn files_that_are_not_workbooks_are_rejected_with_a_message() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.post_dataset(b"estado;fecha_inicio".to_vec()).await;

    // then
    assert_is_redirect_to(&response, "/");
    let html = app.get_dashboard_html().await;
    assert!(html.contains(
        "No se pudo leer el archivo: no es un libro de Excel (.xlsx) válido."
    ));
    assert!(!html.contains("readable spreadsheet"));
    assert!(!html.contains("Churn Rate"));
}

#[tokio::test]
async fn workbooks_missing_columns_are_rejected_with_a_message() {
    // given
    let app = TestApp::spawn().await;
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "estado").unwrap();
    worksheet.write_string(0, 1, "fecha_inicio").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    // when
    app.post_dataset(bytes).await;

    // then
    let html = app.get_dashboard_html().await;
    assert!(html.contains(
        "No se pudo leer el archivo: falta la columna obligatoria fecha_cancelacion."
    ));
    assert!(!html.contains("Churn Rate"));
}

#[tokio::test]
async fn a_failed_upload_keeps_the_previous_dataset() {
    // given
    let app = TestApp::spawn().await;
    app.post_dataset(ten_subscriptions()).await;

    // when
    app.post_dataset(b"not a workbook".to_vec()).await;

    // then
    let html = app.get_dashboard_html().await;
    assert!(html.contains("<p>40.00%</p>"));
}

#[tokio::test]
async fn uploads_require_onboarding_when_configured() {
    // given
    let app = TestApp::spawn_with(|config| config.application.require_onboarding = true).await;

    // when
    let response = app.post_dataset(ten_subscriptions()).await;

    // then
    assert_is_redirect_to(&response, "/");
    let html = app.get_dashboard_html().await;
    assert!(html.contains("Di tu nombre para acceder al panel."));
    assert!(!html.contains("40.00%"));
}

#[tokio::test]
async fn upload_errors_follow_the_session_language() {
    // given
    let app = TestApp::spawn().await;
    app.post_language("en").await;

    // when
    app.post_dataset(b"not a workbook".to_vec()).await;

    // then
    let html = app.get_dashboard_html().await;
    assert!(html.contains("Could not read the file: it is not a valid Excel (.xlsx) workbook."));
}
