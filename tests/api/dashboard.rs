use crate::helpers::{assert_is_redirect_to, ten_subscriptions, TestApp};

#[tokio::test]
async fn a_new_session_sees_the_spanish_dashboard() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.get_dashboard().await;

    // then
    assert_eq!(response.status(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains("Cerberu - Agente IA de Suscripciones"));
    assert!(html.contains("Carga el archivo Excel con suscripciones"));
    assert!(html.contains("Di tu nombre para iniciar"));
    assert!(!html.contains("Churn Rate"));
}

#[tokio::test]
async fn the_language_can_be_switched_to_english() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.post_language("en").await;

    // then
    assert_is_redirect_to(&response, "/");
    let html = app.get_dashboard_html().await;
    assert!(html.contains("Cerberu - Subscription AI Agent"));
    assert!(html.contains("Upload the Excel file with subscriptions"));
}

#[tokio::test]
async fn unknown_languages_are_rejected() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.post_language("fr").await;

    // then
    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn a_missing_api_key_is_shown_as_a_warning() {
    // given
    let app = TestApp::spawn_with(|config| config.completion_client.api_key = None).await;

    // when
    let html = app.get_dashboard_html().await;

    // then
    assert!(html.contains(
        "Error: La clave API de OpenAI no está configurada en las variables de entorno."
    ));
}

#[tokio::test]
async fn sessions_do_not_share_their_datasets() {
    // given
    let mut app = TestApp::spawn().await;
    app.post_dataset(ten_subscriptions()).await;
    assert!(app.get_dashboard_html().await.contains("40.00%"));

    // when
    app.switch_session();

    // then
    let html = app.get_dashboard_html().await;
    assert!(!html.contains("40.00%"));
    assert!(!html.contains("Churn Rate"));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.get_dashboard().await;

    // then
    assert!(response.headers().get("x-request-id").is_some());
}

#[tokio::test]
async fn session_cookies_expire_after_the_configured_inactivity() {
    // given
    let app = TestApp::spawn_with(|config| config.application.session_idle_minutes = 5).await;

    // when
    let response = app.post_language("en").await;

    // then
    let cookie = response
        .headers()
        .get("Set-Cookie")
        .expect("Missing session cookie")
        .to_str()
        .unwrap();
    assert!(cookie.contains("Max-Age=300"), "unexpected cookie: {cookie}");
}
