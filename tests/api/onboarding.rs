use crate::helpers::{
    assert_is_redirect_to, audio, ten_subscriptions, transcript, TestApp,
};
use uuid::Uuid;
use wiremock::{
    matchers::{any, method, path, query_param},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn starting_onboarding_asks_for_the_name() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.post_onboarding_start().await;

    // then
    assert_is_redirect_to(&response, "/");
    let html = app.get_dashboard_html().await;
    assert!(html.contains("Di tu nombre para que Cerberu lo aprenda..."));
    assert!(html.contains(r#"action="/onboarding/voice""#));
    assert!(!html.contains("Di tu nombre para iniciar"));
}

#[tokio::test]
async fn unrecognized_audio_returns_to_the_start() {
    // given
    let app = TestApp::spawn().await;
    app.post_onboarding_start().await;

    Mock::given(method("POST"))
        .and(path("/recognize"))
        .and(query_param("language", "es-ES"))
        .respond_with(ResponseTemplate::new(200).set_body_json(transcript(None)))
        .expect(1)
        .mount(&app.speech_server)
        .await;

    // when
    let response = app.post_onboarding_voice(audio()).await;

    // then
    assert_is_redirect_to(&response, "/");
    let html = app.get_dashboard_html().await;
    assert!(html.contains("No entendí tu nombre. Intenta de nuevo."));
    assert!(html.contains("Di tu nombre para iniciar"));
    // no registration is attempted, so the unreachable database goes unnoticed
    assert!(!html.contains("No se pudo conectar a la base de datos:"));
}

#[tokio::test]
async fn speech_service_failures_return_to_the_start() {
    // given
    let app = TestApp::spawn().await;
    app.post_onboarding_start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&app.speech_server)
        .await;

    // when
    app.post_onboarding_voice(audio()).await;

    // then
    let html = app.get_dashboard_html().await;
    assert!(html.contains("No entendí tu nombre. Intenta de nuevo."));
    assert!(html.contains("Di tu nombre para iniciar"));
}

#[tokio::test]
async fn voice_is_ignored_unless_listening() {
    // given
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(transcript(Some("Adolfo"))))
        .expect(0)
        .mount(&app.speech_server)
        .await;

    // when
    let response = app.post_onboarding_voice(audio()).await;

    // then
    assert_is_redirect_to(&response, "/");
    let html = app.get_dashboard_html().await;
    assert!(html.contains("Di tu nombre para iniciar"));
}

#[tokio::test]
async fn a_recognized_name_onboards_even_without_a_database() {
    // given
    let app = TestApp::spawn().await;

    // when
    app.onboard("Adolfo").await;

    // then
    let html = app.get_dashboard_html().await;
    assert!(html.contains("Hola Adolfo, encantado de conocerte."));
    assert!(html.contains("Bienvenido Adolfo, ¿en qué puedo ayudarte hoy?"));
    assert!(html.contains(
        "No se pudo conectar a la base de datos: tu nombre no quedó registrado"
    ));
    assert!(!html.contains("Failed to"));
    assert!(!html.contains("Di tu nombre para iniciar"));
}

#[tokio::test]
async fn onboarding_greets_and_welcomes_out_loud() {
    // given
    let dir = std::env::temp_dir().join(Uuid::new_v4().to_string());
    std::fs::create_dir_all(&dir).expect("Failed to create speech directory");
    let script = dir.join("speak.sh");
    let spoken = dir.join("spoken.txt");
    std::fs::write(&script, format!("echo \"$1\" >> {}\n", spoken.display()))
        .expect("Failed to write speech script");
    let command = format!("sh {}", script.display());
    let app = TestApp::spawn_with(move |config| config.speech.speaker_command = Some(command)).await;

    // when
    app.onboard("Adolfo").await;

    // then
    let spoken = std::fs::read_to_string(spoken).expect("Nothing was spoken");
    assert_eq!(
        spoken.lines().collect::<Vec<_>>(),
        vec![
            "Hola Adolfo, encantado de conocerte.",
            "Bienvenido Adolfo, ¿en qué puedo ayudarte hoy?",
        ]
    );
}

#[tokio::test]
async fn english_sessions_are_recognized_in_english() {
    // given
    let app = TestApp::spawn().await;
    app.post_language("en").await;
    app.post_onboarding_start().await;

    Mock::given(query_param("language", "en-US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(transcript(Some("Ada"))))
        .expect(1)
        .mount(&app.speech_server)
        .await;

    // when
    app.post_onboarding_voice(audio()).await;

    // then
    let html = app.get_dashboard_html().await;
    assert!(html.contains("Welcome Ada, how can I help you today?"));
}

#[tokio::test]
async fn onboarding_is_terminal() {
    // given
    let app = TestApp::spawn().await;
    app.onboard("Adolfo").await;

    // when
    let response = app.post_onboarding_start().await;

    // then
    assert_is_redirect_to(&response, "/");
    let html = app.get_dashboard_html().await;
    assert!(html.contains("Bienvenido Adolfo"));
    assert!(!html.contains("Di tu nombre para que Cerberu lo aprenda..."));
}

#[tokio::test]
async fn onboarding_unlocks_the_dashboard_when_required() {
    // given
    let app = TestApp::spawn_with(|config| config.application.require_onboarding = true).await;
    app.onboard("Adolfo").await;

    // when
    let response = app.post_dataset(ten_subscriptions()).await;

    // then
    assert_is_redirect_to(&response, "/");
    let html = app.get_dashboard_html().await;
    assert!(html.contains("<p>40.00%</p>"));
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn onboarding_registers_the_user() {
    // given
    let app = TestApp::spawn_with_database().await;

    // when
    app.onboard("Adolfo").await;

    // then
    let html = app.get_dashboard_html().await;
    assert!(!html.contains("No se pudo conectar a la base de datos:"));
    let (usuario_id, nombre, email): (String, String, Option<String>) =
        sqlx::query_as("SELECT usuario_id, nombre, email FROM usuarios")
            .fetch_one(&app.db_pool)
            .await
            .expect("Failed to fetch registered user");
    assert_eq!(usuario_id, "adolfo");
    assert_eq!(nombre, "Adolfo");
    assert_eq!(email, None);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn registering_the_same_name_twice_keeps_the_first_row() {
    // given
    let mut app = TestApp::spawn_with_database().await;
    app.onboard("Adolfo").await;

    // when
    app.switch_session();
    app.onboard("ADOLFO").await;

    // then
    let rows: Vec<(String, String)> = sqlx::query_as("SELECT usuario_id, nombre FROM usuarios")
        .fetch_all(&app.db_pool)
        .await
        .expect("Failed to fetch registered users");
    assert_eq!(rows, vec![("adolfo".to_string(), "Adolfo".to_string())]);
}
