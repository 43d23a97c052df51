//! User-facing text, one table per [`Language`].
//!
//! Strings containing `{name}` are filled in with [`Translations::with_name`].

use crate::{dataset::LoadError, domain::Language};

pub struct Translations {
    pub title: &'static str,
    pub select_language: &'static str,
    pub change_language: &'static str,
    pub spanish: &'static str,
    pub english: &'static str,
    pub upload_excel: &'static str,
    pub upload_button: &'static str,
    pub data_preview: &'static str,
    pub churn_rate: &'static str,
    pub canceled: &'static str,
    pub total_subscriptions: &'static str,
    pub status_chart: &'static str,
    pub ask_question: &'static str,
    pub ask_button: &'static str,
    pub ai_answer: &'static str,
    pub developed_by: &'static str,
    pub db_error: &'static str,
    pub load_error: &'static str,
    pub no_dataset: &'static str,
    pub missing_api_key: &'static str,
    pub completion_error: &'static str,
    pub completion_failed: &'static str,
    pub not_a_spreadsheet: &'static str,
    pub no_worksheet: &'static str,
    pub missing_column: &'static str,
    pub registration_skipped: &'static str,
    pub onboarding_required: &'static str,
    pub start_onboarding: &'static str,
    pub listening_prompt: &'static str,
    pub send_voice: &'static str,
    pub name_not_understood: &'static str,
    pub greeting: &'static str,
    pub welcome: &'static str,
    pub attentive: &'static str,
    pub spoken_attentive: &'static str,
    pub prompt_preamble: &'static str,
    pub prompt_question: &'static str,
    pub system_prompt: &'static str,
}

static SPANISH: Translations = Translations {
    title: "Cerberu - Agente IA de Suscripciones",
    select_language: "Selecciona el idioma / Select language",
    change_language: "Cambiar",
    spanish: "Español",
    english: "Inglés",
    upload_excel: "Carga el archivo Excel con suscripciones",
    upload_button: "Cargar",
    data_preview: "Vista previa de datos",
    churn_rate: "Churn Rate",
    canceled: "Cancelados",
    total_subscriptions: "Total de suscripciones",
    status_chart: "Gráfico de estado",
    ask_question: "Haz una pregunta sobre los datos",
    ask_button: "Preguntar",
    ai_answer: "Respuesta IA:",
    developed_by: "Desarrollado por Adolfo,D,S",
    db_error: "No se pudo conectar a la base de datos:",
    load_error: "No se pudo leer el archivo:",
    no_dataset: "Primero carga un archivo Excel con suscripciones.",
    missing_api_key:
        "Error: La clave API de OpenAI no está configurada en las variables de entorno.",
    completion_error: "No se pudo obtener una respuesta:",
    completion_failed: "el servicio de IA no devolvió una respuesta válida.",
    not_a_spreadsheet: "no es un libro de Excel (.xlsx) válido.",
    no_worksheet: "el libro no tiene hojas.",
    missing_column: "falta la columna obligatoria {column}.",
    registration_skipped: "tu nombre no quedó registrado, pero puedes seguir usando el panel.",
    onboarding_required: "Di tu nombre para acceder al panel.",
    start_onboarding: "🎤 Di tu nombre para iniciar",
    listening_prompt: "🎤 Di tu nombre para que Cerberu lo aprenda...",
    send_voice: "Enviar audio",
    name_not_understood: "No entendí tu nombre. Intenta de nuevo.",
    greeting: "Hola {name}, encantado de conocerte.",
    welcome: "Bienvenido {name}, ¿en qué puedo ayudarte hoy?",
    attentive: "¡Hola {name}, estoy atento a tu pregunta!",
    spoken_attentive: "Hola {name}, dime",
    prompt_preamble: "Eres un analista de datos. Aquí tienes datos de suscripciones:",
    prompt_question: "Responde la siguiente pregunta basada en los datos: ",
    system_prompt: "Eres un experto en análisis de datos.",
};

static ENGLISH: Translations = Translations {
    title: "Cerberu - Subscription AI Agent",
    select_language: "Select language / Seleccione idioma",
    change_language: "Change",
    spanish: "Spanish",
    english: "English",
    upload_excel: "Upload the Excel file with subscriptions",
    upload_button: "Upload",
    data_preview: "Data preview",
    churn_rate: "Churn Rate",
    canceled: "Canceled",
    total_subscriptions: "Total subscriptions",
    status_chart: "Status Chart",
    ask_question: "Ask a question about the data",
    ask_button: "Ask",
    ai_answer: "AI Answer:",
    developed_by: "Developed by Adolfo,D,S",
    db_error: "Could not connect to the database:",
    load_error: "Could not read the file:",
    no_dataset: "Upload an Excel file with subscriptions first.",
    missing_api_key: "Error: The OpenAI API key is not configured in the environment variables.",
    completion_error: "Could not get an answer:",
    completion_failed: "the AI service did not return a valid answer.",
    not_a_spreadsheet: "it is not a valid Excel (.xlsx) workbook.",
    no_worksheet: "the workbook has no sheets.",
    missing_column: "the required column {column} is missing.",
    registration_skipped: "your name was not saved, but you can keep using the dashboard.",
    onboarding_required: "Say your name to access the dashboard.",
    start_onboarding: "🎤 Say your name to start",
    listening_prompt: "🎤 Say your name so Cerberu can learn it...",
    send_voice: "Send audio",
    name_not_understood: "I did not understand your name. Please try again.",
    greeting: "Hello {name}, nice to meet you.",
    welcome: "Welcome {name}, how can I help you today?",
    attentive: "Hi {name}, I'm listening to your question!",
    spoken_attentive: "Hi {name}, tell me",
    prompt_preamble: "You are a data analyst. Here is some subscription data:",
    prompt_question: "Answer the following question based on the data: ",
    system_prompt: "You are a data analysis expert.",
};

impl Translations {
    pub fn for_language(language: Language) -> &'static Translations {
        match language {
            Language::Es => &SPANISH,
            Language::En => &ENGLISH,
        }
    }

    pub fn language_name(&self, language: Language) -> &'static str {
        match language {
            Language::Es => self.spanish,
            Language::En => self.english,
        }
    }

    pub fn with_name(text: &str, name: &str) -> String {
        text.replace("{name}", name)
    }

    /// Why an upload was rejected, in this table's language.
    pub fn describe_load_error(&self, error: &LoadError) -> String {
        match error {
            LoadError::Spreadsheet(_) => self.not_a_spreadsheet.to_string(),
            LoadError::NoWorksheet => self.no_worksheet.to_string(),
            LoadError::MissingColumn(column) => self.missing_column.replace("{column}", column),
        }
    }
}
