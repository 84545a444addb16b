//! User-facing message tables for the supported languages.
//!
//! Static lookup keyed by [`Language`]; the backend's advice text itself
//! arrives already localized, so only the chrome around it lives here.

use compass_types::language::Language;

/// Localized UI strings.
pub struct Messages {
    pub ask_prompt: &'static str,
    pub results_loading: &'static str,
    /// Inline message for empty input.
    pub error_default: &'static str,
    /// Generic message for a failed advice call.
    pub error_api: &'static str,
    pub complex_case_title: &'static str,
    pub complex_case_body: &'static str,
    pub complex_case_contact: &'static str,
    pub sources_title: &'static str,
    pub banner_empty: &'static str,
    pub admin_login_title: &'static str,
    pub admin_username_label: &'static str,
    pub admin_password_label: &'static str,
    pub admin_login_error: &'static str,
    pub admin_welcome: &'static str,
    pub admin_total_submissions: &'static str,
    pub admin_no_ads: &'static str,
    pub admin_logged_out: &'static str,
}

static EN: Messages = Messages {
    ask_prompt: "Tell me about your situation",
    results_loading: "Thinking about your situation...",
    error_default: "Please describe your situation first.",
    error_api: "Something went wrong while getting your advice. Please try again.",
    complex_case_title: "Your case deserves personal attention",
    complex_case_body: "What you describe sounds like a complex situation, and a short \
                        automated answer would not do it justice.",
    complex_case_contact: "Please reach out to our team directly at:",
    sources_title: "Sources",
    banner_empty: "No ads to show.",
    admin_login_title: "Admin Login",
    admin_username_label: "Username",
    admin_password_label: "Password",
    admin_login_error: "Invalid username or password.",
    admin_welcome: "Admin dashboard -- type 'help' for commands",
    admin_total_submissions: "Total submissions",
    admin_no_ads: "No ads yet.",
    admin_logged_out: "Logged out.",
};

static ES: Messages = Messages {
    ask_prompt: "Cuéntame tu situación",
    results_loading: "Pensando en tu situación...",
    error_default: "Primero describe tu situación, por favor.",
    error_api: "Algo salió mal al obtener tu consejo. Inténtalo de nuevo.",
    complex_case_title: "Tu caso merece atención personal",
    complex_case_body: "Lo que describes suena como una situación compleja, y una respuesta \
                        automática corta no le haría justicia.",
    complex_case_contact: "Escríbenos directamente a:",
    sources_title: "Fuentes",
    banner_empty: "No hay anuncios que mostrar.",
    admin_login_title: "Acceso de administrador",
    admin_username_label: "Usuario",
    admin_password_label: "Contraseña",
    admin_login_error: "Usuario o contraseña incorrectos.",
    admin_welcome: "Panel de administración -- escribe 'help' para ver los comandos",
    admin_total_submissions: "Envíos totales",
    admin_no_ads: "Aún no hay anuncios.",
    admin_logged_out: "Sesión cerrada.",
};

/// The message table for a language.
pub fn messages(language: Language) -> &'static Messages {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
    }
}
