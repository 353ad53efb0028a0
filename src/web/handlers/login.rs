//! Login page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::error::AppError;

/// Owner sign-in screen.
///
/// Renders `templates/login.html`: a centered card with the brand line,
/// an email field, a masked password field, a "Sign in" control and a
/// disclosure that authentication is not connected.
///
/// The screen is stateless. Its inputs are never read and the submit
/// control carries no behaviour, so every render yields the same markup.
#[derive(Debug, Default, Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginScreen {}

/// Renders the login screen to a complete HTML document.
///
/// Used by the `render` CLI command to export a static copy of the page.
///
/// # Errors
///
/// Returns [`AppError::Render`] if the template fails to render.
pub fn render_login_screen() -> Result<String, AppError> {
    Ok(LoginScreen::default().render()?)
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
///
/// # Template
///
/// Uses `templates/login.html` for server-side rendering.
pub async fn login_handler() -> impl IntoResponse {
    LoginScreen::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> String {
        render_login_screen().unwrap()
    }

    #[test]
    fn test_has_one_email_and_one_password_input() {
        let html = render();

        assert_eq!(html.matches(r#"type="email""#).count(), 1);
        assert_eq!(html.matches(r#"type="password""#).count(), 1);
        assert_eq!(html.matches("<input").count(), 2);
    }

    #[test]
    fn test_labels_are_linked_to_inputs() {
        let html = render();

        assert!(html.contains(r#"for="email">Email</label>"#));
        assert!(html.contains(r#"for="password">Password</label>"#));
        assert!(html.contains(r#"id="email""#));
        assert!(html.contains(r#"id="password""#));
    }

    #[test]
    fn test_placeholders() {
        let html = render();

        assert!(html.contains(r#"placeholder="you@example.com""#));
        assert!(html.contains(r#"placeholder="••••••••""#));
    }

    #[test]
    fn test_submit_control_text() {
        let html = render();

        assert_eq!(html.matches("<button").count(), 1);
        assert!(html.contains(">Sign in</button>"));
    }

    #[test]
    fn test_submit_control_is_inert() {
        let html = render();

        assert!(html.contains(r#"<button type="button""#));
        assert!(!html.contains("<form"));
        assert!(!html.contains("onclick"));
        assert!(!html.contains("formaction"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_branding_and_disclosure() {
        let html = render();

        assert!(html.contains("CoreBox Systems"));
        assert!(html.contains("Sign in to your account"));
        assert!(html.contains("Owner access for Mindfull Learning."));
        assert!(
            html.contains("This is a demo login screen. Authentication is not yet connected.")
        );
    }

    #[test]
    fn test_rerender_is_byte_identical() {
        assert_eq!(render(), render());
        assert_eq!(render(), LoginScreen {}.render().unwrap());
    }
}
