//! Login and registration flows against the in-memory backend.

use std::sync::Arc;

use shopdesk_api::{AuthRepository, InMemoryAuthRepository};
use shopdesk_auth::{feedback, LoginPage, Outcome, RegisterPage};
use shopdesk_forms::messages::Rule;
use shopdesk_router::{History, Level, Navigator, RecordingNotifier, Route};

struct Harness {
    auth: Arc<InMemoryAuthRepository>,
    history: Arc<History>,
    notifier: Arc<RecordingNotifier>,
}

impl Harness {
    fn new(auth: InMemoryAuthRepository) -> Self {
        Self {
            auth: Arc::new(auth),
            history: Arc::new(History::new()),
            notifier: Arc::new(RecordingNotifier::accepting()),
        }
    }

    fn login_page(
        &self,
    ) -> LoginPage<Arc<InMemoryAuthRepository>, Arc<History>, Arc<RecordingNotifier>> {
        LoginPage::new(
            self.auth.clone(),
            self.history.clone(),
            self.notifier.clone(),
        )
    }

    fn register_page(
        &self,
    ) -> RegisterPage<Arc<InMemoryAuthRepository>, Arc<History>, Arc<RecordingNotifier>> {
        RegisterPage::new(
            self.auth.clone(),
            self.history.clone(),
            self.notifier.clone(),
        )
    }
}

#[tokio::test]
async fn test_login_success() {
    let h = Harness::new(InMemoryAuthRepository::with_user("alice", "secret1"));
    let mut page = h.login_page();
    page.on_change("name", "alice").unwrap();
    page.on_change("password", "secret1").unwrap();

    let user = page.submit().await.completed().unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(
        h.notifier.last(),
        Some((Level::Success, feedback::LOGIN_SUCCESS.to_string()))
    );
    assert_eq!(h.history.current(), Some(Route::Admin));
    assert!(h.auth.session().await.is_some());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let h = Harness::new(InMemoryAuthRepository::with_user("alice", "secret1"));
    let mut page = h.login_page();
    page.on_change("name", "alice").unwrap();
    page.on_change("password", "secret2").unwrap();

    assert!(matches!(page.submit().await, Outcome::Failed(e) if e.is_unauthorized()));
    assert_eq!(
        h.notifier.last(),
        Some((Level::Error, feedback::LOGIN_REJECTED.to_string()))
    );
    assert_eq!(h.history.current(), None);
}

#[tokio::test]
async fn test_login_unknown_user_is_server_error() {
    let h = Harness::new(InMemoryAuthRepository::new());
    let mut page = h.login_page();
    page.on_change("name", "nobody").unwrap();
    page.on_change("password", "secret1").unwrap();

    assert!(matches!(page.submit().await, Outcome::Failed(_)));
    assert_eq!(
        h.notifier.last(),
        Some((Level::Error, feedback::SERVER_ERROR.to_string()))
    );
}

#[tokio::test]
async fn test_login_blank_form_never_calls_backend() {
    let h = Harness::new(InMemoryAuthRepository::with_user("alice", "secret1"));
    h.auth.fail_next(500, None).await;
    let mut page = h.login_page();

    assert!(matches!(page.submit().await, Outcome::Invalid));
    assert_eq!(page.form().error("name"), Some(Rule::Required.message()));
    assert!(page.render().contains("is-invalid"));
    assert!(h.notifier.messages().is_empty());

    // The injected failure is still pending, so the backend was not called.
    assert_eq!(h.auth.current_user().await.unwrap_err().status_code(), Some(500));
}

#[tokio::test]
async fn test_register_then_login() {
    let h = Harness::new(InMemoryAuthRepository::new());
    let mut register = h.register_page();
    register.on_change("name", "bob_1").unwrap();
    register.on_change("password", "abc123").unwrap();
    register.on_change("confirmPassword", "abc123").unwrap();

    let account = register.submit().await.completed().unwrap();
    assert_eq!(account.username, "bob_1");
    assert_eq!(h.history.current(), Some(Route::Login));
    assert_eq!(
        h.notifier.last(),
        Some((Level::Success, feedback::REGISTER_SUCCESS.to_string()))
    );

    let mut login = h.login_page();
    login.on_change("name", "bob_1").unwrap();
    login.on_change("password", "abc123").unwrap();
    assert!(login.submit().await.completed().is_some());
}

#[tokio::test]
async fn test_register_mismatch_is_caught_client_side() {
    let h = Harness::new(InMemoryAuthRepository::new());
    let mut page = h.register_page();
    page.on_change("name", "carol").unwrap();
    page.on_change("password", "Abc123").unwrap();
    page.on_change("confirmPassword", "Abc124").unwrap();

    assert!(matches!(page.submit().await, Outcome::Invalid));
    assert_eq!(
        page.form().error("confirmPassword"),
        Some("confirming password do not match")
    );
}

#[tokio::test]
async fn test_register_existing_user() {
    let h = Harness::new(InMemoryAuthRepository::with_user("alice", "secret1"));
    let mut page = h.register_page();
    page.on_change("name", "alice").unwrap();
    page.on_change("password", "secret1").unwrap();
    page.on_change("confirmPassword", "secret1").unwrap();

    assert!(matches!(page.submit().await, Outcome::Failed(e) if e.status_code() == Some(409)));
    assert_eq!(
        h.notifier.last(),
        Some((Level::Error, feedback::REGISTER_FAILURE.to_string()))
    );
    assert_eq!(h.history.current(), Some(Route::Register));
}

#[tokio::test]
async fn test_unknown_field_is_an_error() {
    let h = Harness::new(InMemoryAuthRepository::new());
    let mut page = h.login_page();
    assert!(page.on_change("email", "a@b.co").is_err());
    page.back();
    assert_eq!(h.history.current(), Some(Route::Home));
}
