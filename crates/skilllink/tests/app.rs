//! Integration tests for the assembled app: the signup → dashboard →
//! logout → reload flow a real user walks through.

use skilllink::prelude::*;

fn test_app() -> App<MemoryStore, MockBackend> {
    App::builder(
        MemoryStore::new(),
        MockBackend::new(MockBackendConfig::instant()),
    )
    .build()
}

// =========================================================================
// Build / initial state
// =========================================================================

#[test]
fn test_fresh_app_is_anonymous_and_not_loading() {
    let app = test_app();

    assert!(app.current_user().is_none());
    assert!(!app.is_loading());
    assert!(app.dashboard().is_none());
}

#[test]
fn test_anonymous_navigation_public_allowed_protected_redirected() {
    let app = test_app();

    assert!(app.navigate("/").is_allowed());
    assert!(app.navigate("/about").is_allowed());
    assert_eq!(
        app.navigate("/ngo-dashboard"),
        Access::Redirect(RedirectTarget::Login)
    );
}

// =========================================================================
// Signup and role-based navigation
// =========================================================================

#[tokio::test]
async fn test_signup_then_own_dashboard_allows() {
    let mut app = test_app();

    let user = app
        .signup("hire@acme.example", "pw", "Acme Hiring", Role::Company)
        .await
        .expect("mock signup never fails");
    assert_eq!(user.name, "Acme Hiring");

    assert!(app.navigate("/company-dashboard").is_allowed());
    assert_eq!(app.dashboard(), Some("/company-dashboard"));
}

#[tokio::test]
async fn test_signup_then_other_dashboards_redirect_to_landing() {
    let mut app = test_app();
    app.signup("hire@acme.example", "pw", "Acme", Role::Company)
        .await
        .unwrap();

    for path in ["/ngo-dashboard", "/admin-dashboard"] {
        assert_eq!(
            app.navigate(path),
            Access::Redirect(RedirectTarget::Landing),
            "company account must not enter {path}"
        );
    }
}

#[tokio::test]
async fn test_login_routes_each_role_to_its_dashboard() {
    for (role, path) in [
        (Role::Ngo, "/ngo-dashboard"),
        (Role::Company, "/company-dashboard"),
        (Role::Admin, "/admin-dashboard"),
    ] {
        let mut app = test_app();
        app.login("someone@example.org", "pw", role).await.unwrap();

        assert_eq!(app.dashboard(), Some(path));
        assert!(app.navigate(path).is_allowed());
    }
}

// =========================================================================
// Logout
// =========================================================================

#[tokio::test]
async fn test_logout_flips_navigation_immediately() {
    let mut app = test_app();
    app.login("admin@skilllink.example", "pw", Role::Admin)
        .await
        .unwrap();
    assert!(app.navigate("/admin-dashboard").is_allowed());

    app.logout();

    assert!(app.current_user().is_none());
    assert_eq!(
        app.navigate("/admin-dashboard"),
        Access::Redirect(RedirectTarget::Login)
    );
}

// =========================================================================
// Restart restore (file-backed store)
// =========================================================================

#[cfg(feature = "file")]
mod restore {
    use super::*;
    use rand::Rng;
    use std::path::PathBuf;

    fn scratch_path() -> PathBuf {
        let tag: u32 = rand::rng().random();
        std::env::temp_dir()
            .join(format!("skilllink-app-test-{}-{tag}.json", std::process::id()))
    }

    #[tokio::test]
    async fn test_session_survives_restart() -> Result<(), SkillLinkError> {
        let path = scratch_path();

        // First run: sign up and let the store hit disk.
        let expected = {
            let mut app = App::builder(
                JsonFileStore::open(&path)?,
                MockBackend::new(MockBackendConfig::instant()),
            )
            .build();
            app.signup("maria@helpinghands.org", "pw", "Maria", Role::Ngo)
                .await?;
            app.current_user().unwrap().clone()
        };

        // Second run: a fresh app over the same file restores the user.
        let app = App::builder(
            JsonFileStore::open(&path)?,
            MockBackend::new(MockBackendConfig::instant()),
        )
        .build();

        assert_eq!(app.current_user(), Some(&expected));
        assert!(app.navigate("/ngo-dashboard").is_allowed());

        let _ = std::fs::remove_file(&path);
        Ok(())
    }

    #[tokio::test]
    async fn test_logout_does_not_survive_restart() -> Result<(), SkillLinkError> {
        let path = scratch_path();

        {
            let mut app = App::builder(
                JsonFileStore::open(&path)?,
                MockBackend::new(MockBackendConfig::instant()),
            )
            .build();
            app.login("a@b.com", "pw", Role::Admin).await?;
            app.logout();
        }

        let app = App::builder(
            JsonFileStore::open(&path)?,
            MockBackend::new(MockBackendConfig::instant()),
        )
        .build();

        assert!(app.current_user().is_none());

        let _ = std::fs::remove_file(&path);
        Ok(())
    }
}
