//! A terminal walk-through of the SkillLink session core.
//!
//! Run it twice: the first run signs up a company account (with the
//! mock backend's realistic delays), the second run restores the
//! session from the store file and skips straight to the dashboard.
//!
//! ```text
//! cargo run -p placement-portal
//! ```

use std::time::Instant;

use skilllink::prelude::*;

/// Where this demo persists its session between runs.
fn store_path() -> std::path::PathBuf {
    std::env::temp_dir().join("skilllink-demo-session.json")
}

#[tokio::main]
async fn main() -> Result<(), SkillLinkError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let store = JsonFileStore::open(store_path())?;
    let mut app = App::builder(store, MockBackend::default()).build();

    match app.current_user() {
        Some(user) => {
            println!("Welcome back, {} ({})!", user.name, user.role);
        }
        None => {
            println!("No session on disk — signing up a company account…");
            let started = Instant::now();
            let user = app
                .signup("hire@acme.example", "secret", "Acme Hiring", Role::Company)
                .await?;
            println!(
                "Signed up {} ({}) in {:.1}s (simulated round trip)",
                user.name,
                user.role,
                started.elapsed().as_secs_f64()
            );
        }
    }

    println!("\nNavigation as {}:", app.current_user().map_or("nobody".to_owned(), |u| u.email.clone()));
    for path in ["/", "/about", "/ngo-dashboard", "/company-dashboard", "/admin-dashboard"] {
        match app.navigate(path) {
            Access::Allow => println!("  {path:20} → rendered"),
            Access::Redirect(target) => {
                println!("  {path:20} → redirect to {}", target.path());
            }
        }
    }

    if let Some(dashboard) = app.dashboard() {
        println!("\nHeader Dashboard link points at {dashboard}");
    }

    println!(
        "\nSession persists at {} — run again to see it restored,\nor delete the file to start over.",
        store_path().display()
    );
    Ok(())
}
