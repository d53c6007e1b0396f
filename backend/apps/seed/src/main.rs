//! Demo Data Seeder
//!
//! Inserts demo accounts with sample feedback entries so a fresh
//! database has something to look at. Safe to run repeatedly: accounts
//! that already exist are skipped.

use feedback::domain::value_object::{
    email::Email, feedback_title::FeedbackTitle, person_name::PersonName, user_name::UserName,
};
use feedback::domain::{FeedbackRepository, UserRepository};
use feedback::models::{NewFeedback, NewUser};
use feedback::store::FeedbackStore;
use platform::password::ClearTextPassword;
use sqlx::postgres::PgPoolOptions;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// One demo account and its sample feedback entries.
struct DemoUser {
    user_name: &'static str,
    email: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    password: &'static str,
    feedback: [(&'static str, &'static str); 2],
}

const DEMO_USERS: [DemoUser; 4] = [
    DemoUser {
        user_name: "alice",
        email: "alice@example.com",
        first_name: "Alice",
        last_name: "Anderson",
        password: "password123",
        feedback: [
            (
                "Great onboarding flow",
                "Signing up took under a minute. The form told me exactly what was wrong when I mistyped my email.",
            ),
            (
                "Dark mode request",
                "The app is bright at night. A dark theme toggle in the settings would help a lot.",
            ),
        ],
    },
    DemoUser {
        user_name: "bobby",
        email: "bobby@example.com",
        first_name: "Bobby",
        last_name: "Brown",
        password: "secret456",
        feedback: [
            (
                "Search is slow on long lists",
                "Once I have more than a hundred entries, filtering takes a noticeable moment. Maybe paginate?",
            ),
            (
                "Love the keyboard shortcuts",
                "Being able to submit with Ctrl+Enter is a small thing that makes a big difference.",
            ),
        ],
    },
    DemoUser {
        user_name: "carol",
        email: "carol@example.com",
        first_name: "Carol",
        last_name: "Clark",
        password: "carol789",
        feedback: [
            (
                "Export to CSV",
                "I would like to download my feedback history as a CSV file for reporting.",
            ),
            (
                "Mobile layout glitch",
                "On a narrow phone screen the edit button overlaps the title field.",
            ),
        ],
    },
    DemoUser {
        user_name: "david",
        email: "david@example.com",
        first_name: "David",
        last_name: "Davis",
        password: "david101",
        feedback: [
            (
                "Session length feels right",
                "Twelve hours means I sign in once in the morning and never think about it again.",
            ),
            (
                "Markdown support",
                "Plain text is fine, but bullet lists in feedback bodies would read much better.",
            ),
        ],
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info,feedback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    let store = FeedbackStore::new(pool);

    for demo in &DEMO_USERS {
        seed_user(&store, demo).await?;
    }

    tracing::info!("Seeding complete");

    Ok(())
}

/// Insert one demo account and its feedback, skipping accounts that exist.
///
/// Repository traits share method names, so calls go through the trait
/// paths explicitly.
async fn seed_user(store: &FeedbackStore, demo: &DemoUser) -> anyhow::Result<()> {
    let user_name = UserName::new(demo.user_name, None)?;

    if UserRepository::find_by_user_name(store, &user_name)
        .await?
        .is_some()
    {
        tracing::info!(user_name = %user_name, "User already exists, skipping");
        return Ok(());
    }

    let password_hash = ClearTextPassword::new(demo.password.to_string())?.hash(None)?;

    let new_user = NewUser::new(
        user_name,
        Email::new(demo.email)?,
        PersonName::new(demo.first_name)?,
        PersonName::new(demo.last_name)?,
        password_hash,
    );

    let user = UserRepository::create(store, &new_user).await?;

    for (title, content) in &demo.feedback {
        let entry = NewFeedback {
            title: FeedbackTitle::new(title)?,
            content: (*content).to_string(),
            owner_id: user.user_id,
        };
        FeedbackRepository::create(store, &entry).await?;
    }

    tracing::info!(user_name = %user.user_name, user_id = %user.user_id, "Seeded demo user");

    Ok(())
}
