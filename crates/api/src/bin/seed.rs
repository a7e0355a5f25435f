//! Seed the reference collections (departments, line managers).
//!
//! Separate from server startup so seeding is an explicit operation:
//!
//! ```text
//! cargo run --bin crewdesk-seed
//! ```
//!
//! Safe to re-run; collections that already hold data are left alone.

use crewdesk_db::PgDocumentStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crewdesk_seed=info,crewdesk_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = crewdesk_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    crewdesk_db::ensure_schema(&pool)
        .await
        .expect("Failed to initialize document schema");

    let store = PgDocumentStore::new(pool);
    crewdesk_db::seed::seed_reference_data(&store)
        .await
        .expect("Seeding failed");

    tracing::info!("Seeding complete");
}
