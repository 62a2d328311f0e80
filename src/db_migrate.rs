use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use slotbook_db::schema::initialize_database;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;
    tracing::subscriber::set_global_default(FmtSubscriber::new())?;

    // Load environment variables
    dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").wrap_err("DATABASE_URL environment variable is required")?;

    info!("Connecting to database...");
    let db_pool = slotbook_db::create_pool(&database_url, 1).await?;

    initialize_database(&db_pool).await?;
    info!("Migrations completed!");

    Ok(())
}
