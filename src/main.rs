use dotenvy::dotenv;

use lifelink::config::database::DatabaseConfig;
use lifelink::router::init_router;
use lifelink::state::init_app_state;
use lifelink::{cli, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    // Check if this is a CLI command
    if args.len() > 1 && args[1] == "create-admin" {
        return handle_create_admin(args).await;
    }

    // Normal server startup
    logging::init_tracing();

    let state = init_app_state().await?;
    sqlx::migrate!().run(&state.db).await?;

    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    println!("🚀 Server running on http://localhost:3000");
    println!("📚 Swagger UI available at http://localhost:3000/swagger-ui");
    println!("📖 Scalar UI available at http://localhost:3000/scalar");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn handle_create_admin(args: Vec<String>) -> anyhow::Result<()> {
    if args.len() != 4 {
        eprintln!("Usage: {} create-admin <name> <email>", args[0]);
        std::process::exit(1);
    }

    let name = &args[2];
    let email = &args[3];

    let database = DatabaseConfig::from_env()?;
    let pool = lifelink_db::connect_pool(&database.url).await?;
    sqlx::migrate!().run(&pool).await?;

    let user = cli::create_admin(&pool, name, email).await?;
    println!("✅ Admin created!");
    println!("   Email: {}", user.email);
    println!("   Name: {}", user.name);

    Ok(())
}
