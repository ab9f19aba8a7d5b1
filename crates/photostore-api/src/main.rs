use photostore_core::Config;

// Use mimalloc as the global allocator for better performance and lower
// fragmentation, especially when running on musl-based systems inside
// containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    photostore_api::telemetry::init_tracing();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (database, storage, routes)
    let (state, router) = photostore_api::setup::initialize_app(config).await?;

    // Start the server
    photostore_api::setup::server::start_server(&state.config, router).await?;

    Ok(())
}
