use clap::Parser;
use tracing::info;
use user_directory::app_system::{setup_tracing, DirectoryConfig, UserSystem};
use user_directory::resolver::Resolver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DirectoryConfig::parse();
    setup_tracing(&config.log_filter);

    info!("Starting user directory");

    let system = UserSystem::new(&config);
    let resolver = Resolver::new(system.user_client.clone());

    resolver
        .serve(tokio::io::stdin(), tokio::io::stdout(), config.max_line_length.get())
        .await?;

    drop(resolver);
    system.shutdown().await?;

    info!("User directory stopped");
    Ok(())
}
