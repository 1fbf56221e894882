use std::env;

#[cfg(feature = "openapi")]
use std::fs;
#[cfg(feature = "openapi")]
use std::path::PathBuf;

use axum::{Router, middleware};
use tokio::net::TcpListener;

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

use switchboard::{ServerConfig, middleware::auth::auth_middleware, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Handle CLI commands
    let mut args = env::args();
    let _ = args.next();
    if let Some(command) = args.next() {
        match command.as_str() {
            #[cfg(feature = "openapi")]
            "openapi" => {
                // Parse openapi command arguments
                let mut format = "yaml".to_string();
                let mut output: Option<PathBuf> = None;

                while let Some(arg) = args.next() {
                    match arg.as_str() {
                        "-f" | "--format" => {
                            format = args
                                .next()
                                .ok_or_else(|| anyhow!("--format requires a value (yaml or json)"))?;
                            if format != "yaml" && format != "json" {
                                anyhow::bail!("Invalid format '{}'. Must be 'yaml' or 'json'", format);
                            }
                        }
                        "-o" | "--output" => {
                            let path = args
                                .next()
                                .ok_or_else(|| anyhow!("--output requires a file path"))?;
                            output = Some(PathBuf::from(path));
                        }
                        other => {
                            anyhow::bail!(
                                "Unknown option '{}'. Use --format (yaml|json) or --output <file>",
                                other
                            );
                        }
                    }
                }

                // Generate the spec in the requested format
                let spec_content = match format.as_str() {
                    "yaml" => switchboard::docs::openapi::spec_yaml()
                        .map_err(|e| anyhow!("Failed to generate OpenAPI YAML: {}", e))?,
                    "json" => switchboard::docs::openapi::spec_json()
                        .map_err(|e| anyhow!("Failed to generate OpenAPI JSON: {}", e))?,
                    _ => unreachable!(),
                };

                // Write to file or stdout
                if let Some(output_path) = output {
                    fs::write(&output_path, &spec_content)
                        .map_err(|e| anyhow!("Failed to write to {}: {}", output_path.display(), e))?;
                    println!("OpenAPI spec written to {}", output_path.display());
                } else {
                    println!("{}", spec_content);
                }

                return Ok(());
            }
            other => {
                #[cfg(feature = "openapi")]
                {
                    anyhow::bail!("Unknown command '{other}'. Supported commands: openapi");
                }
                #[cfg(not(feature = "openapi"))]
                {
                    anyhow::bail!("Unknown command '{other}'. This build supports no commands");
                }
            }
        }
    }

    // Load configuration
    let config = ServerConfig::from_env().map_err(|e| anyhow!(e.to_string()))?;

    // Initialize tracing; DEBUG widens the default filter, RUST_LOG overrides
    let default_filter = if config.debug {
        "switchboard=debug,tower_http=debug"
    } else {
        "switchboard=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let address = config.address();
    println!("Starting server on {address}");

    // Create application state
    let app_state = AppState::new(config);

    // Create protected API routes with authentication middleware
    let protected_routes = routes::api::create_api_router().layer(middleware::from_fn_with_state(
        app_state.clone(),
        auth_middleware,
    ));

    // Create public health check route (no auth)
    let public_routes =
        Router::new().route("/", axum::routing::get(switchboard::handlers::api::health_check));

    // Combine all routes: public + protected
    let app = public_routes.merge(protected_routes);

    #[cfg(feature = "openapi")]
    let app = app.merge(switchboard::docs::openapi::router());

    let app = app.with_state(app_state);

    // Create listener
    let listener = TcpListener::bind(&address).await?;

    println!("Server listening on {address}");

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}
