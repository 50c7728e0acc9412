#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use axum_tracing_opentelemetry::middleware::{OtelAxumLayer, OtelInResponseLayer};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use opentelemetry_configuration::OtelSdkBuilder;
    use portfolio_site::{
        app::*,
        config::Config,
        error::AppError,
        health::{self, HealthState},
        portfolio,
        security_headers::SecurityHeadersLayer,
    };
    use tower_http::compression::CompressionLayer;

    let config = Config::load().map_err(AppError::from)?;

    let _guard = OtelSdkBuilder::new()
        .service_name(env!("CARGO_PKG_NAME"))
        .service_version(env!("CARGO_PKG_VERSION"))
        .resource_attribute("deployment.environment.name", config.environment.clone())
        .resource_attribute("vcs.ref.head.revision", env!("VCS_REF_HEAD_REVISION"))
        .resource_attribute("vcs.ref.head.name", env!("VCS_REF_HEAD_NAME"))
        .resource_attribute("vcs.ref.head.type", "branch")
        .endpoint(config.otel.endpoint.clone())
        .with_standard_env()
        .build()
        .context("failed to initialise OpenTelemetry")?;

    // Refuse to serve a page built from broken data.
    let record = portfolio::embedded().map_err(AppError::from)?;
    tracing::info!(
        projects = record.projects.len(),
        certifications = record.certifications.len(),
        "portfolio data loaded"
    );

    let conf = get_configuration(None).context("failed to read leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        .merge(health::router(HealthState::new(&config.environment)))
        .layer(SecurityHeadersLayer)
        .layer(CompressionLayer::new())
        .layer(OtelInResponseLayer)
        .layer(OtelAxumLayer::default());

    if let Some(socket_path) = &config.socket {
        tracing::info!("listening on unix socket {}", socket_path);
        let listener = tokio::net::UnixListener::bind(socket_path).map_err(AppError::from)?;
        axum::serve(listener, app.into_make_service()).await?;
    } else {
        tracing::info!("listening on http://{}", &config.listen);
        let listener = tokio::net::TcpListener::bind(&config.listen)
            .await
            .map_err(AppError::from)?;
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
