use catalog_logging::catalog_info;
use catalog_proxy::{router, ProxyState};

const DEFAULT_UPSTREAM: &str = "https://www.home24.de";
const DEFAULT_PORT: u16 = 3001;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_logging::initialize_terminal(log::LevelFilter::Info);

    let upstream = std::env::var("CATALOG_PROXY_UPSTREAM")
        .unwrap_or_else(|_| DEFAULT_UPSTREAM.to_string());
    let port: u16 = match std::env::var("CATALOG_PROXY_PORT") {
        Ok(raw) => raw.parse()?,
        Err(_) => DEFAULT_PORT,
    };

    let app = router(ProxyState::new(&upstream)?);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    catalog_info!("graphql proxy listening on :{port}, upstream {upstream}");
    axum::serve(listener, app).await?;
    Ok(())
}
