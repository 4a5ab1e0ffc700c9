// Static host for the compiled catalog client
//
// Serves the Trunk output directory (`dist` by default). Unknown paths fall
// back to `index.html` so that `/?vendor=...` and client-side routes load
// the app.

#[cfg(feature = "serve")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    use actix_files::{Files, NamedFile};
    use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
    use actix_web::{App, HttpServer};
    use anyhow::Context;
    use vegan_catalog::logging;
    use vegan_catalog::web_app::config::ServerConfig;

    let config = ServerConfig::from_env();
    logging::init_server_logging();

    let index_path = format!("{}/index.html", config.site_root);
    if !std::path::Path::new(&index_path).exists() {
        tracing::warn!("{} not found; build the client with `trunk build` first", index_path);
    }

    tracing::info!("Serving {} at http://{}", config.site_root, config.addr);

    let site_root = config.site_root.clone();
    HttpServer::new(move || {
        let index_path = index_path.clone();
        App::new().service(
            Files::new("/", site_root.clone())
                .index_file("index.html")
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index_path = index_path.clone();
                    async move {
                        let (req, _) = req.into_parts();
                        let file = NamedFile::open_async(&index_path).await?;
                        let res = file.into_response(&req);
                        Ok(ServiceResponse::new(req, res))
                    }
                })),
        )
    })
    .bind(&config.addr)
    .with_context(|| format!("failed to bind {}", config.addr))?
    .run()
    .await
    .context("server error")?;

    Ok(())
}

#[cfg(not(feature = "serve"))]
fn main() {
    panic!("This binary requires the 'serve' feature. Run with: cargo run --features serve");
}
