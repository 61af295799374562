//! salesphere-web - product page panel entry point

fn main() {
    init_logging();

    if let Err(e) = salesphere_web::start() {
        tracing::error!("Product panel failed to start: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
