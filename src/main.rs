use company_portal::components::App;
use company_portal::config::CONFIG;

fn main() {
    // Panics legibles en la consola del navegador
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Company Portal starting... (backend: {})", CONFIG.backend_url);

    yew::Renderer::<App>::new().render();
}
