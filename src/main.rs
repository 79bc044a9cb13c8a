#[cfg(not(target_arch = "wasm32"))]
fn init_native() {
    // A local .env is optional; the bundled config covers the rest.
    let _ = dotenvy::dotenv();
    aurora::logging::init();
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    init_native();

    dioxus::launch(aurora::ui::App);
}
