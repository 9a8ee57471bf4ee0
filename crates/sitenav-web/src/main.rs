//! WASM entry point for the header bundle

fn main() {
    console_error_panic_hook::set_once();
    sitenav_web::start();
}
