use frontend::pages::landing::Landing;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    gloo_console::log!("Starting landing page");
    yew::Renderer::<Landing>::new().render();
}
