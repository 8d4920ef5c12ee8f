use futsal_roster::app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug).module_prefix("futsal_roster"));

    yew::Renderer::<App>::new().render();
}
