use log::Level;
use pinch_zoom::components::App;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }
    yew::Renderer::<App>::new().render();
}
