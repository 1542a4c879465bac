use yew::prelude::*;

use dark_mode_button::components::DarkModeButton;
use dark_mode_button::hooks::use_color_mode;

#[function_component(App)]
fn app() -> Html {
    let mode = use_color_mode();

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Dark Mode Button"}</h1>
                <DarkModeButton color_mode={mode.color_mode} on_toggle={mode.toggle.clone()} />
            </header>

            <main class="app-main">
                <p>{format!("Current color mode: {}", mode.color_mode)}</p>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
