use yew::prelude::*;

use super::icons::ToggleIcon;
use crate::config::Config;
use crate::hooks::use_has_mounted;
use crate::models::ColorMode;

#[derive(Properties, PartialEq)]
pub struct DarkModeButtonProps {
    pub color_mode: ColorMode,
    pub on_toggle: Callback<()>,
}

/// Light/dark toggle. Shows a sun while light and a moon while dark, and
/// renders nothing until it has been mounted so the server-rendered or first
/// client frame never shows a stale glyph.
#[function_component(DarkModeButton)]
pub fn dark_mode_button(props: &DarkModeButtonProps) -> Html {
    let mounted = use_has_mounted();

    render_button(mounted, props.color_mode, &props.on_toggle)
}

/// Everything the button draws, as a function of the mount flag and mode
pub fn render_button(mounted: bool, color_mode: ColorMode, on_toggle: &Callback<()>) -> Html {
    if !mounted {
        return Html::default();
    }

    let icon = ToggleIcon::for_mode(color_mode);
    let label = icon.action_label();
    let onclick = click_handler::<MouseEvent>(on_toggle);

    html! {
        <button
            type="button"
            class={Config::BUTTON_CLASS}
            data-color-mode={color_mode.as_str()}
            {onclick}
            aria-label={label}
            title={label}
        >
            {icon.view(Config::ICON_SIZE)}
        </button>
    }
}

/// Adapts the host's toggle into an event handler that drops the event
pub fn click_handler<E: 'static>(on_toggle: &Callback<()>) -> Callback<E> {
    on_toggle.reform(|_: E| ())
}
