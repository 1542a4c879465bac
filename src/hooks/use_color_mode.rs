use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::Config;
use crate::models::ColorMode;

/// Handle returned by `use_color_mode` hook
#[derive(Clone, PartialEq)]
pub struct ColorModeHandle {
    pub color_mode: ColorMode,
    pub toggle: Callback<()>,
}

/// Owns the page's color mode for a host component.
///
/// The mode starts from the `data-theme` attribute already on `<html>`, then
/// the OS preference. It is written back to `<html>` on every change and follows
/// OS preference changes while the host is mounted.
#[hook]
pub fn use_color_mode() -> ColorModeHandle {
    let color_mode = use_state(initial_color_mode);

    // Effect: Apply mode to DOM
    {
        let current = *color_mode;
        use_effect_with(current, move |mode| {
            apply_color_mode_to_dom(*mode);
            || ()
        });
    }

    // Effect: Follow system preference changes
    {
        let color_mode = color_mode.clone();
        use_effect_with((), move |_| {
            let listener = setup_media_query_listener(color_mode.setter());
            move || drop(listener)
        });
    }

    let toggle = {
        let color_mode = color_mode.clone();
        Callback::from(move |()| {
            let next = color_mode.toggled();
            gloo::console::debug!(format!("color mode {} -> {}", *color_mode, next));
            color_mode.set(next);
        })
    };

    ColorModeHandle {
        color_mode: *color_mode,
        toggle,
    }
}

fn initial_color_mode() -> ColorMode {
    read_color_mode_from_dom()
        .or_else(detect_system_preference)
        .unwrap_or_default()
}

/// Read a mode the page was served with, e.g. `<html data-theme="dark">`
fn read_color_mode_from_dom() -> Option<ColorMode> {
    let value = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|html| html.get_attribute(Config::THEME_ATTRIBUTE))?;

    match value.parse() {
        Ok(mode) => Some(mode),
        Err(e) => {
            gloo::console::warn!(format!("Ignoring {}: {e}", Config::THEME_ATTRIBUTE));
            None
        }
    }
}

fn dark_scheme_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window().and_then(|w| w.match_media(Config::DARK_SCHEME_QUERY).ok().flatten())
}

/// Detect system's preferred color scheme
fn detect_system_preference() -> Option<ColorMode> {
    dark_scheme_query().map(|mq| {
        if mq.matches() {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    })
}

fn apply_color_mode_to_dom(mode: ColorMode) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        if let Err(e) = html.set_attribute(Config::THEME_ATTRIBUTE, mode.as_str()) {
            gloo::console::warn!(format!("Failed to apply color mode: {e:?}"));
        }
    }
}

fn setup_media_query_listener(setter: UseStateSetter<ColorMode>) -> Option<EventListener> {
    let mq = dark_scheme_query()?;
    let target = mq.dyn_into::<web_sys::EventTarget>().ok()?;
    Some(EventListener::new(&target, "change", move |_event| {
        if let Some(mode) = detect_system_preference() {
            setter.set(mode);
        }
    }))
}
