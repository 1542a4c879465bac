use yew::prelude::*;

use crate::models::ColorMode;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub size: u32,
}

/// Stroked 24x24 sun glyph
#[function_component(Sun)]
pub fn sun(props: &IconProps) -> Html {
    let size = props.size.to_string();

    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            data-icon={ToggleIcon::Sun.name()}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <circle cx="12" cy="12" r="5" />
            <line x1="12" y1="1" x2="12" y2="3" />
            <line x1="12" y1="21" x2="12" y2="23" />
            <line x1="4.22" y1="4.22" x2="5.64" y2="5.64" />
            <line x1="18.36" y1="18.36" x2="19.78" y2="19.78" />
            <line x1="1" y1="12" x2="3" y2="12" />
            <line x1="21" y1="12" x2="23" y2="12" />
            <line x1="4.22" y1="19.78" x2="5.64" y2="18.36" />
            <line x1="18.36" y1="5.64" x2="19.78" y2="4.22" />
        </svg>
    }
}

/// Stroked 24x24 crescent moon glyph
#[function_component(Moon)]
pub fn moon(props: &IconProps) -> Html {
    let size = props.size.to_string();

    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            data-icon={ToggleIcon::Moon.name()}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" />
        </svg>
    }
}

/// Which glyph the toggle shows. The glyph names the current mode, the label
/// names what a click does.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToggleIcon {
    Sun,
    Moon,
}

impl ToggleIcon {
    pub const fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => Self::Sun,
            ColorMode::Dark => Self::Moon,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
        }
    }

    pub const fn action_label(self) -> &'static str {
        match self {
            Self::Sun => "Switch to dark mode",
            Self::Moon => "Switch to light mode",
        }
    }

    pub fn view(self, size: u32) -> Html {
        match self {
            Self::Sun => html! { <Sun {size} /> },
            Self::Moon => html! { <Moon {size} /> },
        }
    }
}
