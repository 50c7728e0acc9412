//! Inline stroke icons (Feather paths) so the page needs no icon font.

use leptos::prelude::*;

#[component]
fn Svg(#[prop(default = 20)] size: u32, children: Children) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn GithubIcon(#[prop(default = 20)] size: u32) -> impl IntoView {
    view! {
        <Svg size=size>
            <path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"/>
        </Svg>
    }
}

#[component]
pub fn LinkedinIcon(#[prop(default = 20)] size: u32) -> impl IntoView {
    view! {
        <Svg size=size>
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>
            <rect x="2" y="9" width="4" height="12"/>
            <circle cx="4" cy="4" r="2"/>
        </Svg>
    }
}

#[component]
pub fn MailIcon(#[prop(default = 20)] size: u32) -> impl IntoView {
    view! {
        <Svg size=size>
            <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"/>
            <polyline points="22,6 12,13 2,6"/>
        </Svg>
    }
}

#[component]
pub fn MapPinIcon(#[prop(default = 20)] size: u32) -> impl IntoView {
    view! {
        <Svg size=size>
            <path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z"/>
            <circle cx="12" cy="10" r="3"/>
        </Svg>
    }
}

#[component]
pub fn PhoneIcon(#[prop(default = 20)] size: u32) -> impl IntoView {
    view! {
        <Svg size=size>
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"/>
        </Svg>
    }
}

#[component]
pub fn MenuIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
        <Svg size=size>
            <line x1="3" y1="12" x2="21" y2="12"/>
            <line x1="3" y1="6" x2="21" y2="6"/>
            <line x1="3" y1="18" x2="21" y2="18"/>
        </Svg>
    }
}

#[component]
pub fn CloseIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
        <Svg size=size>
            <line x1="18" y1="6" x2="6" y2="18"/>
            <line x1="6" y1="6" x2="18" y2="18"/>
        </Svg>
    }
}

#[component]
pub fn ExternalLinkIcon(#[prop(default = 20)] size: u32) -> impl IntoView {
    view! {
        <Svg size=size>
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>
            <polyline points="15 3 21 3 21 9"/>
            <line x1="10" y1="14" x2="21" y2="3"/>
        </Svg>
    }
}

#[component]
pub fn DownloadIcon(#[prop(default = 20)] size: u32) -> impl IntoView {
    view! {
        <Svg size=size>
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
            <polyline points="7 10 12 15 17 10"/>
            <line x1="12" y1="15" x2="12" y2="3"/>
        </Svg>
    }
}

#[component]
pub fn StarIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
        <Svg size=size>
            <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>
        </Svg>
    }
}

#[component]
pub fn AwardIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
        <Svg size=size>
            <circle cx="12" cy="8" r="7"/>
            <polyline points="8.21 13.89 7 23 12 20 17 23 15.79 13.88"/>
        </Svg>
    }
}

#[component]
pub fn CalendarIcon(#[prop(default = 14)] size: u32) -> impl IntoView {
    view! {
        <Svg size=size>
            <rect x="3" y="4" width="18" height="18" rx="2" ry="2"/>
            <line x1="16" y1="2" x2="16" y2="6"/>
            <line x1="8" y1="2" x2="8" y2="6"/>
            <line x1="3" y1="10" x2="21" y2="10"/>
        </Svg>
    }
}

#[component]
pub fn SendIcon(#[prop(default = 20)] size: u32) -> impl IntoView {
    view! {
        <Svg size=size>
            <line x1="22" y1="2" x2="11" y2="13"/>
            <polygon points="22 2 15 22 11 13 2 9 22 2"/>
        </Svg>
    }
}

#[component]
pub fn SunIcon(#[prop(default = 20)] size: u32) -> impl IntoView {
    view! {
        <Svg size=size>
            <circle cx="12" cy="12" r="5"/>
            <path d="M12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42"/>
        </Svg>
    }
}

#[component]
pub fn MoonIcon(#[prop(default = 20)] size: u32) -> impl IntoView {
    view! {
        <Svg size=size>
            <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"/>
        </Svg>
    }
}
