use shared::{nav_link_is_active, NavLink};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub links: Vec<NavLink>,
    /// Overrides the browser location, mainly for tests.
    #[prop_or_default]
    pub current_path: Option<String>,
}

/// Page chrome: the navigation bar with active-link marking and hover
/// tooltips on the links that carry tooltip text.
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let current_path = props
        .current_path
        .clone()
        .unwrap_or_else(current_pathname);

    html! {
        <nav class="main-nav">
            <ul class="nav-links">
                {for props.links.iter().map(|link| {
                    let active = nav_link_is_active(&link.href, &current_path);
                    html! {
                        <li class="nav-item">
                            <a
                                href={link.href.clone()}
                                class={classes!("nav-link", active.then_some("active"))}
                                title={link.tooltip.clone()}
                            >
                                {&link.label}
                                {if let Some(tooltip) = link.tooltip.as_ref() {
                                    html! {
                                        <span class="custom-tooltip">{tooltip}</span>
                                    }
                                } else { html! {} }}
                            </a>
                        </li>
                    }
                })}
            </ul>
        </nav>
    }
}

/// Path of the current document; "/" when no window is available.
fn current_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
