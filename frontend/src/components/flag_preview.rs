use shared::{FlagCatalog, FlagOption};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FlagPreviewProps {
    pub flags: Vec<FlagOption>,
    pub catalog: FlagCatalog,
    /// Currently selected flag id; empty string for "no flag".
    pub selected: String,
    pub on_change: Callback<String>,
    /// Host-form dirty notifier, invoked on every selection change when
    /// registered.
    #[prop_or_default]
    pub on_dirty: Option<Callback<()>>,
}

/// Selection-change dispatch: forwards the new value and, when the host
/// form registered a dirty notifier, tells it once per change.
fn notify_selection(value: String, on_change: &Callback<String>, on_dirty: Option<&Callback<()>>) {
    on_change.emit(value);
    if let Some(on_dirty) = on_dirty {
        on_dirty.emit(());
    }
}

/// Flag selector with a live preview badge. The badge is rebuilt from the
/// catalog on every change; an empty or unknown selection renders the empty
/// state rather than an error.
#[function_component(FlagPreview)]
pub fn flag_preview(props: &FlagPreviewProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        let on_dirty = props.on_dirty.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            notify_selection(select.value(), &on_change, on_dirty.as_ref());
        })
    };

    let badge = props.catalog.badge(&props.selected);

    html! {
        <div class="flag-preview-group">
            <select class="flag-select" onchange={onchange}>
                <option value="" selected={props.selected.is_empty()}>{"No flag"}</option>
                {for props.flags.iter().map(|flag| {
                    html! {
                        <option
                            value={flag.id.clone()}
                            selected={props.selected == flag.id}
                        >
                            {&flag.name}
                        </option>
                    }
                })}
            </select>
            <div class="flag-preview">
                {if let Some(badge) = badge {
                    html! {
                        <span
                            class="flag-badge"
                            style={format!(
                                "background-color: {}; color: {};",
                                badge.background, badge.text_color
                            )}
                        >
                            <i class={classes!("flag-icon", badge.icon_class)}></i>
                            {badge.label}
                        </span>
                    }
                } else { html! {} }}
            </div>
        </div>
    }
}
