use yew::prelude::*;

/// What class of problem a notice reports. Validation notices come from the
/// form gate; error notices from the backend or the network.
#[derive(Debug, Clone, PartialEq)]
pub enum NoticeKind {
    Validation,
    Error,
}

/// A typed, dismissable outcome surfaced to the user instead of a blocking
/// alert, so control logic stays decoupled from presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Validation,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };

    let kind_class = match notice.kind {
        NoticeKind::Validation => "validation",
        NoticeKind::Error => "error",
    };

    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("notice-banner", kind_class)} role="alert">
            <span class="notice-message">{&notice.message}</span>
            <button type="button" class="notice-dismiss-btn" onclick={on_dismiss}>
                {"×"}
            </button>
        </div>
    }
}
