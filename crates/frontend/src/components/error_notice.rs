//! Full-body error notice.

use dashboard_core::DashboardError;
use yew::prelude::*;

/// Properties for ErrorNotice component.
#[derive(Properties, PartialEq)]
pub struct ErrorNoticeProps {
    pub error: DashboardError,
}

/// Error notice component.
///
/// Replaces the entire dashboard body rather than annotating a row;
/// the only recovery path is a page reload.
#[function_component(ErrorNotice)]
pub fn error_notice(props: &ErrorNoticeProps) -> Html {
    html! {
        <div class="error-notice">{ props.error.to_string() }</div>
    }
}
