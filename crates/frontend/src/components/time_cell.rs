//! Time window cell: display text, or paired start/end editors.

use bell_types::ScheduleEntry;
use dashboard_core::EditInput;
use yew::prelude::*;

/// Properties for TimeCell component.
#[derive(Properties, PartialEq)]
pub struct TimeCellProps {
    pub entry: ScheduleEntry,
    /// Whether this cell is the open edit target.
    pub editing: bool,
    /// Prefill for the start input: draft value, or server value.
    pub start_value: String,
    /// Prefill for the end input.
    pub end_value: String,
    pub on_begin: Callback<MouseEvent>,
    pub on_change: Callback<(EditInput, String)>,
    pub on_save: Callback<()>,
}

/// Time window cell component. Both halves of the slot are edited
/// together and saved as one request.
#[function_component(TimeCell)]
pub fn time_cell(props: &TimeCellProps) -> Html {
    if !props.editing {
        return html! {
            <td class="editable-cell" onclick={props.on_begin.clone()}>
                <div>{ props.entry.time_window() }</div>
            </td>
        };
    }

    let oninput_for = |input: EditInput| {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let field: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit((input, field.value()));
        })
    };

    let onclick = {
        let on_save = props.on_save.clone();
        Callback::from(move |_| on_save.emit(()))
    };

    html! {
        <td class="editable-cell">
            <input
                type="time"
                value={props.start_value.clone()}
                oninput={oninput_for(EditInput::StartTime)}
            />
            <input
                type="time"
                value={props.end_value.clone()}
                oninput={oninput_for(EditInput::EndTime)}
            />
            <button class="save-button" {onclick}>{"Save"}</button>
        </td>
    }
}
