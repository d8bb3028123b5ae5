//! Today's schedule rendered as an editable two-column table.

use bell_types::{EntryId, ScheduleEntry};
use dashboard_core::{EditField, EditInput, EditSession};
use yew::prelude::*;

use super::lecture_cell::{EditOptions, LectureCell};
use super::time_cell::TimeCell;

/// Properties for ScheduleTable component.
#[derive(Properties, PartialEq)]
pub struct ScheduleTableProps {
    /// Today's entries in server order.
    pub entries: Vec<ScheduleEntry>,
    pub session: EditSession,
    pub options: EditOptions,
    pub on_begin: Callback<(EntryId, EditField)>,
    pub on_input: Callback<(EditInput, String)>,
    pub on_save: Callback<()>,
    pub on_choose: Callback<String>,
}

/// Schedule table component. Pure function of store and session: each
/// row shows display text, or an editor when it is the open target.
#[function_component(ScheduleTable)]
pub fn schedule_table(props: &ScheduleTableProps) -> Html {
    html! {
        <table class="schedule-table">
            <thead>
                <tr>
                    <th>{"Start Time"}</th>
                    <th>{"Lecture"}</th>
                </tr>
            </thead>
            <tbody>
                { for props.entries.iter().map(|entry| {
                    let id = entry.id;
                    html! {
                        <tr key={id.to_string()}>
                            <TimeCell
                                entry={entry.clone()}
                                editing={props.session.is_editing(id, EditField::Time)}
                                start_value={props.session.prefill(EditInput::StartTime, entry)}
                                end_value={props.session.prefill(EditInput::EndTime, entry)}
                                on_begin={props.on_begin.reform(move |_: MouseEvent| (id, EditField::Time))}
                                on_change={props.on_input.clone()}
                                on_save={props.on_save.clone()}
                            />
                            <LectureCell
                                entry={entry.clone()}
                                editing={props.session.is_editing(id, EditField::Lecture)}
                                value={props.session.prefill(EditInput::Lecture, entry)}
                                options={props.options.clone()}
                                on_begin={props.on_begin.reform(move |_: MouseEvent| (id, EditField::Lecture))}
                                on_change={props.on_input.reform(|v| (EditInput::Lecture, v))}
                                on_save={props.on_save.clone()}
                                on_choose={props.on_choose.clone()}
                            />
                        </tr>
                    }
                })}
            </tbody>
        </table>
    }
}
