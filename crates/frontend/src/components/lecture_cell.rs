//! Lecture cell: display text, a free-text editor, or a dropdown.

use bell_types::ScheduleEntry;
use yew::prelude::*;

/// How lecture cells take input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Free text with an explicit save button
    Freeform,
    /// Dropdown over a fixed list; choosing saves immediately
    Select,
}

/// View configuration collapsing the two historical dashboard variants
/// into one parameterized component.
#[derive(Debug, Clone, PartialEq)]
pub struct EditOptions {
    pub mode: EditMode,
    /// Choices offered in select mode; unused in freeform mode.
    pub lecture_options: Vec<String>,
}

impl Default for EditOptions {
    fn default() -> Self {
        Self {
            mode: EditMode::Freeform,
            lecture_options: Vec::new(),
        }
    }
}

impl EditOptions {
    /// Dropdown editing over the given lecture names.
    pub fn select(lecture_options: Vec<String>) -> Self {
        Self {
            mode: EditMode::Select,
            lecture_options,
        }
    }
}

/// Properties for LectureCell component.
#[derive(Properties, PartialEq)]
pub struct LectureCellProps {
    pub entry: ScheduleEntry,
    /// Whether this cell is the open edit target.
    pub editing: bool,
    /// Prefill: draft value, or the entry's server value.
    pub value: String,
    pub options: EditOptions,
    pub on_begin: Callback<MouseEvent>,
    /// Freeform keystrokes.
    pub on_change: Callback<String>,
    /// Freeform save button.
    pub on_save: Callback<()>,
    /// Select-mode choice; the handler saves in the same step.
    pub on_choose: Callback<String>,
}

/// Lecture cell component.
#[function_component(LectureCell)]
pub fn lecture_cell(props: &LectureCellProps) -> Html {
    if !props.editing {
        return html! {
            <td class="editable-cell" onclick={props.on_begin.clone()}>
                <div>{ &props.entry.lecture }</div>
            </td>
        };
    }

    match props.options.mode {
        EditMode::Freeform => {
            let oninput = {
                let on_change = props.on_change.clone();
                Callback::from(move |e: InputEvent| {
                    let field: web_sys::HtmlInputElement = e.target_unchecked_into();
                    on_change.emit(field.value());
                })
            };
            let onclick = {
                let on_save = props.on_save.clone();
                Callback::from(move |_| on_save.emit(()))
            };
            html! {
                <td class="editable-cell">
                    <input type="text" value={props.value.clone()} {oninput} />
                    <button class="save-button" {onclick}>{"Save"}</button>
                </td>
            }
        }
        EditMode::Select => {
            let onchange = {
                let on_choose = props.on_choose.clone();
                Callback::from(move |e: Event| {
                    let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                    on_choose.emit(select.value());
                })
            };
            // Keep the server value selectable when the configured list
            // does not contain it.
            let mut choices = props.options.lecture_options.clone();
            if !choices.contains(&props.value) {
                choices.insert(0, props.value.clone());
            }
            html! {
                <td class="editable-cell">
                    <select {onchange}>
                        { for choices.iter().map(|name| html! {
                            <option value={name.clone()} selected={*name == props.value}>
                                { name }
                            </option>
                        })}
                    </select>
                </td>
            }
        }
    }
}
