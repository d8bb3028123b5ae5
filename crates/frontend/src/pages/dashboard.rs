//! Dashboard page: today's schedule with inline editing.

use std::rc::Rc;

use bell_types::{EntryId, UpdateRequest, Weekday};
use chrono::Local;
use dashboard_core::{Dashboard, EditField, EditInput, SyncEvent};
use yew::prelude::*;

use crate::api;
use crate::components::{EditOptions, ErrorNotice, Loading, ScheduleTable};

/// User intents and sync completions, funneled through one reducer so
/// every transition applies to the state that is current when it
/// arrives, not the render it was created in.
enum Msg {
    Begin(EntryId, EditField),
    Input(EditInput, String),
    Sync(SyncEvent),
}

/// Reducer wrapper around the core dashboard state.
#[derive(Default, PartialEq)]
struct Model {
    dashboard: Dashboard,
}

impl Reducible for Model {
    type Action = Msg;

    fn reduce(self: Rc<Self>, action: Msg) -> Rc<Self> {
        let mut dashboard = self.dashboard.clone();
        match action {
            Msg::Begin(entry_id, field) => dashboard.session.begin(entry_id, field),
            Msg::Input(input, value) => dashboard.session.input(input, value),
            Msg::Sync(event) => dashboard.apply(event),
        }
        Rc::new(Model { dashboard })
    }
}

/// Properties for DashboardPage.
#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    /// How lecture cells take input: free text (default) or a dropdown
    /// over a fixed list.
    #[prop_or_default]
    pub edit_options: EditOptions,
}

/// Dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let model = use_reducer(Model::default);
    let today = Weekday::today();

    // Initial read on mount.
    {
        let model = model.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                model.dispatch(Msg::Sync(fetch_event().await));
            });
        });
    }

    let on_begin = {
        let model = model.clone();
        Callback::from(move |(entry_id, field): (EntryId, EditField)| {
            model.dispatch(Msg::Begin(entry_id, field));
        })
    };

    let on_input = {
        let model = model.clone();
        Callback::from(move |(input, value): (EditInput, String)| {
            model.dispatch(Msg::Input(input, value));
        })
    };

    // Save whatever the open session has buffered.
    let on_save = {
        let model = model.clone();
        Callback::from(move |_: ()| {
            let Some(request) = model
                .dashboard
                .session
                .commit_request(&model.dashboard.store, today)
            else {
                return;
            };
            spawn_save(model.clone(), request);
        })
    };

    // Dropdown lectures save on choose: buffer the picked value and
    // submit in one step, without waiting for a re-render.
    let on_choose = {
        let model = model.clone();
        Callback::from(move |value: String| {
            let mut session = model.dashboard.session.clone();
            session.input(EditInput::Lecture, value.clone());
            model.dispatch(Msg::Input(EditInput::Lecture, value));
            let Some(request) = session.commit_request(&model.dashboard.store, today) else {
                return;
            };
            spawn_save(model.clone(), request);
        })
    };

    if model.dashboard.loading {
        return html! { <Loading /> };
    }

    // Either error kind replaces the whole dashboard body; the
    // recovery path is a page reload.
    if let Some(error) = model.dashboard.error {
        return html! { <ErrorNotice {error} /> };
    }

    let entries = model.dashboard.store.entries_for(today).to_vec();
    let date_line = Local::now().format("%A, %B %-d, %Y").to_string();

    html! {
        <div class="card">
            <div class="page-header">
                <h1>{"Smart Bell Dashboard"}</h1>
                <h2>{"Today: "}<span>{ date_line }</span></h2>
            </div>
            if entries.is_empty() {
                <p class="empty-state">{"No schedule available for today."}</p>
            } else {
                <ScheduleTable
                    {entries}
                    session={model.dashboard.session.clone()}
                    options={props.edit_options.clone()}
                    {on_begin}
                    {on_input}
                    {on_save}
                    {on_choose}
                />
            }
        </div>
    }
}

/// Run one write plus its reconciliation read in the background and
/// feed the outcome back into the reducer.
fn spawn_save(model: UseReducerHandle<Model>, request: UpdateRequest) {
    wasm_bindgen_futures::spawn_local(async move {
        model.dispatch(Msg::Sync(save_event(&request).await));
    });
}

/// Run the full-schedule read, folding any failure into one event.
async fn fetch_event() -> SyncEvent {
    match api::fetch_schedule().await {
        Ok(schedule) => SyncEvent::FetchOk(schedule),
        Err(e) => {
            log_error(format!("Failed to fetch schedule: {}", e));
            SyncEvent::FetchFailed
        }
    }
}

/// Run one write and its follow-up read, folding failures likewise.
async fn save_event(request: &UpdateRequest) -> SyncEvent {
    match api::save_and_refresh(request).await {
        Ok(schedule) => SyncEvent::UpdateOk(schedule),
        Err(e) => {
            log_error(format!("Failed to update schedule: {}", e));
            SyncEvent::UpdateFailed
        }
    }
}

fn log_error(message: String) {
    gloo_timers::callback::Timeout::new(0, move || {
        web_sys::console::error_1(&message.into());
    })
    .forget();
}
