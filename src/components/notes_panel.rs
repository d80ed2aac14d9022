//! Notes drawer: filterable list plus a create/edit form.
//!
//! DESIGN
//! ======
//! The panel edits `NotesState` in place for filter and form input, and
//! hands persistence to the `load_notes` / `save_note` / `delete_note`
//! actions, which write the outcome back into the same signal. Pool choices
//! in the form follow the selected cloud in the current snapshot.

use leptos::prelude::*;

use crate::app::DashboardActions;
use crate::net::types::Note;
use crate::state::dashboard::DashboardState;
use crate::state::notes::{ALL_CLOUDS, NoteForm, NotesState, pools_for_cloud};
use crate::state::ui::UiState;
use crate::util::browser::confirm;
use crate::util::time::format_local_time;

#[component]
pub fn NotesPanel() -> impl IntoView {
    let notes = expect_context::<RwSignal<NotesState>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let actions = expect_context::<DashboardActions>();

    let clouds = Memo::new(move |_| {
        dashboard.with(|d| {
            d.snapshot
                .as_ref()
                .map(|s| s.clouds.iter().map(|c| c.cloud_name.clone()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    let close = move |_| ui.update(|u| u.notes_open = false);
    let new_note = move |_| notes.update(NotesState::open_new);

    let set_search = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        notes.update(|n| n.filter.search = value);
        actions.load_notes.run(());
    };
    let set_cloud = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        notes.update(|n| n.filter.cloud = value);
        actions.load_notes.run(());
    };

    view! {
        <div class="notes-overlay" on:click=close></div>
        <aside class="notes-panel">
            <div class="notes-panel__header">
                <h2>"Notes"</h2>
                <button class="notes-panel__add" on:click=new_note>
                    "+ Add note"
                </button>
                <button class="notes-panel__close" title="Close" on:click=close>
                    "\u{2715}"
                </button>
            </div>
            <p class="notes-panel__description">
                "Record observations about addresses, e.g. a public IP attached as a secondary interface that the cloud does not report as used."
            </p>
            <div class="notes-panel__filters">
                <input
                    type="search"
                    placeholder="Search notes by title, content, or IP..."
                    prop:value=move || notes.with(|n| n.filter.search.clone())
                    on:input=set_search
                />
                <select prop:value=move || notes.with(|n| n.filter.cloud.clone()) on:change=set_cloud>
                    <option value=ALL_CLOUDS>"All clouds"</option>
                    {move || {
                        clouds
                            .get()
                            .into_iter()
                            .map(|name| {
                                let label = name.to_uppercase();
                                view! { <option value=name>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            {move || notes.with(|n| n.error.clone()).map(|message| view! { <div class="notes-panel__error">{message}</div> })}
            <Show when=move || notes.with(|n| n.form.is_some())>
                <NoteEditor clouds=clouds/>
            </Show>
            <div class="notes-panel__list">
                {move || {
                    let (items, loading) = notes.with(|n| (n.items.clone(), n.loading));
                    if loading && items.is_empty() {
                        return view! { <p class="notes-panel__empty">"Loading notes..."</p> }.into_any();
                    }
                    if items.is_empty() {
                        return view! { <p class="notes-panel__empty">"No notes yet."</p> }.into_any();
                    }
                    items.into_iter().map(|note| note_card(note, notes, actions)).collect_view().into_any()
                }}
            </div>
        </aside>
    }
}

#[component]
fn NoteEditor(clouds: Memo<Vec<String>>) -> impl IntoView {
    let notes = expect_context::<RwSignal<NotesState>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let actions = expect_context::<DashboardActions>();

    let field = move |read: fn(&NoteForm) -> &String| {
        move || notes.with(|n| n.form.as_ref().map(|f| read(f).clone()).unwrap_or_default())
    };
    let edit = move |apply: fn(&mut NoteForm, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            notes.update(|n| {
                if let Some(form) = n.form.as_mut() {
                    apply(form, value);
                }
            });
        }
    };

    let pools = move || {
        let cloud = notes.with(|n| n.form.as_ref().map(|f| f.cloud_name.clone()).unwrap_or_default());
        dashboard.with(|d| pools_for_cloud(d.snapshot.as_deref(), &cloud))
    };
    let editing = move || notes.with(|n| n.form.as_ref().and_then(|f| f.editing_id).is_some());
    let saving = move || notes.with(|n| n.saving);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        actions.save_note.run(());
    };

    view! {
        <form class="note-form" on:submit=submit>
            <h3>{move || if editing() { "Edit note" } else { "New note" }}</h3>
            <input
                type="text"
                placeholder="Title"
                prop:value=field(|f| &f.title)
                on:input=edit(|f, v| f.title = v)
            />
            <textarea
                placeholder="Content"
                rows="4"
                prop:value=field(|f| &f.content)
                on:input=edit(|f, v| f.content = v)
            ></textarea>
            <div class="note-form__row">
                <input
                    type="text"
                    placeholder="IP address (optional)"
                    prop:value=field(|f| &f.ip_address)
                    on:input=edit(|f, v| f.ip_address = v)
                />
                <select prop:value=field(|f| &f.cloud_name) on:change=edit(NoteForm::set_cloud)>
                    <option value="">"Cloud (optional)"</option>
                    {move || {
                        clouds
                            .get()
                            .into_iter()
                            .map(|name| {
                                let label = name.to_uppercase();
                                view! { <option value=name>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
                <select prop:value=field(|f| &f.pool_name) on:change=edit(|f, v| f.pool_name = v)>
                    <option value="">"Pool (optional)"</option>
                    {move || {
                        pools()
                            .into_iter()
                            .map(|name| {
                                let label = name.clone();
                                view! { <option value=name>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <div class="note-form__actions">
                <button type="button" class="note-form__cancel" on:click=move |_| notes.update(NotesState::close_form)>
                    "Cancel"
                </button>
                <button type="submit" class="note-form__save" disabled=saving>
                    {move || if saving() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </form>
    }
}

fn note_card(note: Note, notes: RwSignal<NotesState>, actions: DashboardActions) -> impl IntoView {
    let id = note.id;
    let stamp = note.updated_at.as_deref().or(note.created_at.as_deref()).map(format_local_time);
    let tags = [
        note.ip_address.clone().map(|ip| ("ip", ip)),
        note.cloud_name.as_ref().map(|cloud| ("cloud", cloud.to_uppercase())),
        note.pool_name.clone().map(|pool| ("pool", pool)),
    ]
    .into_iter()
    .flatten()
    .map(|(kind, text)| view! { <span class=format!("note-card__tag note-card__tag--{kind}")>{text}</span> })
    .collect_view();

    let on_edit = {
        let note = note.clone();
        move |_| notes.update(|n| n.edit(&note))
    };
    let on_delete = move |_| {
        if confirm("Delete this note?") {
            actions.delete_note.run(id);
        }
    };

    view! {
        <div class="note-card">
            <div class="note-card__header">
                <h4>{note.title}</h4>
                <div class="note-card__actions">
                    <button title="Edit" on:click=on_edit>
                        "\u{270E}"
                    </button>
                    <button title="Delete" on:click=on_delete>
                        "\u{1F5D1}"
                    </button>
                </div>
            </div>
            <p class="note-card__content">{note.content}</p>
            <div class="note-card__tags">{tags}</div>
            {stamp.map(|text| view! { <div class="note-card__date">{text}</div> })}
        </div>
    }
}
