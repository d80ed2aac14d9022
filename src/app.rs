//! Root application component and the bridge from UI events to the session
//! controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides the shared signals (`Session`, `DashboardState`, `UiState`,
//! `NotesState`), the resolved [`DashboardConfig`], and [`DashboardActions`]
//! as context. Pages and components read the signals and fire actions; only
//! this module holds the controller.
//!
//! DESIGN
//! ======
//! The controller is single-threaded (`Rc`, `RefCell`) while Leptos context
//! and callbacks must be `Send + Sync`, so it lives in a local
//! `StoredValue` and each action clones the `Rc` out before spawning its
//! task. The controller's listener mirrors every state change into the
//! session and dashboard signals. Without the `csr` feature the actions are
//! inert, which keeps native builds free of browser types.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::loading_spinner::LoadingSpinner;
use crate::config::DashboardConfig;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::dashboard::DashboardState;
use crate::state::notes::NotesState;
use crate::state::session::{Session, SessionPhase};
use crate::state::ui::UiState;

/// Every user-initiated operation the UI can trigger.
#[derive(Clone, Copy)]
pub struct DashboardActions {
    /// Direct-mode sign in with `(username, password)`.
    pub login: Callback<(String, String)>,
    /// Begin the configured login flow; redirects in OIDC mode.
    pub start_sso: Callback<()>,
    pub logout: Callback<()>,
    /// Refresh tokens, then reload the snapshot.
    pub refresh: Callback<()>,
    /// Reload the snapshot with the current tokens.
    pub retry: Callback<()>,
    pub dismiss_conflicts: Callback<()>,
    pub toggle_conflicts: Callback<()>,
    /// Reload notes with the current filter.
    pub load_notes: Callback<()>,
    /// Persist the open note form.
    pub save_note: Callback<()>,
    pub delete_note: Callback<i64>,
}

impl DashboardActions {
    #[cfg(not(feature = "csr"))]
    fn inert() -> Self {
        Self {
            login: Callback::new(|_| {}),
            start_sso: Callback::new(|()| {}),
            logout: Callback::new(|()| {}),
            refresh: Callback::new(|()| {}),
            retry: Callback::new(|()| {}),
            dismiss_conflicts: Callback::new(|()| {}),
            toggle_conflicts: Callback::new(|()| {}),
            load_notes: Callback::new(|()| {}),
            save_note: Callback::new(|()| {}),
            delete_note: Callback::new(|_| {}),
        }
    }
}

/// Root application component.
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    let dashboard = RwSignal::new(DashboardState::default());
    let ui = RwSignal::new(UiState::default());
    let notes = RwSignal::new(NotesState::default());

    provide_context(session);
    provide_context(dashboard);
    provide_context(ui);
    provide_context(notes);

    #[cfg(feature = "csr")]
    let actions = browser::connect(&config, session, dashboard, ui, notes);
    #[cfg(not(feature = "csr"))]
    let actions = {
        ui.update(|u| u.booting = false);
        DashboardActions::inert()
    };

    provide_context(actions);
    provide_context(config);

    let phase = Memo::new(move |_| session.with(Session::phase));
    let booting = Memo::new(move |_| ui.with(|u| u.booting));

    view! {
        <Title text="VCD IP Manager"/>
        {move || match phase.get() {
            SessionPhase::CallbackPending => view! { <LoadingSpinner message="Completing sign-in..."/> }.into_any(),
            SessionPhase::Authenticated => view! { <DashboardPage/> }.into_any(),
            SessionPhase::Unauthenticated if booting.get() => {
                view! { <LoadingSpinner message="Checking session..."/> }.into_any()
            }
            SessionPhase::Unauthenticated => view! { <LoginPage/> }.into_any(),
        }}
    }
}

#[cfg(feature = "csr")]
mod browser {
    use std::rc::Rc;

    use leptos::prelude::*;
    use leptos::task::spawn_local;

    use super::DashboardActions;
    use crate::config::DashboardConfig;
    use crate::net::api::ApiClient;
    use crate::net::transport::GlooTransport;
    use crate::services::navigator::BrowserNavigator;
    use crate::services::session::SessionController;
    use crate::state::dashboard::DashboardState;
    use crate::state::notes::NotesState;
    use crate::state::session::{Session, SessionPhase};
    use crate::state::token_store::LocalStorageTokenStore;
    use crate::state::ui::UiState;

    type Controller = SessionController<GlooTransport, LocalStorageTokenStore, BrowserNavigator>;

    pub(super) fn connect(
        config: &DashboardConfig,
        session: RwSignal<Session>,
        dashboard: RwSignal<DashboardState>,
        ui: RwSignal<UiState>,
        notes: RwSignal<NotesState>,
    ) -> DashboardActions {
        let api = ApiClient::new(GlooTransport, config.api_base_url.clone());
        let controller = Rc::new(Controller::new(api, LocalStorageTokenStore, BrowserNavigator, config.strategy()));

        controller.set_listener(move |s, d| {
            if s.phase() == SessionPhase::Unauthenticated {
                notes.update(|n| *n = NotesState::default());
                ui.update(|u| u.notes_open = false);
            }
            session.set(s.clone());
            dashboard.set(d.clone());
        });

        let boot = Rc::clone(&controller);
        spawn_local(async move {
            let phase = boot.start().await;
            log::info!("session: startup resolved to {phase:?}");
            ui.update(|u| u.booting = false);
        });

        let handle = StoredValue::new_local(controller);

        DashboardActions {
            login: Callback::new(move |(username, password): (String, String)| {
                let controller = handle.get_value();
                ui.update(|u| u.signing_in = true);
                spawn_local(async move {
                    controller.submit_credentials(&username, &password).await;
                    ui.update(|u| u.signing_in = false);
                });
            }),
            start_sso: Callback::new(move |()| {
                let step = handle.get_value().initiate_login();
                log::debug!("session: login step {step:?}");
            }),
            logout: Callback::new(move |()| {
                let controller = handle.get_value();
                spawn_local(async move { controller.logout().await });
            }),
            refresh: Callback::new(move |()| {
                let controller = handle.get_value();
                spawn_local(async move { controller.refresh_session().await });
            }),
            retry: Callback::new(move |()| {
                let controller = handle.get_value();
                spawn_local(async move { controller.load().await });
            }),
            dismiss_conflicts: Callback::new(move |()| handle.get_value().dismiss_conflicts()),
            toggle_conflicts: Callback::new(move |()| handle.get_value().toggle_conflicts()),
            load_notes: Callback::new(move |()| {
                let controller = handle.get_value();
                let generation = controller.generation();
                let filter = notes.with_untracked(|n| n.filter.clone());
                notes.update(NotesState::begin_load);
                spawn_local(async move {
                    let result = controller.load_notes(&filter).await.map_err(|err| err.user_message());
                    if controller.is_current(generation) && controller.session().is_authenticated() {
                        notes.update(|n| n.finish_load(result));
                    }
                });
            }),
            save_note: Callback::new(move |()| {
                let controller = handle.get_value();
                let Some((form, filter)) = notes.with_untracked(|n| n.form.clone().map(|f| (f, n.filter.clone())))
                else {
                    return;
                };
                let generation = controller.generation();
                notes.update(NotesState::begin_save);
                spawn_local(async move {
                    let result = controller.save_note(&form, &filter).await.map_err(|err| err.user_message());
                    if controller.is_current(generation) && controller.session().is_authenticated() {
                        notes.update(|n| n.finish_save(result));
                    }
                });
            }),
            delete_note: Callback::new(move |id: i64| {
                let controller = handle.get_value();
                let generation = controller.generation();
                let filter = notes.with_untracked(|n| n.filter.clone());
                notes.update(NotesState::begin_load);
                spawn_local(async move {
                    let result = controller.delete_note(id, &filter).await.map_err(|err| err.user_message());
                    if controller.is_current(generation) && controller.session().is_authenticated() {
                        notes.update(|n| n.finish_load(result));
                    }
                });
            }),
        }
    }
}
