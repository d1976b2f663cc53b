use crate::load_ticket::LoadTicket;
use crate::{
    AuthProvider, DataStore, ProfilePhase, SessionError, SessionPhase, SessionResult,
    SessionSnapshot,
};

use boase_core::{AuthEvent, Identity};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{RwLock, watch};
use tokio::task::JoinHandle;

/// Keeps profile, skills and teams consistent with the signed-in identity.
///
/// Cloning is cheap; all clones share the same state.
#[derive(Clone)]
pub struct ProfileSessionCoordinator {
    inner: Arc<CoordinatorInner>,
}

struct CoordinatorInner {
    auth: Arc<dyn AuthProvider>,
    store: Arc<dyn DataStore>,
    state: RwLock<SessionSnapshot>,
    mounted: watch::Sender<bool>,
    /// Bumped on every identity change; results carrying an older value are dropped.
    epoch: AtomicU64,
}

impl ProfileSessionCoordinator {
    pub fn new(auth: Arc<dyn AuthProvider>, store: Arc<dyn DataStore>) -> Self {
        let (mounted, _) = watch::channel(false);
        Self {
            inner: Arc::new(CoordinatorInner {
                auth,
                store,
                state: RwLock::new(SessionSnapshot::default()),
                mounted,
                epoch: AtomicU64::new(0),
            }),
        }
    }

    /// Resolve the current identity and load its data.
    ///
    /// Identity resolution failures degrade to "no identity" with
    /// `auth_error` set.
    pub async fn mount(&self) {
        self.inner.mounted.send_replace(true);
        {
            let mut state = self.inner.state.write().await;
            state.phase = SessionPhase::ResolvingIdentity;
        }

        let identity = self.resolve_identity().await;
        self.set_identity(identity).await;
    }

    /// Follow the provider's identity feed until unmount or until the feed closes.
    ///
    /// Call after [`mount`](Self::mount); an unmounted coordinator stops
    /// listening immediately.
    pub fn listen(&self) -> JoinHandle<()> {
        let coordinator = self.clone();
        let mut events = self.inner.auth.subscribe();
        let mut mounted = self.inner.mounted.subscribe();

        tokio::spawn(async move {
            loop {
                if !*mounted.borrow_and_update() {
                    log::debug!("Coordinator unmounted, auth listener stopping");
                    break;
                }

                tokio::select! {
                    changed = mounted.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }

                    received = events.recv() => {
                        match received {
                            Ok(event) => coordinator.route_event(event).await,
                            Err(RecvError::Lagged(missed)) => {
                                log::warn!(
                                    "Auth listener lagged, missed {} events; re-resolving identity",
                                    missed
                                );
                                let identity = coordinator.resolve_identity().await;
                                if coordinator.transition(identity).await {
                                    coordinator.spawn_load();
                                }
                            }
                            Err(RecvError::Closed) => {
                                log::info!("Auth event feed closed, auth listener stopping");
                                break;
                            }
                        }
                    }
                }
            }
        })
    }

    /// Apply an auth event and, if the identity changed, load for the new one.
    pub async fn handle_auth_event(&self, event: AuthEvent) {
        log::debug!("Handling auth event {}", event.as_str());
        self.set_identity(event.identity().cloned()).await;
    }

    /// Adopt `identity`. A different id clears all derived state before the
    /// new load starts; the same id only refreshes the cached record.
    pub async fn set_identity(&self, identity: Option<Identity>) {
        if self.transition(identity).await {
            self.load().await;
        }
    }

    /// Load profile, skills and teams for the current identity.
    ///
    /// Does nothing when a load for this identity is already in flight or done.
    pub async fn load(&self) {
        if let Some(ticket) = self.begin_load(false).await {
            self.run_load(ticket).await;
        }
    }

    /// Reload everything for the current identity, even if already loaded.
    pub async fn refresh(&self) {
        if let Some(ticket) = self.begin_load(true).await {
            self.run_load(ticket).await;
        }
    }

    /// Reload only the team list.
    pub async fn refresh_teams(&self) {
        let Some(ticket) = self.current_ticket().await else {
            log::debug!("Team refresh skipped: no identity");
            return;
        };

        self.apply(ticket, |state| {
            state.teams_loading = true;
            state.teams_error = None;
        })
        .await;
        self.load_teams(ticket).await;
    }

    /// Stop applying updates. In-flight results are discarded when they arrive.
    pub fn unmount(&self) {
        self.inner.mounted.send_replace(false);
        log::info!("Profile session coordinator unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        *self.inner.mounted.borrow()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.inner.state.read().await.clone()
    }

    /// Sign out with the provider and clear local state without waiting for
    /// the sign-out event.
    pub async fn sign_out(&self) -> SessionResult<()> {
        let result = self.inner.auth.sign_out().await;

        if self.transition(None).await {
            log::info!("Signed out, session state cleared");
        }

        result.map_err(|e| {
            let err = SessionError::sign_out(&e);
            log::warn!("{}", err);
            err
        })
    }

    pub(crate) fn store(&self) -> &dyn DataStore {
        self.inner.store.as_ref()
    }

    /// Ticket for a mutation; marks the session as saving.
    pub(crate) async fn begin_mutation(&self) -> SessionResult<LoadTicket> {
        self.begin_mutation_with(|_| ())
            .await
            .map(|(ticket, ())| ticket)
    }

    /// Like [`begin_mutation`](Self::begin_mutation), also reading `read`
    /// from the state under the same lock.
    pub(crate) async fn begin_mutation_with<T, F>(&self, read: F) -> SessionResult<(LoadTicket, T)>
    where
        F: FnOnce(&SessionSnapshot) -> T,
    {
        let mut state = self.inner.state.write().await;
        let Some(user_id) = state.user_id() else {
            return Err(SessionError::no_identity());
        };

        let value = read(&state);
        state.saving = true;
        state.success_message = None;
        Ok((
            LoadTicket {
                epoch: self.inner.epoch.load(Ordering::SeqCst),
                user_id,
            },
            value,
        ))
    }

    /// Clear the saving flag and apply `update` if the ticket is still current.
    pub(crate) async fn finish_mutation<F>(&self, ticket: LoadTicket, update: F) -> bool
    where
        F: FnOnce(&mut SessionSnapshot),
    {
        self.apply(ticket, |state| {
            state.saving = false;
            update(state);
        })
        .await
    }

    /// Apply `update` only if still mounted and the identity has not changed
    /// since `ticket` was taken.
    pub(crate) async fn apply<F>(&self, ticket: LoadTicket, update: F) -> bool
    where
        F: FnOnce(&mut SessionSnapshot),
    {
        let mut state = self.inner.state.write().await;

        if !self.is_mounted() {
            log::debug!("Discarding result for {}: unmounted", ticket.user_id);
            return false;
        }
        if self.inner.epoch.load(Ordering::SeqCst) != ticket.epoch
            || state.user_id() != Some(ticket.user_id)
        {
            log::debug!("Discarding stale result for {}", ticket.user_id);
            return false;
        }

        update(&mut state);
        true
    }

    pub(crate) async fn current_ticket(&self) -> Option<LoadTicket> {
        let state = self.inner.state.read().await;
        state.user_id().map(|user_id| LoadTicket {
            epoch: self.inner.epoch.load(Ordering::SeqCst),
            user_id,
        })
    }

    async fn resolve_identity(&self) -> Option<Identity> {
        match self.inner.auth.current_identity().await {
            Ok(identity) => {
                self.inner.state.write().await.auth_error = None;
                identity
            }
            Err(e) => {
                let err = SessionError::auth_fetch(&e);
                log::warn!("{}", err);
                self.inner.state.write().await.auth_error = Some(err.user_message());
                None
            }
        }
    }

    /// Route a feed event without blocking the listener on the follow-up load.
    async fn route_event(&self, event: AuthEvent) {
        log::debug!("Received auth event {}", event.as_str());
        if self.transition(event.identity().cloned()).await {
            self.spawn_load();
        }
    }

    fn spawn_load(&self) {
        let coordinator = self.clone();
        tokio::spawn(async move {
            coordinator.load().await;
        });
    }

    /// Returns true if the identity changed (or was first resolved).
    async fn transition(&self, identity: Option<Identity>) -> bool {
        let mut state = self.inner.state.write().await;

        if !self.is_mounted() {
            log::debug!("Identity change ignored: unmounted");
            return false;
        }

        let settled = matches!(
            state.phase,
            SessionPhase::NoIdentity | SessionPhase::IdentityKnown
        );
        let next_id = identity.as_ref().map(|i| i.id);

        if settled && state.user_id() == next_id {
            if identity.is_some() {
                state.identity = identity;
            }
            return false;
        }

        let epoch = self.inner.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        match &identity {
            Some(identity) => log::info!("Identity changed to {} (epoch {})", identity.id, epoch),
            None => log::info!("Identity cleared (epoch {})", epoch),
        }
        state.reset_for(identity);
        true
    }

    async fn begin_load(&self, force: bool) -> Option<LoadTicket> {
        let mut state = self.inner.state.write().await;

        if !self.is_mounted() {
            log::debug!("Load skipped: unmounted");
            return None;
        }
        let user_id = state.user_id()?;

        if !force && state.profile_phase.covers(user_id) {
            log::debug!("Load for {} already in flight or done", user_id);
            return None;
        }

        state.profile_phase = ProfilePhase::Loading(user_id);
        state.profile_loading = true;
        state.profile_error = None;
        state.skills_loading = true;
        state.skills_error = None;
        state.teams_loading = true;
        state.teams_error = None;

        Some(LoadTicket {
            epoch: self.inner.epoch.load(Ordering::SeqCst),
            user_id,
        })
    }

    async fn run_load(&self, ticket: LoadTicket) {
        log::debug!("Loading session data for {}", ticket.user_id);

        tokio::join!(
            self.load_profile(ticket),
            self.load_skills(ticket),
            self.load_teams(ticket),
        );

        self.apply(ticket, |state| {
            state.profile_phase = ProfilePhase::Loaded(ticket.user_id);
        })
        .await;
    }

    async fn load_profile(&self, ticket: LoadTicket) {
        let result = self.inner.store.get_profile(ticket.user_id).await;

        self.apply(ticket, |state| {
            match result {
                Ok(Some(profile)) => {
                    state.profile = Some(profile);
                    state.profile_error = None;
                }
                Ok(None) => {
                    let err = SessionError::profile_fetch("no profile exists yet");
                    log::warn!("{}", err);
                    state.profile = None;
                    state.profile_error = Some(err.user_message());
                }
                Err(e) => {
                    let err = SessionError::profile_fetch(e.message());
                    log::warn!("{}", err);
                    state.profile_error = Some(err.user_message());
                }
            }
            state.profile_loading = false;
        })
        .await;
    }

    async fn load_skills(&self, ticket: LoadTicket) {
        let catalog_cached = !self.inner.state.read().await.skill_catalog.is_empty();

        let (mut catalog, selected) = tokio::join!(
            async {
                if catalog_cached {
                    None
                } else {
                    Some(self.inner.store.list_skills().await)
                }
            },
            self.inner.store.list_user_skills(ticket.user_id),
        );

        // a selection can reference a skill created after the catalog was cached
        if catalog.is_none() {
            if let Ok(ids) = &selected {
                if self.inner.state.read().await.has_unknown_skills(ids) {
                    log::debug!("Selected skills missing from cached catalog, refetching");
                    catalog = Some(self.inner.store.list_skills().await);
                }
            }
        }

        self.apply(ticket, |state| {
            let mut error = None;

            match catalog {
                Some(Ok(skills)) => state.set_skill_catalog(skills),
                Some(Err(e)) => error = Some(SessionError::skills_fetch(&e)),
                None => {}
            }
            match selected {
                Ok(ids) => state.set_selected_skill_ids(ids),
                Err(e) => {
                    error.get_or_insert_with(|| SessionError::skills_fetch(&e));
                }
            }

            if let Some(err) = error {
                log::warn!("{}", err);
                state.skills_error = Some(err.user_message());
            } else {
                state.skills_error = None;
            }
            state.skills_loading = false;
        })
        .await;
    }

    async fn load_teams(&self, ticket: LoadTicket) {
        let result = self.inner.store.list_user_teams(ticket.user_id).await;

        self.apply(ticket, |state| {
            match result {
                Ok(teams) => {
                    state.teams = teams;
                    state.teams_error = None;
                }
                Err(e) => {
                    let err = SessionError::teams_fetch(&e);
                    log::warn!("{}", err);
                    state.teams_error = Some(err.user_message());
                }
            }
            state.teams_loading = false;
        })
        .await;
    }
}
