//! # Admin console: state machine and effect driver
//!
//! The console has two phases:
//!
//! | Phase | Holds |
//! |-------|-------|
//! | [`Phase::LoggedOut`] | nothing; only the login form is available |
//! | [`Phase::LoggedIn`] | a [`Workspace`]: credential, active collection, list, draft |
//!
//! [`ConsoleState`] owns every transition and is plain data, so the Dioxus
//! views keep it in a `Signal` and tests drive it directly. Anything that
//! touches the network is split in three steps:
//!
//! 1. ask the state for a request (`list_request`, `submit_request`,
//!    `confirm_delete`). It returns `None` while logged out, so no admin call
//!    can be formed without a credential.
//! 2. run it through [`Console`] (`load`, `submit`, `delete`).
//! 3. hand the outcome back to the state (`apply_list`, `apply_submit`,
//!    `apply_delete`). Mutations report whether the list must be refetched;
//!    the list is never patched locally.
//!
//! List requests carry the collection they were issued for and a ticket
//! drawn from a counter that keeps growing across sessions. A response is
//! dropped if the console logged out, switched collection, or issued a newer
//! list request in the meantime. Submit and delete outcomes carry the
//! [`SessionTag`] of the login they were issued under and are dropped once
//! that session has ended, even if the same administrator signed in again.

use api::{ApiClient, ApiError, Collection, Credential, Field, Record, RecordId, Transport};
use store::{KeyValueStore, SessionStore};

/// Shown when the server refuses a login.
pub const LOGIN_FAILED: &str = "Login failed: only the designated administrator is permitted.";

/// Question asked before any delete is sent.
pub const DELETE_PROMPT: &str = "Delete this entry?";

/// Identifies one signed-in session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionTag(u64);

/// Everything the console holds while an administrator is signed in.
#[derive(Clone, Debug, PartialEq)]
pub struct Workspace {
    pub credential: Credential,
    pub active: Collection,
    /// Last list fetched for `active`, replaced wholesale on every load.
    pub list: Vec<Record>,
    /// The single form draft. Empty means "nothing being edited".
    pub draft: Record,
    pub loading: bool,
    pub saving: bool,
    /// Failure banner text for the active collection.
    pub error: Option<String>,
    /// Item waiting for delete confirmation.
    pub pending_delete: Option<RecordId>,
    session: SessionTag,
    /// Latest list ticket issued.
    ticket: u64,
}

impl Workspace {
    fn new(credential: Credential, session: SessionTag) -> Self {
        Self {
            credential,
            active: Collection::ALL[0],
            list: Vec::new(),
            draft: Record::new(),
            loading: false,
            saving: false,
            error: None,
            pending_delete: None,
            session,
            ticket: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    LoggedOut,
    LoggedIn(Workspace),
}

/// A list fetch the state has authorized.
#[derive(Clone, Debug, PartialEq)]
pub struct ListRequest {
    pub collection: Collection,
    pub credential: Credential,
    ticket: u64,
}

/// Result of a [`ListRequest`], still tagged with what it was issued for.
#[derive(Clone, Debug, PartialEq)]
pub struct ListLoaded {
    pub collection: Collection,
    pub result: Result<Vec<Record>, ApiError>,
    ticket: u64,
}

/// Create or update, decided by whether the draft carries an id.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitRequest {
    Create {
        collection: Collection,
        credential: Credential,
        record: Record,
        session: SessionTag,
    },
    Update {
        collection: Collection,
        id: RecordId,
        credential: Credential,
        record: Record,
        session: SessionTag,
    },
}

impl SubmitRequest {
    pub fn collection(&self) -> Collection {
        match self {
            SubmitRequest::Create { collection, .. } | SubmitRequest::Update { collection, .. } => {
                *collection
            }
        }
    }

    fn session(&self) -> SessionTag {
        match self {
            SubmitRequest::Create { session, .. } | SubmitRequest::Update { session, .. } => {
                *session
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmitDone {
    pub collection: Collection,
    pub result: Result<(), ApiError>,
    session: SessionTag,
}

/// A confirmed delete.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteRequest {
    pub collection: Collection,
    pub id: RecordId,
    pub credential: Credential,
    session: SessionTag,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeleteDone {
    pub collection: Collection,
    pub result: Result<(), ApiError>,
    session: SessionTag,
}

/// The console state machine.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsoleState {
    pub phase: Phase,
    /// Login-form message (e.g. [`LOGIN_FAILED`]).
    pub notice: Option<String>,
    /// Source of session tags and list tickets. Never reset.
    counter: u64,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self {
            phase: Phase::LoggedOut,
            notice: None,
            counter: 0,
        }
    }
}

impl ConsoleState {
    /// Initial state from whatever the session store had persisted.
    pub fn restored(credential: Option<Credential>) -> Self {
        let mut state = Self::default();
        if let Some(credential) = credential {
            state.logged_in(credential);
        }
        state
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.phase, Phase::LoggedIn(_))
    }

    pub fn workspace(&self) -> Option<&Workspace> {
        match &self.phase {
            Phase::LoggedIn(ws) => Some(ws),
            Phase::LoggedOut => None,
        }
    }

    fn workspace_mut(&mut self) -> Option<&mut Workspace> {
        match &mut self.phase {
            Phase::LoggedIn(ws) => Some(ws),
            Phase::LoggedOut => None,
        }
    }

    /// Signed-in identity.
    pub fn identity(&self) -> Option<&str> {
        self.workspace().map(|ws| ws.credential.email.as_str())
    }

    /// The collection whose list should be loaded, if any. Changes whenever
    /// the active collection changes or the console becomes authenticated.
    pub fn fetch_key(&self) -> Option<Collection> {
        self.workspace().map(|ws| ws.active)
    }

    fn next(&mut self) -> u64 {
        self.counter += 1;
        self.counter
    }

    pub fn logged_in(&mut self, credential: Credential) {
        let session = SessionTag(self.next());
        self.phase = Phase::LoggedIn(Workspace::new(credential, session));
        self.notice = None;
    }

    pub fn login_failed(&mut self) {
        self.notice = Some(LOGIN_FAILED.to_string());
    }

    pub fn logged_out(&mut self) {
        self.phase = Phase::LoggedOut;
        self.notice = None;
    }

    /// Select another collection. Drops the draft and the list; returns
    /// `false` if nothing changed.
    pub fn switch_collection(&mut self, collection: Collection) -> bool {
        let Some(ws) = self.workspace_mut() else {
            return false;
        };
        if ws.active == collection {
            return false;
        }
        ws.active = collection;
        ws.list.clear();
        ws.draft = Record::new();
        ws.error = None;
        ws.pending_delete = None;
        ws.loading = false;
        ws.saving = false;
        true
    }

    /// Copy a list item into the draft, id included.
    pub fn begin_edit(&mut self, record: Record) {
        if let Some(ws) = self.workspace_mut() {
            ws.draft = record;
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if let Some(ws) = self.workspace_mut() {
            field.set(&mut ws.draft, value);
        }
    }

    pub fn reset_draft(&mut self) {
        if let Some(ws) = self.workspace_mut() {
            ws.draft = Record::new();
        }
    }

    pub fn dismiss_error(&mut self) {
        if let Some(ws) = self.workspace_mut() {
            ws.error = None;
        }
    }

    /// Authorize a list load for the active collection.
    pub fn list_request(&mut self) -> Option<ListRequest> {
        if !self.is_logged_in() {
            return None;
        }
        let ticket = self.next();
        let ws = self.workspace_mut()?;
        ws.ticket = ticket;
        ws.loading = true;
        ws.error = None;
        Some(ListRequest {
            collection: ws.active,
            credential: ws.credential.clone(),
            ticket: ws.ticket,
        })
    }

    /// Apply a finished list load. Returns `false` for stale responses.
    pub fn apply_list(&mut self, loaded: ListLoaded) -> bool {
        let Some(ws) = self.workspace_mut() else {
            return false;
        };
        if loaded.collection != ws.active || loaded.ticket != ws.ticket {
            tracing::debug!(collection = %loaded.collection, "dropping stale list response");
            return false;
        }
        ws.loading = false;
        match loaded.result {
            Ok(list) => {
                ws.list = list;
                ws.error = None;
            }
            Err(e) => {
                ws.list.clear();
                ws.error = Some(e.to_string());
            }
        }
        true
    }

    /// Authorize a submission of the current draft.
    pub fn submit_request(&mut self) -> Option<SubmitRequest> {
        let ws = self.workspace_mut()?;
        ws.saving = true;
        let collection = ws.active;
        let credential = ws.credential.clone();
        let record = ws.draft.clone();
        let session = ws.session;
        Some(match record.id.clone() {
            Some(id) => SubmitRequest::Update {
                collection,
                id,
                credential,
                record,
                session,
            },
            None => SubmitRequest::Create {
                collection,
                credential,
                record,
                session,
            },
        })
    }

    /// Apply a finished submission. On success the draft is cleared and the
    /// caller must refetch (`true`); on failure the draft stays for a retry.
    pub fn apply_submit(&mut self, done: SubmitDone) -> bool {
        let Some(ws) = self.workspace_mut() else {
            return false;
        };
        if done.session != ws.session || done.collection != ws.active {
            tracing::debug!(collection = %done.collection, "dropping stale submit outcome");
            return false;
        }
        ws.saving = false;
        match done.result {
            Ok(()) => {
                ws.draft = Record::new();
                true
            }
            Err(e) => {
                ws.error = Some(e.to_string());
                false
            }
        }
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: RecordId) {
        if let Some(ws) = self.workspace_mut() {
            ws.pending_delete = Some(id);
        }
    }

    /// Answer the pending confirmation. Only an affirmative answer yields a
    /// request; either way the question is closed.
    pub fn confirm_delete(&mut self, affirmative: bool) -> Option<DeleteRequest> {
        let ws = self.workspace_mut()?;
        let id = ws.pending_delete.take()?;
        if !affirmative {
            return None;
        }
        Some(DeleteRequest {
            collection: ws.active,
            id,
            credential: ws.credential.clone(),
            session: ws.session,
        })
    }

    /// Apply a finished delete. Returns `true` if the list must be refetched.
    pub fn apply_delete(&mut self, done: DeleteDone) -> bool {
        let Some(ws) = self.workspace_mut() else {
            return false;
        };
        if done.session != ws.session || done.collection != ws.active {
            tracing::debug!(collection = %done.collection, "dropping stale delete outcome");
            return false;
        }
        match done.result {
            Ok(()) => true,
            Err(e) => {
                ws.error = Some(e.to_string());
                false
            }
        }
    }

    /// Credential to send with the logout call.
    pub fn logout_request(&self) -> Option<Credential> {
        self.workspace().map(|ws| ws.credential.clone())
    }
}

/// Runs console requests against the API and keeps the session store in
/// step with logins and logouts.
#[derive(Clone, Debug)]
pub struct Console<T: Transport, S: KeyValueStore> {
    api: ApiClient<T>,
    session: SessionStore<S>,
}

impl<T: Transport, S: KeyValueStore> Console<T, S> {
    pub fn new(api: ApiClient<T>, session: SessionStore<S>) -> Self {
        Self { api, session }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Initial state. No network call; a stale token shows up on first use.
    pub fn restore(&self) -> ConsoleState {
        ConsoleState::restored(self.session.restore())
    }

    /// Exchange an email for a credential and persist it.
    pub async fn login(&self, email: &str) -> Result<Credential, ApiError> {
        let credential = self.api.login(email.trim()).await.inspect_err(|e| {
            tracing::warn!("login refused: {}", e);
        })?;
        self.session.save(&credential);
        tracing::info!(email = %credential.email, "administrator signed in");
        Ok(credential)
    }

    pub async fn load(&self, request: ListRequest) -> ListLoaded {
        let result = self
            .api
            .admin_list(request.collection, &request.credential)
            .await;
        ListLoaded {
            collection: request.collection,
            result,
            ticket: request.ticket,
        }
    }

    pub async fn submit(&self, request: SubmitRequest) -> SubmitDone {
        let collection = request.collection();
        let session = request.session();
        let result = match &request {
            SubmitRequest::Create {
                credential, record, ..
            } => self.api.admin_create(collection, credential, record).await,
            SubmitRequest::Update {
                id,
                credential,
                record,
                ..
            } => self.api.admin_update(collection, id, credential, record).await,
        };
        SubmitDone {
            collection,
            result: result.map(|_| ()),
            session,
        }
    }

    pub async fn delete(&self, request: DeleteRequest) -> DeleteDone {
        let result = self
            .api
            .admin_delete(request.collection, &request.id, &request.credential)
            .await;
        DeleteDone {
            collection: request.collection,
            result: result.map(|_| ()),
            session: request.session,
        }
    }

    /// Best-effort remote logout, then an unconditional local clear.
    pub async fn logout(&self, credential: Option<Credential>) {
        if let Some(credential) = credential {
            if let Err(e) = self.api.logout(&credential).await {
                tracing::warn!("remote logout failed, clearing local session anyway: {}", e);
            }
        }
        self.session.clear();
    }

    /// Load the active list and apply it in one go.
    pub async fn refresh(&self, state: &mut ConsoleState) -> bool {
        let Some(request) = state.list_request() else {
            return false;
        };
        let loaded = self.load(request).await;
        state.apply_list(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiConfig, HttpResponse, Method, RecordingTransport, CREDENTIAL_HEADER};
    use serde_json::json;
    use store::{MemoryStore, EMAIL_KEY, TOKEN_KEY};

    struct Harness {
        console: Console<RecordingTransport, MemoryStore>,
        transport: RecordingTransport,
        storage: MemoryStore,
    }

    fn harness() -> Harness {
        let transport = RecordingTransport::new();
        let storage = MemoryStore::new();
        let console = Console::new(
            ApiClient::new(ApiConfig::new("http://api.test"), transport.clone()),
            SessionStore::new(storage.clone()),
        );
        Harness {
            console,
            transport,
            storage,
        }
    }

    fn admin() -> Credential {
        Credential::new("abc123", "admin@example.org")
    }

    fn signed_in() -> ConsoleState {
        ConsoleState::restored(Some(admin()))
    }

    fn ws(state: &ConsoleState) -> &Workspace {
        state.workspace().expect("logged in")
    }

    #[test]
    fn test_restore_with_persisted_session() {
        let h = harness();
        h.storage.set(TOKEN_KEY, "T");
        h.storage.set(EMAIL_KEY, "E");

        let state = h.console.restore();
        assert_eq!(state.identity(), Some("E"));
        assert_eq!(ws(&state).active, Collection::NewsArticle);
        assert!(ws(&state).draft.is_empty());
        assert!(h.transport.requests().is_empty());
    }

    #[test]
    fn test_restore_without_session() {
        let h = harness();
        let state = h.console.restore();
        assert_eq!(state.phase, Phase::LoggedOut);
        assert_eq!(state.fetch_key(), None);
    }

    #[tokio::test]
    async fn test_logged_out_console_issues_no_admin_calls() {
        let h = harness();
        let mut state = h.console.restore();

        state.set_field(Field::Title, "ignored");
        state.request_delete(RecordId::new("1"));
        assert_eq!(state.list_request(), None);
        assert_eq!(state.submit_request(), None);
        assert_eq!(state.confirm_delete(true), None);
        assert!(!h.console.refresh(&mut state).await);

        assert!(h.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_console_logged_out() {
        let h = harness();
        h.transport.respond(HttpResponse::new(403, "not allowed"));
        let mut state = h.console.restore();

        match h.console.login("someone@example.org").await {
            Ok(credential) => state.logged_in(credential),
            Err(_) => state.login_failed(),
        }

        assert_eq!(state.phase, Phase::LoggedOut);
        assert_eq!(state.notice.as_deref(), Some(LOGIN_FAILED));
        assert!(h.storage.is_empty());
        assert_eq!(h.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_successful_login_persists_and_selects_first_collection() {
        let h = harness();
        h.transport
            .respond_json(200, json!({"token": "abc123", "email": "admin@example.org"}));
        let mut state = h.console.restore();
        state.login_failed();

        let credential = h.console.login("  admin@example.org ").await.unwrap();
        state.logged_in(credential);

        assert_eq!(state.notice, None);
        assert_eq!(state.fetch_key(), Some(Collection::NewsArticle));
        assert_eq!(h.console.session().restore(), Some(admin()));
        assert_eq!(
            h.transport.requests()[0].json_body(),
            Some(json!({"email": "admin@example.org"}))
        );
    }

    #[test]
    fn test_draft_without_id_submits_create() {
        let mut state = signed_in();
        state.set_field(Field::Title, "Fresh");

        match state.submit_request() {
            Some(SubmitRequest::Create {
                collection, record, ..
            }) => {
                assert_eq!(collection, Collection::NewsArticle);
                assert_eq!(record.title.as_deref(), Some("Fresh"));
            }
            other => panic!("expected create, got {other:?}"),
        }
        assert!(ws(&state).saving);
    }

    #[test]
    fn test_draft_with_id_submits_update_for_that_id() {
        let mut state = signed_in();
        state.begin_edit(Record::new().with_id("42").with(Field::Title, "Old"));
        state.set_field(Field::Title, "Updated");

        match state.submit_request() {
            Some(SubmitRequest::Update { id, record, .. }) => {
                assert_eq!(id, RecordId::new("42"));
                assert_eq!(record.title.as_deref(), Some("Updated"));
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_then_list_comes_from_fresh_fetch() {
        let h = harness();
        let mut state = signed_in();
        h.transport.respond_json(200, json!([]));
        assert!(h.console.refresh(&mut state).await);
        assert!(ws(&state).list.is_empty());

        state.set_field(Field::Title, "X");
        h.transport.respond_json(201, json!({"_id": "1"}));
        h.transport
            .respond_json(200, json!([{"_id": "1", "title": "X", "created_by": "server"}]));

        let request = state.submit_request().unwrap();
        let done = h.console.submit(request).await;
        assert!(state.apply_submit(done));
        assert!(ws(&state).draft.is_empty());
        assert!(ws(&state).list.is_empty());

        assert!(h.console.refresh(&mut state).await);
        let list = &ws(&state).list;
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title.as_deref(), Some("X"));
        assert_eq!(list[0].extra.get("created_by"), Some(&json!("server")));

        let methods: Vec<Method> = h.transport.requests().iter().map(|r| r.method).collect();
        assert_eq!(methods, vec![Method::Get, Method::Post, Method::Get]);
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_draft() {
        let h = harness();
        let mut state = signed_in();
        state.set_field(Field::Content, "<p>draft</p>");
        h.transport.respond(HttpResponse::new(422, "title is required"));

        let done = h.console.submit(state.submit_request().unwrap()).await;
        assert!(!state.apply_submit(done));

        let ws = ws(&state);
        assert_eq!(ws.draft.content.as_deref(), Some("<p>draft</p>"));
        assert_eq!(ws.error.as_deref(), Some("title is required"));
        assert!(!ws.saving);
    }

    #[test]
    fn test_switch_collection_discards_draft() {
        let mut state = signed_in();
        state.begin_edit(Record::new().with_id("7").with(Field::Title, "Unsaved"));
        state.set_field(Field::Date, "2024-08-17");

        assert!(state.switch_collection(Collection::Staff));
        let ws = ws(&state);
        assert_eq!(ws.active, Collection::Staff);
        assert!(ws.draft.is_empty());
        assert!(ws.list.is_empty());
        assert_eq!(state.fetch_key(), Some(Collection::Staff));
    }

    #[test]
    fn test_switch_to_same_collection_is_noop() {
        let mut state = signed_in();
        state.set_field(Field::Title, "keep");
        assert!(!state.switch_collection(Collection::NewsArticle));
        assert_eq!(ws(&state).draft.title.as_deref(), Some("keep"));
    }

    #[tokio::test]
    async fn test_stale_list_response_is_dropped() {
        let h = harness();
        let mut state = signed_in();
        h.transport.respond_json(200, json!([{"_id": "n1", "title": "news"}]));
        h.transport.respond_json(200, json!([{"_id": "s1", "title": "staff"}]));

        let news_request = state.list_request().unwrap();
        state.switch_collection(Collection::Staff);
        let staff_request = state.list_request().unwrap();

        let news = h.console.load(news_request).await;
        let staff = h.console.load(staff_request).await;

        // Staff answer applies, late news answer does not overwrite it
        assert!(state.apply_list(staff));
        assert!(!state.apply_list(news));
        assert_eq!(ws(&state).list[0].title.as_deref(), Some("staff"));
    }

    #[tokio::test]
    async fn test_older_reload_of_same_collection_is_dropped() {
        let h = harness();
        let mut state = signed_in();
        h.transport.respond_json(200, json!([]));
        h.transport.respond_json(200, json!([{"title": "newer"}]));

        let first = state.list_request().unwrap();
        let second = state.list_request().unwrap();
        let first = h.console.load(first).await;
        let second = h.console.load(second).await;

        assert!(state.apply_list(second));
        assert!(!state.apply_list(first));
        assert_eq!(ws(&state).list.len(), 1);
    }

    #[tokio::test]
    async fn test_list_failure_empties_list_and_shows_banner() {
        let h = harness();
        let mut state = signed_in();
        h.transport.respond_json(200, json!([{"title": "a"}]));
        h.console.refresh(&mut state).await;

        h.transport.fail(ApiError::transport("connection refused"));
        assert!(h.console.refresh(&mut state).await);
        let ws = ws(&state);
        assert!(ws.list.is_empty());
        assert!(!ws.loading);
        assert_eq!(ws.error.as_deref(), Some("Request failed: connection refused"));
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let h = harness();
        let mut state = signed_in();
        state.request_delete(RecordId::new("5"));
        assert_eq!(ws(&state).pending_delete, Some(RecordId::new("5")));

        assert_eq!(state.confirm_delete(false), None);
        assert_eq!(ws(&state).pending_delete, None);

        // No pending question left to answer
        assert_eq!(state.confirm_delete(true), None);
        assert!(h.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_confirmed_delete_then_refetch() {
        let h = harness();
        let mut state = signed_in();
        state.switch_collection(Collection::GalleryItem);
        h.transport.respond_json(200, json!({"deleted": true}));
        h.transport.respond_json(200, json!([]));

        state.request_delete(RecordId::new("5"));
        let request = state.confirm_delete(true).unwrap();
        let done = h.console.delete(request).await;
        assert!(state.apply_delete(done));
        assert!(h.console.refresh(&mut state).await);

        let requests = h.transport.requests();
        assert_eq!(requests[0].method, Method::Delete);
        assert_eq!(requests[0].url, "http://api.test/admin/galleryitem/5");
        assert_eq!(requests[1].url, "http://api.test/admin/galleryitem");
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_remote_fails() {
        let h = harness();
        h.console.session().save(&admin());
        let mut state = h.console.restore();
        h.transport.fail(ApiError::transport("network unreachable"));

        h.console.logout(state.logout_request()).await;
        state.logged_out();

        assert_eq!(state.phase, Phase::LoggedOut);
        assert_eq!(h.console.session().restore(), None);
        assert!(h.storage.is_empty());

        let request = &h.transport.requests()[0];
        assert_eq!(request.url, "http://api.test/auth/logout");
        assert_eq!(request.header(CREDENTIAL_HEADER), Some("abc123"));
    }

    #[tokio::test]
    async fn test_list_response_after_logout_is_dropped() {
        let h = harness();
        let mut state = signed_in();
        h.transport.respond_json(200, json!([{"title": "late"}]));

        let request = state.list_request().unwrap();
        state.logged_out();
        let loaded = h.console.load(request).await;
        assert!(!state.apply_list(loaded));
        assert_eq!(state.phase, Phase::LoggedOut);
    }

    #[tokio::test]
    async fn test_list_response_from_previous_session_is_dropped() {
        let h = harness();
        let mut state = signed_in();
        h.transport.respond_json(200, json!([{"title": "before logout"}]));
        h.transport.respond_json(200, json!([{"title": "after login"}]));

        let earlier = state.list_request().unwrap();
        state.logged_out();
        state.logged_in(admin());
        let current = state.list_request().unwrap();

        let earlier = h.console.load(earlier).await;
        let current = h.console.load(current).await;

        assert!(!state.apply_list(earlier));
        assert!(ws(&state).loading);
        assert!(state.apply_list(current));
        assert_eq!(ws(&state).list[0].title.as_deref(), Some("after login"));
    }

    #[tokio::test]
    async fn test_submit_outcome_from_previous_session_is_dropped() {
        let h = harness();
        let mut state = signed_in();
        state.set_field(Field::Title, "before logout");
        let request = state.submit_request().unwrap();

        state.logged_out();
        state.logged_in(admin());
        state.set_field(Field::Title, "typed after login");

        h.transport.respond_json(201, json!({"_id": "1"}));
        let done = h.console.submit(request).await;

        assert!(!state.apply_submit(done));
        assert_eq!(ws(&state).draft.title.as_deref(), Some("typed after login"));
        assert_eq!(ws(&state).error, None);
    }

    #[tokio::test]
    async fn test_delete_outcome_from_previous_session_is_dropped() {
        let h = harness();
        let mut state = signed_in();
        state.request_delete(RecordId::new("5"));
        let request = state.confirm_delete(true).unwrap();

        state.logged_out();
        state.logged_in(admin());

        h.transport.fail(ApiError::transport("connection reset"));
        let done = h.console.delete(request).await;

        assert!(!state.apply_delete(done));
        assert_eq!(ws(&state).error, None);
    }

    #[tokio::test]
    async fn test_edit_and_update_news_article_end_to_end() {
        let h = harness();
        let mut state = h.console.restore();

        h.transport
            .respond_json(200, json!({"token": "abc123", "email": "admin@example.org"}));
        let credential = h.console.login("admin@example.org").await.unwrap();
        state.logged_in(credential);

        h.transport.respond_json(
            200,
            json!([
                {"_id": "42", "title": "Original", "content": "Body", "category": "news"},
                {"_id": "43", "title": "Other"}
            ]),
        );
        assert!(h.console.refresh(&mut state).await);
        assert_eq!(ws(&state).list.len(), 2);

        let item = ws(&state).list[0].clone();
        state.begin_edit(item);
        state.set_field(Field::Title, "Updated");

        h.transport.respond_json(200, json!({"ok": true}));
        h.transport
            .respond_json(200, json!([{"_id": "42", "title": "Updated"}, {"_id": "43", "title": "Other"}]));

        let done = h.console.submit(state.submit_request().unwrap()).await;
        assert!(state.apply_submit(done));
        assert!(ws(&state).draft.is_empty());
        assert!(h.console.refresh(&mut state).await);
        assert_eq!(ws(&state).list[0].title.as_deref(), Some("Updated"));

        let requests = h.transport.requests();
        assert_eq!(requests.len(), 4);
        assert_eq!(requests[1].method, Method::Get);
        assert_eq!(requests[1].url, "http://api.test/admin/newsarticle");
        assert_eq!(requests[1].header(CREDENTIAL_HEADER), Some("abc123"));
        assert_eq!(requests[2].method, Method::Put);
        assert_eq!(requests[2].url, "http://api.test/admin/newsarticle/42");
        assert_eq!(
            requests[2].json_body(),
            Some(json!({"data": {
                "_id": "42",
                "title": "Updated",
                "content": "Body",
                "category": "news"
            }}))
        );
        assert_eq!(requests[3].url, "http://api.test/admin/newsarticle");
    }
}
