//! The tracker facade used by host applications.
//!
//! A [`Tracker`] records visits ([`Tracker::record`]), extends them
//! ([`Tracker::update`]) and records event values ([`Tracker::action`]).
//! All three return immediately: the request runs on a tokio task owned by
//! the tracker, and failures are logged instead of returned. The `try_*`
//! variants run the same requests inline and return every error.
//!
//! # Example
//!
//! ```rust,no_run
//! use ackee::{DomainId, EndpointUrl, Event, Tracker, TrackerConfig};
//!
//! const PURCHASE: Event = Event::from_static("eventId", "Price");
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = Tracker::new(
//!     TrackerConfig::builder()
//!         .url(EndpointUrl::new("https://stats.example.com/api")?)
//!         .domain(DomainId::new("domain_id")?)
//!         .build()?,
//! )?;
//!
//! // When a screen appears
//! let record = tracker.record_receiver("app.structured.today/sheet").await?;
//!
//! tracker.action(&PURCHASE, 5.0);
//!
//! // When it disappears
//! tracker.update(record.as_ref());
//! # Ok(())
//! # }
//! ```

mod errors;
mod types;

pub use errors::TrackerError;
pub use types::{Event, Record};

use std::future::{self, Future};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::Poll;

use parking_lot::{Mutex, RwLock};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinSet;

use crate::attributes::Attributes;
use crate::clients::GraphqlClient;
use crate::config::{DomainId, EndpointUrl, ErrorHook, TrackerConfig};
use crate::error::ConfigError;
use crate::mutations::{CreateAction, CreateRecord, Mutation, UpdateRecord};

/// Value recorded by [`Tracker::action_default`].
pub const DEFAULT_ACTION_VALUE: f64 = 1.0;

/// Records visits and actions on an Ackee server.
///
/// # Thread Safety
///
/// `Tracker` is `Send + Sync`. Every method takes `&self` and may be called
/// concurrently from any thread; each call runs its own request and no
/// ordering between calls is guaranteed.
///
/// # Teardown
///
/// The tracker owns the tasks it spawns. Dropping it (or calling
/// [`Tracker::shutdown`]) aborts requests still in flight; their results are
/// discarded and pending sinks are dropped without being called.
pub struct Tracker {
    client: Arc<GraphqlClient>,
    domain: DomainId,
    default_attributes: RwLock<Attributes>,
    enabled: AtomicBool,
    error_hook: Option<ErrorHook>,
    runtime: Handle,
    tasks: Mutex<JoinSet<()>>,
}

// Verify Tracker is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Tracker>();
};

impl Tracker {
    /// Creates a tracker that spawns its tasks on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoRuntime`] when called outside a tokio runtime.
    pub fn new(config: TrackerConfig) -> Result<Self, ConfigError> {
        let runtime = Handle::try_current().map_err(|_| ConfigError::NoRuntime)?;
        Ok(Self::with_runtime(config, runtime))
    }

    /// Creates a tracker that spawns its tasks on the given runtime.
    ///
    /// Use this from host threads that are not inside a runtime, such as a
    /// GUI main thread.
    #[must_use]
    pub fn with_runtime(config: TrackerConfig, runtime: Handle) -> Self {
        let client = GraphqlClient::new(config.url().clone(), Some(&config));

        Self {
            client: Arc::new(client),
            domain: config.domain().clone(),
            default_attributes: RwLock::new(config.default_attributes().clone()),
            enabled: AtomicBool::new(config.is_enabled()),
            error_hook: config.error_hook().cloned(),
            runtime,
            tasks: Mutex::new(JoinSet::new()),
        }
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub fn url(&self) -> &EndpointUrl {
        self.client.url()
    }

    /// Returns the domain records are created on.
    #[must_use]
    pub const fn domain(&self) -> &DomainId {
        &self.domain
    }

    /// Returns whether operations are sent.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Enables or disables tracking.
    ///
    /// While disabled, [`record`](Self::record) hands `None` to its sink
    /// right away, [`update`](Self::update) and [`action`](Self::action) do
    /// nothing, and the `try_*` variants return [`TrackerError::Disabled`].
    /// Requests already in flight are not affected.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    /// Returns a snapshot of the attributes sent with new records.
    #[must_use]
    pub fn default_attributes(&self) -> Attributes {
        self.default_attributes.read().clone()
    }

    /// Replaces the attributes sent with new records.
    ///
    /// Records already started keep the attributes they were started with.
    pub fn set_default_attributes(&self, attributes: Attributes) {
        *self.default_attributes.write() = attributes;
    }

    /// Starts a visit of `path` and hands the resulting record to `sink`.
    ///
    /// `sink` is called exactly once, from a runtime worker, with
    /// `Some(record)` on success or `None` on any failure. When the tracker
    /// is disabled it is called with `None` before this method returns. If
    /// the tracker is dropped while the request is in flight, `sink` is
    /// dropped without being called.
    pub fn record<F>(&self, path: impl Into<String>, sink: F)
    where
        F: FnOnce(Option<Record>) + Send + 'static,
    {
        if !self.is_enabled() {
            tracing::debug!("Tracking disabled, skipping createRecord");
            sink(None);
            return;
        }

        let mutation = self.create_record_mutation(path.into());
        let client = Arc::clone(&self.client);
        let hook = self.error_hook.clone();

        self.spawn(async move {
            let record = match client.send(mutation).await {
                Ok(id) => Some(Record::new(id)),
                Err(e) => {
                    report_error(hook.as_ref(), CreateRecord::NAME, &e.into());
                    None
                }
            };
            sink(record);
        });
    }

    /// Starts a visit of `path`, delivering the result through a channel.
    ///
    /// The receiver yields the same value [`record`](Self::record) would
    /// pass to its sink. It errors only if the tracker was dropped first.
    pub fn record_receiver(&self, path: impl Into<String>) -> oneshot::Receiver<Option<Record>> {
        let (tx, rx) = oneshot::channel();
        self.record(path, move |record| {
            // The host may have stopped waiting for the record.
            let _ = tx.send(record);
        });
        rx
    }

    /// Starts a visit of `path` and waits for the result.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Disabled`] if the tracker is disabled, or
    /// [`TrackerError::Graphql`] if the request fails.
    pub async fn try_record(&self, path: impl Into<String>) -> Result<Record, TrackerError> {
        self.ensure_enabled()?;
        let mutation = self.create_record_mutation(path.into());
        let id = self.client.send(mutation).await?;
        Ok(Record::new(id))
    }

    /// Extends a visit started with [`record`](Self::record).
    ///
    /// Does nothing for `None`, so the value a sink received can be passed
    /// in unchanged. The outcome is only logged.
    pub fn update(&self, record: Option<&Record>) {
        let Some(record) = record else {
            tracing::trace!("No record to update");
            return;
        };
        if !self.is_enabled() {
            tracing::debug!("Tracking disabled, skipping updateRecord");
            return;
        }

        let mutation = UpdateRecord::new(record.id());
        let client = Arc::clone(&self.client);
        let hook = self.error_hook.clone();

        self.spawn(async move {
            match client.send(mutation).await {
                Ok(success) => tracing::debug!(success, "Ackee record updated"),
                Err(e) => report_error(hook.as_ref(), UpdateRecord::NAME, &e.into()),
            }
        });
    }

    /// Extends a visit and waits for the server's answer.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Disabled`] if the tracker is disabled, or
    /// [`TrackerError::Graphql`] if the request fails.
    pub async fn try_update(&self, record: &Record) -> Result<bool, TrackerError> {
        self.ensure_enabled()?;
        Ok(self.client.send(UpdateRecord::new(record.id())).await?)
    }

    /// Records `value` for `event`. The outcome is only logged.
    pub fn action(&self, event: &Event, value: f64) {
        if !self.is_enabled() {
            tracing::debug!("Tracking disabled, skipping createAction");
            return;
        }

        let mutation = CreateAction::new(event.id(), event.key(), value);
        let client = Arc::clone(&self.client);
        let hook = self.error_hook.clone();

        self.spawn(async move {
            match client.send(mutation).await {
                Ok(id) => tracing::debug!(action_id = %id, "Ackee action created"),
                Err(e) => report_error(hook.as_ref(), CreateAction::NAME, &e.into()),
            }
        });
    }

    /// Records [`DEFAULT_ACTION_VALUE`] for `event`.
    pub fn action_default(&self, event: &Event) {
        self.action(event, DEFAULT_ACTION_VALUE);
    }

    /// Records `value` for `event` and returns the created action's id.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Disabled`] if the tracker is disabled, or
    /// [`TrackerError::Graphql`] if the request fails.
    pub async fn try_action(&self, event: &Event, value: f64) -> Result<String, TrackerError> {
        self.ensure_enabled()?;
        let mutation = CreateAction::new(event.id(), event.key(), value);
        Ok(self.client.send(mutation).await?)
    }

    /// Returns the number of spawned requests that have not finished.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        let mut tasks = self.tasks.lock();
        reap_finished(&mut tasks);
        tasks.len()
    }

    /// Waits until no request is in flight.
    ///
    /// Requests spawned while waiting are waited for as well. The tasks stay
    /// owned by the tracker, so [`in_flight`](Self::in_flight) keeps counting
    /// them and [`shutdown`](Self::shutdown) aborts them, after which this
    /// returns. Dropping the returned future leaves the requests running.
    pub async fn wait_idle(&self) {
        future::poll_fn(|cx| {
            // The lock is only held for this poll, never across a suspension.
            let mut tasks = self.tasks.lock();
            loop {
                match tasks.poll_join_next(cx) {
                    Poll::Ready(Some(result)) => log_task_failure(result),
                    Poll::Ready(None) => return Poll::Ready(()),
                    Poll::Pending => return Poll::Pending,
                }
            }
        })
        .await;
    }

    /// Aborts every request still in flight.
    ///
    /// The tracker stays usable afterwards.
    pub fn shutdown(&self) {
        let mut tasks = self.tasks.lock();
        if !tasks.is_empty() {
            tracing::debug!(count = tasks.len(), "Aborting in-flight Ackee requests");
        }
        tasks.abort_all();
    }

    fn create_record_mutation(&self, path: String) -> CreateRecord {
        // One read guard, so concurrent writers can't interleave fields.
        let input = self.default_attributes.read().with_site_location(path);
        CreateRecord::new(self.domain.clone(), input)
    }

    fn ensure_enabled(&self) -> Result<(), TrackerError> {
        if self.is_enabled() {
            Ok(())
        } else {
            Err(TrackerError::Disabled)
        }
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut tasks = self.tasks.lock();
        reap_finished(&mut tasks);
        tasks.spawn_on(task, &self.runtime);
    }
}

impl Drop for Tracker {
    fn drop(&mut self) {
        let tasks = self.tasks.get_mut();
        if !tasks.is_empty() {
            tracing::debug!(count = tasks.len(), "Dropping tracker with in-flight requests");
        }
    }
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("url", self.url())
            .field("domain", &self.domain)
            .field("enabled", &self.is_enabled())
            .finish_non_exhaustive()
    }
}

fn reap_finished(tasks: &mut JoinSet<()>) {
    let mut reaped = 0_usize;
    while let Some(result) = tasks.try_join_next() {
        log_task_failure(result);
        reaped += 1;
    }
    if reaped > 0 {
        tracing::trace!(reaped, "Reaped finished Ackee tasks");
    }
}

fn log_task_failure(result: Result<(), tokio::task::JoinError>) {
    if let Err(e) = result {
        if e.is_panic() {
            tracing::error!(error = %e, "Ackee tracking task panicked");
        }
    }
}

fn report_error(hook: Option<&ErrorHook>, operation: &'static str, error: &TrackerError) {
    tracing::warn!(operation, error = %error, "Ackee tracking failed");
    if let Some(hook) = hook {
        hook(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::GraphqlError;
    use serde_json::{json, Value};
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PURCHASE: Event = Event::from_static("eventId", "Price");

    fn config_builder(server: &MockServer) -> crate::config::TrackerConfigBuilder {
        TrackerConfig::builder()
            .url(EndpointUrl::new(server.uri()).unwrap())
            .domain(DomainId::new("domain_id").unwrap())
    }

    fn tracker(server: &MockServer) -> Tracker {
        Tracker::new(config_builder(server).build().unwrap()).unwrap()
    }

    fn created(mutation: &str, id: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "data": { mutation: { "payload": { "id": id } } },
            "errors": null
        }))
    }

    async fn request_bodies(server: &MockServer) -> Vec<Value> {
        server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).unwrap())
            .collect()
    }

    #[test]
    fn test_new_outside_runtime_fails() {
        let config = TrackerConfig::builder()
            .url(EndpointUrl::new("https://stats.example.com/api").unwrap())
            .domain(DomainId::new("domain_id").unwrap())
            .build()
            .unwrap();

        assert!(matches!(Tracker::new(config), Err(ConfigError::NoRuntime)));
    }

    #[test]
    fn test_with_runtime_outside_runtime_succeeds() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let config = TrackerConfig::builder()
            .url(EndpointUrl::new("https://stats.example.com/api").unwrap())
            .domain(DomainId::new("domain_id").unwrap())
            .build()
            .unwrap();

        let tracker = Tracker::with_runtime(config, runtime.handle().clone());

        assert_eq!(tracker.domain().as_ref(), "domain_id");
        assert_eq!(tracker.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_record_delivers_record_to_sink() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(created("createRecord", "abc"))
            .expect(1)
            .mount(&server)
            .await;

        let record = tracker(&server).record_receiver("/home").await.unwrap();

        assert_eq!(record.unwrap().id(), "abc");
    }

    #[tokio::test]
    async fn test_record_sends_path_as_site_location() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "variables": {
                    "domainId": "domain_id",
                    "input": { "siteLocation": "/today", "osName": "iOS" }
                }
            })))
            .respond_with(created("createRecord", "abc"))
            .expect(1)
            .mount(&server)
            .await;

        let record = tracker(&server).record_receiver("/today").await.unwrap();

        assert!(record.is_some());
    }

    #[tokio::test]
    async fn test_record_delivers_none_on_response_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null,
                "errors": [{ "message": "domain not found" }]
            })))
            .mount(&server)
            .await;

        let record = tracker(&server).record_receiver("/home").await.unwrap();

        assert!(record.is_none());
    }

    #[tokio::test]
    async fn test_record_sink_called_exactly_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(created("createRecord", "abc"))
            .mount(&server)
            .await;

        let tracker = tracker(&server);
        let calls = Arc::new(AtomicUsize::new(0));
        let sink_calls = Arc::clone(&calls);
        tracker.record("/home", move |_| {
            sink_calls.fetch_add(1, Ordering::SeqCst);
        });
        tracker.wait_idle().await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_update_none_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let tracker = tracker(&server);
        tracker.update(None);
        tracker.wait_idle().await;

        assert_eq!(tracker.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_update_sends_record_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "variables": { "recordId": "rec-7" } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "updateRecord": { "success": true } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tracker = tracker(&server);
        tracker.update(Some(&Record::new("rec-7".to_string())));
        tracker.wait_idle().await;
    }

    #[tokio::test]
    async fn test_action_sends_event_key_and_value() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "variables": { "eventId": "eventId", "input": { "key": "Price", "value": 5.0 } }
            })))
            .respond_with(created("createAction", "act-1"))
            .expect(1)
            .mount(&server)
            .await;

        let tracker = tracker(&server);
        tracker.action(&PURCHASE, 5.0);
        tracker.wait_idle().await;
    }

    #[tokio::test]
    async fn test_action_default_sends_value_one() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "variables": { "input": { "value": 1.0 } } })))
            .respond_with(created("createAction", "act-1"))
            .expect(1)
            .mount(&server)
            .await;

        let tracker = tracker(&server);
        tracker.action_default(&PURCHASE);
        tracker.wait_idle().await;
    }

    #[tokio::test]
    async fn test_swallowed_errors_reach_error_hook() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errors": [{ "message": "event not found" }]
            })))
            .mount(&server)
            .await;

        let failures = Arc::new(AtomicUsize::new(0));
        let hook_failures = Arc::clone(&failures);
        let tracker = Tracker::new(
            config_builder(&server)
                .on_error(move |error| {
                    assert!(matches!(
                        error,
                        TrackerError::Graphql(GraphqlError::Response { .. })
                    ));
                    hook_failures.fetch_add(1, Ordering::SeqCst);
                })
                .build()
                .unwrap(),
        )
        .unwrap();

        tracker.action(&PURCHASE, 2.0);
        tracker.update(Some(&Record::new("rec".to_string())));
        tracker.wait_idle().await;

        assert_eq!(failures.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_disabled_tracker_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(created("createRecord", "abc"))
            .expect(0)
            .mount(&server)
            .await;

        let tracker = Tracker::new(config_builder(&server).enabled(false).build().unwrap()).unwrap();

        let record = tracker.record_receiver("/home").await.unwrap();
        tracker.update(Some(&Record::new("rec".to_string())));
        tracker.action(&PURCHASE, 1.0);
        tracker.wait_idle().await;

        assert!(record.is_none());
        assert!(matches!(
            tracker.try_record("/home").await,
            Err(TrackerError::Disabled)
        ));
    }

    #[tokio::test]
    async fn test_set_enabled_toggles_tracking() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(created("createRecord", "abc"))
            .expect(1)
            .mount(&server)
            .await;

        let tracker = tracker(&server);
        tracker.set_enabled(false);
        assert!(tracker.record_receiver("/off").await.unwrap().is_none());

        tracker.set_enabled(true);
        assert!(tracker.record_receiver("/on").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_records_snapshot_default_attributes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(created("createRecord", "abc"))
            .expect(2)
            .mount(&server)
            .await;

        let tracker = tracker(&server);
        let first = tracker.record_receiver("/a");
        let second = tracker.record_receiver("/b");
        tracker.set_default_attributes(Attributes::builder().site_language("xx").build());

        assert!(first.await.unwrap().is_some());
        assert!(second.await.unwrap().is_some());

        let mut locations: Vec<String> = request_bodies(&server)
            .await
            .iter()
            .map(|body| {
                assert!(body["variables"]["input"].get("siteLanguage").is_none());
                body["variables"]["input"]["siteLocation"]
                    .as_str()
                    .unwrap()
                    .to_string()
            })
            .collect();
        locations.sort();

        assert_eq!(locations, vec!["/a", "/b"]);
        assert!(tracker.default_attributes().site_location().is_none());
        assert_eq!(tracker.default_attributes().site_language(), Some("xx"));
    }

    #[tokio::test]
    async fn test_dropping_tracker_abandons_in_flight_requests() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(created("createRecord", "abc").set_delay(Duration::from_secs(30)))
            .mount(&server)
            .await;

        let tracker = tracker(&server);
        let record = tracker.record_receiver("/slow");
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(tracker.in_flight(), 1);

        drop(tracker);

        assert!(record.await.is_err());
    }

    #[tokio::test]
    async fn test_shutdown_aborts_in_flight_requests() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(created("createRecord", "abc").set_delay(Duration::from_secs(30)))
            .mount(&server)
            .await;

        let tracker = tracker(&server);
        let record = tracker.record_receiver("/slow");
        tracker.shutdown();

        assert!(record.await.is_err());
    }

    #[tokio::test]
    async fn test_shutdown_aborts_requests_awaited_by_wait_idle() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(created("createRecord", "abc").set_delay(Duration::from_secs(30)))
            .mount(&server)
            .await;

        let tracker = Arc::new(tracker(&server));
        let record = tracker.record_receiver("/slow");
        let waiter = {
            let tracker = Arc::clone(&tracker);
            tokio::spawn(async move { tracker.wait_idle().await })
        };
        tokio::task::yield_now().await;

        assert_eq!(tracker.in_flight(), 1);
        tracker.shutdown();

        tokio::time::timeout(Duration::from_secs(5), waiter)
            .await
            .expect("wait_idle returns once requests are aborted")
            .unwrap();
        assert!(record.await.is_err());
        assert_eq!(tracker.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_try_variants_return_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "query": CreateRecord::QUERY })))
            .respond_with(created("createRecord", "rec-1"))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "query": UpdateRecord::QUERY })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "updateRecord": { "success": true } }
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "query": CreateAction::QUERY })))
            .respond_with(created("createAction", "act-1"))
            .mount(&server)
            .await;

        let tracker = tracker(&server);
        let record = tracker.try_record("/home").await.unwrap();

        assert_eq!(record.id(), "rec-1");
        assert!(tracker.try_update(&record).await.unwrap());
        assert_eq!(tracker.try_action(&PURCHASE, 3.0).await.unwrap(), "act-1");
    }
}
