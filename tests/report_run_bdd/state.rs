//! Scenario state and runtime/server initialisation for the report run BDD
//! tests.

use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ghreport::{
    OctocrabActivityGateway, OrganizationName, PersonalAccessToken, Report, ReportError,
    ReportResult,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Runtime handle that can be stored in an rstest-bdd Slot.
#[derive(Clone)]
pub(crate) struct RuntimeHandle(Rc<Runtime>);

impl RuntimeHandle {
    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.block_on(future)
    }
}

#[derive(ScenarioState, Default)]
pub(crate) struct ReportScenario {
    pub(crate) runtime: Slot<RuntimeHandle>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) organization: Slot<String>,
    pub(crate) result: Slot<ReportResult>,
    pub(crate) error: Slot<ReportError>,
    pub(crate) lines: Slot<Vec<String>>,
}

/// Ensures the runtime and server are initialised, returning the runtime.
pub(crate) fn ensure_runtime_and_server(scenario: &ReportScenario) -> RuntimeHandle {
    if scenario.runtime.with_ref(|_| ()).is_none() {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        scenario.runtime.set(RuntimeHandle(Rc::new(runtime)));
    }

    let runtime = scenario
        .runtime
        .get()
        .unwrap_or_else(|| panic!("runtime not initialised after set"));

    if scenario.server.with_ref(|_| ()).is_none() {
        scenario.server.set(runtime.block_on(MockServer::start()));
    }

    runtime
}

/// Runs the report against the mock server and records the outcome.
pub(crate) fn run_report(scenario: &ReportScenario, days: u32) {
    let runtime = ensure_runtime_and_server(scenario);
    let server_url = scenario
        .server
        .with_ref(MockServer::uri)
        .unwrap_or_else(|| panic!("mock server URL missing"));
    let organization = scenario
        .organization
        .get()
        .unwrap_or_else(|| "acme".to_owned());

    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink_lines = Arc::clone(&lines);

    let outcome = runtime.block_on(async {
        let token = PersonalAccessToken::new("valid-token")?;
        let gateway =
            OctocrabActivityGateway::for_token(&token, &server_url, Duration::from_secs(5))?;
        let mut report = Report::new(&gateway, OrganizationName::new(&organization)?, days)
            .with_log(move |line: &str| {
                if let Ok(mut recorded) = sink_lines.lock() {
                    recorded.push(line.to_owned());
                }
            });
        report.run().await?;
        Ok::<ReportResult, ReportError>(report.into_result())
    });

    match outcome {
        Ok(result) => scenario.result.set(result),
        Err(error) => scenario.error.set(error),
    }
    let recorded = lines
        .lock()
        .map(|recorded| recorded.clone())
        .unwrap_or_default();
    scenario.lines.set(recorded);
}
