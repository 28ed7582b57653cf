//! Poll loop executor

use alloc::string::String;

use embedded_hal_async::delay::DelayNs;

use super::phase::{ErrorKind, Event, Phase};
use super::state::{Failure, PollState, ERROR_PREFIX, FATAL_MESSAGE};
use crate::config::Config;
use crate::net::connect;
use crate::render::{Renderer, NO_TABLE_MESSAGE};
use crate::table::{parse_table, Table};
use crate::traits::{Display, Fetch, Link};

/// Fetch, parse and render loop
///
/// Owns its collaborators; each [`step`](Self::step) performs the work of
/// the current phase and advances the state machine.
pub struct PollLoop<L, F, D, T> {
    config: Config,
    link: L,
    source: F,
    renderer: Renderer<D>,
    delay: T,
    state: PollState,
    /// Document fetched but not yet parsed
    document: Option<String>,
    /// Table parsed but not yet rendered
    table: Option<Table>,
}

impl<L, F, D, T> PollLoop<L, F, D, T>
where
    L: Link,
    F: Fetch,
    D: Display,
    T: DelayNs,
{
    /// Create a new poll loop in the `Connecting` phase
    pub fn new(config: Config, link: L, source: F, display: D, delay: T) -> Self {
        let renderer = Renderer::new(display, config.display);
        Self {
            config,
            link,
            source,
            renderer,
            delay,
            state: PollState::new(),
            document: None,
            table: None,
        }
    }

    /// Get the loop state
    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Get the current phase
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Get the renderer
    pub fn renderer(&self) -> &Renderer<D> {
        &self.renderer
    }

    /// Get the link
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Get the document source
    pub fn source(&self) -> &F {
        &self.source
    }

    /// Get the delay provider
    pub fn delay(&self) -> &T {
        &self.delay
    }

    /// Run until the loop halts
    ///
    /// Only a failed link bring-up halts the loop; every other failure is
    /// shown and retried.
    pub async fn run(&mut self) {
        info!("Poll loop starting");
        while !self.step().await.is_terminal() {}
        error!("Poll loop halted");
    }

    /// Do the work of the current phase and return the next phase
    pub async fn step(&mut self) -> Phase {
        let phase = self.state.phase;
        let event = match phase {
            Phase::Connecting => self.connect().await,
            Phase::Fetching => self.fetch().await,
            Phase::Parsing => self.parse(),
            Phase::Rendering => self.render().await,
            Phase::Sleeping => self.sleep().await,
            Phase::RetryingAfterError => self.retry().await,
            Phase::FatalHalt => return phase,
        };

        let next = phase.transition(event);
        trace!("{:?} + {:?} -> {:?}", phase, event, next);
        self.state.phase = next;
        next
    }

    async fn connect(&mut self) -> Event {
        let wifi = &self.config.wifi;
        match connect(&mut self.link, &wifi.ssid, &wifi.password, &mut self.delay).await {
            Ok(()) => {
                info!("Connected to WiFi");
                Event::Connected
            }
            Err(e) => {
                error!("Link bring-up failed: {}", e);
                self.state.record_failure(Failure::new(ErrorKind::Connect, &e));
                if let Err(e) = self.renderer.render_message(FATAL_MESSAGE).await {
                    error!("Could not show fatal error: {}", e);
                }
                Event::ConnectFailed
            }
        }
    }

    async fn fetch(&mut self) -> Event {
        let source = &self.config.source;
        match self.source.fetch(&source.location, source.credentials()).await {
            Ok(document) => {
                debug!("Fetched {} bytes", document.len());
                self.document = Some(document);
                Event::Fetched
            }
            Err(e) => {
                warn!("Fetch failed: {}", e);
                self.state.record_failure(Failure::new(ErrorKind::Fetch, &e));
                Event::FetchFailed
            }
        }
    }

    fn parse(&mut self) -> Event {
        let document = self.document.take().unwrap_or_default();
        self.table = parse_table(&document);
        match &self.table {
            Some(table) => debug!(
                "Found table with {} columns, {} rows",
                table.column_count(),
                table.rows.len()
            ),
            None => info!("No table in document"),
        }
        Event::Parsed
    }

    async fn render(&mut self) -> Event {
        let result = match self.table.take() {
            Some(table) => self.renderer.render_table(&table).await.map(|shown| {
                info!("Table updated ({} rows shown)", shown);
            }),
            None => self.renderer.render_message(NO_TABLE_MESSAGE).await,
        };

        match result {
            Ok(()) => {
                self.state.record_frame();
                Event::Rendered
            }
            Err(e) => {
                warn!("Render failed: {}", e);
                self.state.record_failure(Failure::new(ErrorKind::Render, &e));
                Event::RenderFailed
            }
        }
    }

    async fn sleep(&mut self) -> Event {
        debug!("Next update in {}s", self.config.poll.poll_interval_s);
        self.delay.delay_ms(self.config.poll.poll_interval_ms()).await;
        Event::Elapsed
    }

    async fn retry(&mut self) -> Event {
        let failures = self.state.consecutive_failures;
        let shown = match &self.state.last_error {
            Some(failure) => self.renderer.render_message(&failure.summary()).await,
            None => self.renderer.render_message(ERROR_PREFIX).await,
        };
        if let Err(e) = shown {
            warn!("Could not show error: {}", e);
        }

        info!(
            "Retrying in {}s ({} consecutive failures)",
            self.config.poll.retry_interval_s,
            failures
        );
        self.delay.delay_ms(self.config.poll.retry_interval_ms()).await;
        Event::Elapsed
    }
}
