//! Mock collaborators for host tests

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use embedded_hal_async::delay::DelayNs;

use crate::traits::{
    ConnectError, Display, DisplayError, Fetch, FetchError, HttpClient, HttpError, Link,
    LinkStatus,
};

/// Recorded display operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Clear,
    Text(String, i32, i32),
    Commit,
}

impl Op {
    pub fn text(text: &str, x: i32, y: i32) -> Self {
        Op::Text(text.to_string(), x, y)
    }
}

/// Display that records every call
pub struct MockDisplay {
    width: u16,
    height: u16,
    pub ops: Vec<Op>,
    pub fail_draw: bool,
    pub fail_commit: bool,
}

impl MockDisplay {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
            fail_draw: false,
            fail_commit: false,
        }
    }

    /// Texts of every committed single-message frame, oldest first
    pub fn messages(&self) -> Vec<&str> {
        self.ops
            .windows(3)
            .filter_map(|w| match w {
                [Op::Clear, Op::Text(text, 0, 0), Op::Commit] => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_message(&self) -> Option<&str> {
        self.messages().last().copied()
    }

    pub fn commits(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::Commit).count()
    }
}

impl Display for MockDisplay {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.ops.push(Op::Clear);
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), DisplayError> {
        if self.fail_draw {
            return Err(DisplayError::Communication);
        }
        self.ops.push(Op::text(text, x, y));
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), DisplayError> {
        if self.fail_commit {
            return Err(DisplayError::Communication);
        }
        self.ops.push(Op::Commit);
        Ok(())
    }
}

/// Delay that records requested durations instead of waiting
#[derive(Default)]
pub struct MockDelay {
    pub waits_ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.waits_ms.push(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
    }
}

/// Link that reports a scripted sequence of statuses
pub struct MockLink {
    pub begin_result: Result<(), ConnectError>,
    statuses: VecDeque<LinkStatus>,
    last: LinkStatus,
    pub joined: Option<(String, String)>,
    pub polls: usize,
}

impl MockLink {
    /// Statuses are returned in order; the last one repeats forever
    pub fn new(statuses: &[LinkStatus]) -> Self {
        Self {
            begin_result: Ok(()),
            statuses: statuses.iter().copied().collect(),
            last: LinkStatus::Idle,
            joined: None,
            polls: 0,
        }
    }

    pub fn up() -> Self {
        Self::new(&[LinkStatus::Up])
    }
}

impl Link for MockLink {
    async fn begin(&mut self, ssid: &str, password: &str) -> Result<(), ConnectError> {
        self.joined = Some((ssid.to_string(), password.to_string()));
        self.begin_result
    }

    fn status(&mut self) -> LinkStatus {
        self.polls += 1;
        if let Some(status) = self.statuses.pop_front() {
            self.last = status;
        }
        self.last
    }
}

/// Fetcher returning scripted results; the last one repeats forever
pub struct MockFetch {
    results: VecDeque<Result<String, FetchError>>,
    last: Result<String, FetchError>,
    pub requests: Vec<(String, Option<String>)>,
}

impl MockFetch {
    pub fn new(results: Vec<Result<&str, FetchError>>) -> Self {
        Self {
            results: results
                .into_iter()
                .map(|r| r.map(|s| s.to_string()))
                .collect(),
            last: Err(FetchError::Transport(HttpError::Connection)),
            requests: Vec::new(),
        }
    }

    pub fn always(document: &str) -> Self {
        Self::new(vec![Ok(document)])
    }
}

impl Fetch for MockFetch {
    async fn fetch(
        &mut self,
        location: &str,
        credentials: Option<&str>,
    ) -> Result<String, FetchError> {
        self.requests
            .push((location.to_string(), credentials.map(|c| c.to_string())));
        if let Some(result) = self.results.pop_front() {
            self.last = result;
        }
        self.last.clone()
    }
}

/// HTTP client answering from a table of URL -> response
#[derive(Default)]
pub struct MockHttp {
    routes: Vec<(String, Result<String, HttpError>)>,
    pub requests: Vec<(String, Option<String>)>,
}

impl MockHttp {
    pub fn route(mut self, url: &str, response: Result<&str, HttpError>) -> Self {
        self.routes
            .push((url.to_string(), response.map(|s| s.to_string())));
        self
    }
}

impl HttpClient for MockHttp {
    async fn get(&mut self, url: &str, authorization: Option<&str>) -> Result<String, HttpError> {
        self.requests
            .push((url.to_string(), authorization.map(|a| a.to_string())));
        self.routes
            .iter()
            .find(|(route, _)| route == url)
            .map(|(_, response)| response.clone())
            .unwrap_or(Err(HttpError::Status(404)))
    }
}
