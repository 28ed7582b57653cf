//! Poll loop phases and transitions
//!
//! The phase is a pure function of the previous phase and the outcome of
//! the work done in it.

/// Poll loop phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Bringing up the network link (entered once at start)
    Connecting,
    /// Retrieving the document
    Fetching,
    /// Extracting the table from the fetched document
    Parsing,
    /// Drawing the table or the "no table" placeholder
    Rendering,
    /// Waiting for the next poll
    Sleeping,
    /// Showing the error and waiting before the next fetch
    RetryingAfterError,
    /// Link bring-up failed; nothing more happens
    FatalHalt,
}

/// Outcome of the work done in a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Link is up
    Connected,
    /// Link bring-up failed
    ConnectFailed,
    /// Document retrieved
    Fetched,
    /// Document retrieval failed
    FetchFailed,
    /// Document parsed (with or without a table)
    Parsed,
    /// Frame committed to the display
    Rendered,
    /// Display rejected the frame
    RenderFailed,
    /// Sleep or retry delay finished
    Elapsed,
}

/// Category of a recorded failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// Link bring-up (fatal)
    Connect,
    /// Document retrieval
    Fetch,
    /// Display output
    Render,
}

impl ErrorKind {
    /// Check if this error stops the loop
    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorKind::Connect)
    }
}

impl Phase {
    /// Check if this phase ends the loop
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::FatalHalt)
    }

    /// Check if this phase only waits on the delay
    pub fn is_waiting(&self) -> bool {
        matches!(self, Phase::Sleeping | Phase::RetryingAfterError)
    }

    /// Process an event and return the next phase
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Phase::*;

        match (self, event) {
            // Startup
            (Connecting, Connected) => Fetching,
            (Connecting, ConnectFailed) => FatalHalt,

            // Poll cycle
            (Fetching, Fetched) => Parsing,
            (Fetching, FetchFailed) => RetryingAfterError,
            (Parsing, Parsed) => Rendering,
            (Rendering, Rendered) => Sleeping,
            (Rendering, RenderFailed) => RetryingAfterError,

            // Delays
            (Sleeping, Elapsed) => Fetching,
            (RetryingAfterError, Elapsed) => Fetching,

            // Default: stay in current phase
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup() {
        assert_eq!(Phase::Connecting.transition(Event::Connected), Phase::Fetching);
        assert_eq!(
            Phase::Connecting.transition(Event::ConnectFailed),
            Phase::FatalHalt
        );
    }

    #[test]
    fn test_success_cycle() {
        let phase = Phase::Fetching;
        let phase = phase.transition(Event::Fetched);
        assert_eq!(phase, Phase::Parsing);
        let phase = phase.transition(Event::Parsed);
        assert_eq!(phase, Phase::Rendering);
        let phase = phase.transition(Event::Rendered);
        assert_eq!(phase, Phase::Sleeping);
        let phase = phase.transition(Event::Elapsed);
        assert_eq!(phase, Phase::Fetching);
    }

    #[test]
    fn test_failures_retry() {
        assert_eq!(
            Phase::Fetching.transition(Event::FetchFailed),
            Phase::RetryingAfterError
        );
        assert_eq!(
            Phase::Rendering.transition(Event::RenderFailed),
            Phase::RetryingAfterError
        );
        assert_eq!(
            Phase::RetryingAfterError.transition(Event::Elapsed),
            Phase::Fetching
        );
    }

    #[test]
    fn test_fatal_halt_is_absorbing() {
        let events = [
            Event::Connected,
            Event::ConnectFailed,
            Event::Fetched,
            Event::FetchFailed,
            Event::Parsed,
            Event::Rendered,
            Event::RenderFailed,
            Event::Elapsed,
        ];

        for event in events {
            assert_eq!(Phase::FatalHalt.transition(event), Phase::FatalHalt);
        }
    }

    #[test]
    fn test_unexpected_events_ignored() {
        assert_eq!(Phase::Sleeping.transition(Event::Fetched), Phase::Sleeping);
        assert_eq!(Phase::Parsing.transition(Event::Elapsed), Phase::Parsing);
        assert_eq!(Phase::Fetching.transition(Event::Connected), Phase::Fetching);
    }

    #[test]
    fn test_connecting_only_at_start() {
        let phases = [
            Phase::Fetching,
            Phase::Parsing,
            Phase::Rendering,
            Phase::Sleeping,
            Phase::RetryingAfterError,
        ];

        for phase in phases {
            assert_ne!(phase.transition(Event::ConnectFailed), Phase::FatalHalt);
        }
    }

    #[test]
    fn test_phase_predicates() {
        assert!(Phase::FatalHalt.is_terminal());
        assert!(!Phase::RetryingAfterError.is_terminal());
        assert!(Phase::Sleeping.is_waiting());
        assert!(Phase::RetryingAfterError.is_waiting());
        assert!(!Phase::Fetching.is_waiting());
        assert!(ErrorKind::Connect.is_fatal());
        assert!(!ErrorKind::Fetch.is_fatal());
        assert!(!ErrorKind::Render.is_fatal());
    }
}
