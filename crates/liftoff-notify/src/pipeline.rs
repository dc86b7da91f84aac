//! Release notification pipeline
//!
//! One run walks these states in order:
//!
//! ```text
//! Start → Loaded → Segmented → HeaderParsed → Sectioned → Formatted → Sent
//! ```
//!
//! A changelog without a usable release ends the run early in `NoOp`, which
//! is a success. Any error ends it in `Failed` and is returned to the caller.

use liftoff_changelog::parser::{chunk_header, first_version_chunk, parse_sections};
use liftoff_changelog::{ChangelogSource, ParseMiss, Section, VersionChunk, VersionHeader};
use liftoff_core::Result;
use tracing::{debug, info, instrument};

use crate::formatter::{ReleaseFormatter, SlackFormatter};
use crate::slack::Message;
use crate::traits::WebhookSender;

/// Observable state of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Start,
    Loaded,
    Segmented,
    HeaderParsed,
    Sectioned,
    Formatted,
    Sent,
    NoOp,
    Failed,
}

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Message delivered
    Sent { version: String, message: Message },
    /// Message built but not sent (no sender configured)
    DryRun { version: String, message: Message },
    /// Nothing to announce
    NoOp(ParseMiss),
}

impl RunOutcome {
    /// Terminal state for this outcome
    pub fn state(&self) -> RunState {
        match self {
            Self::Sent { .. } => RunState::Sent,
            Self::DryRun { .. } => RunState::Formatted,
            Self::NoOp(_) => RunState::NoOp,
        }
    }

    /// The built message, if the run got that far
    pub fn message(&self) -> Option<&Message> {
        match self {
            Self::Sent { message, .. } | Self::DryRun { message, .. } => Some(message),
            Self::NoOp(_) => None,
        }
    }
}

/// Data carried between states
enum Stage {
    Start,
    Loaded(String),
    Segmented(VersionChunk),
    HeaderParsed {
        header: VersionHeader,
        chunk: VersionChunk,
    },
    Sectioned {
        header: VersionHeader,
        sections: Vec<Section>,
    },
    Formatted {
        header: VersionHeader,
        message: Message,
    },
    Done(RunOutcome),
}

impl Stage {
    fn state(&self) -> RunState {
        match self {
            Self::Start => RunState::Start,
            Self::Loaded(_) => RunState::Loaded,
            Self::Segmented(_) => RunState::Segmented,
            Self::HeaderParsed { .. } => RunState::HeaderParsed,
            Self::Sectioned { .. } => RunState::Sectioned,
            Self::Formatted { .. } => RunState::Formatted,
            Self::Done(outcome) => outcome.state(),
        }
    }
}

/// Reads a changelog and announces its newest release
pub struct Pipeline {
    service_name: String,
    source: Box<dyn ChangelogSource>,
    sender: Option<Box<dyn WebhookSender>>,
    formatter: Box<dyn ReleaseFormatter>,
}

impl Pipeline {
    /// Create a pipeline without a sender; runs stop after formatting
    pub fn new<S: ChangelogSource + 'static>(service_name: impl Into<String>, source: S) -> Self {
        Self {
            service_name: service_name.into(),
            source: Box::new(source),
            sender: None,
            formatter: Box::new(SlackFormatter::new()),
        }
    }

    /// Deliver the message through this sender
    pub fn with_sender<W: WebhookSender + 'static>(mut self, sender: W) -> Self {
        self.sender = Some(Box::new(sender));
        self
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ReleaseFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Run the pipeline to completion
    #[instrument(skip(self), fields(service = %self.service_name, source = %self.source.location()))]
    pub async fn run(&self) -> Result<RunOutcome> {
        let mut stage = Stage::Start;

        loop {
            if let Stage::Done(outcome) = stage {
                info!(state = ?outcome.state(), "run finished");
                return Ok(outcome);
            }

            let from = stage.state();
            stage = match self.advance(stage).await {
                Ok(next) => next,
                Err(e) => {
                    debug!(from = ?from, state = ?RunState::Failed, error = %e, "run failed");
                    return Err(e);
                }
            };
            debug!(from = ?from, to = ?stage.state(), "state transition");
        }
    }

    async fn advance(&self, stage: Stage) -> Result<Stage> {
        let next = match stage {
            Stage::Start => Stage::Loaded(self.source.load().await?),

            Stage::Loaded(text) => match first_version_chunk(&text) {
                Some(chunk) => Stage::Segmented(chunk),
                None => Stage::Done(RunOutcome::NoOp(ParseMiss::NoVersionHeading)),
            },

            Stage::Segmented(chunk) => match chunk_header(&chunk) {
                Ok(header) => {
                    debug!(version = %header.version, url = %header.url, "version header parsed");
                    Stage::HeaderParsed { header, chunk }
                }
                Err(miss) => {
                    debug!(line = chunk.header_line(), reason = %miss, "no usable version header");
                    Stage::Done(RunOutcome::NoOp(miss))
                }
            },

            Stage::HeaderParsed { header, chunk } => {
                let sections = parse_sections(chunk.body());
                debug!(
                    sections = ?sections.iter().map(|s| s.heading.as_str()).collect::<Vec<_>>(),
                    "sections parsed"
                );
                Stage::Sectioned { header, sections }
            }

            Stage::Sectioned { header, sections } => {
                let message = self.formatter.format(&self.service_name, &header, &sections);
                Stage::Formatted { header, message }
            }

            Stage::Formatted { header, message } => match &self.sender {
                Some(sender) => {
                    info!(sender = sender.name(), version = %header.version, "sending release message");
                    sender.send(&message).await?;
                    Stage::Done(RunOutcome::Sent {
                        version: header.version,
                        message,
                    })
                }
                None => Stage::Done(RunOutcome::DryRun {
                    version: header.version,
                    message,
                }),
            },

            Stage::Done(outcome) => Stage::Done(outcome),
        };

        Ok(next)
    }
}
