//! Rotating placeholder for the purpose box.
//!
//! The animation types an example prompt one character at a time, holds it,
//! deletes it, pauses, then moves to the next example. Every step is a
//! [`Tick`] issued by a [`Scheduler`]; input cancels the scheduler so steps
//! already in flight are ignored.
//!
//! The site serves the animation through [`frames`], and there the browser
//! stops it by closing the event stream, which drops every pending step.
//! [`Placeholder::stop`] and [`Placeholder::on_input`] drive the same
//! transitions for callers that own the machine and its input directly.

use std::time::Duration;

use futures::Stream;

use crate::{Scheduler, Tick};

pub const TYPE_EVERY: Duration = Duration::from_millis(50);
pub const HOLD_FOR: Duration = Duration::from_secs(2);
pub const DELETE_EVERY: Duration = Duration::from_millis(30);
pub const PAUSE_FOR: Duration = Duration::from_secs(1);

pub const EXAMPLE_PROMPTS: &[&str] = &[
    "I'd like to collaborate on an IoT dashboard project next month...",
    "I'm hiring for a computer vision internship and liked your projects...",
    "Could you share more about the cold chain monitoring system?",
    "We're organising a tech fest and need someone to lead the exhibits...",
    "I have a question about your bus passenger counting work...",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Stopped,
    Typing,
    Holding,
    Deleting,
    Pausing,
}

#[derive(Debug)]
pub struct Placeholder {
    examples: Vec<String>,
    index: usize,
    shown: usize,
    phase: Phase,
    scheduler: Scheduler,
}

impl Placeholder {
    pub fn new(examples: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let examples = examples
            .into_iter()
            .map(Into::into)
            .filter(|example: &String| !example.is_empty())
            .collect();

        Self {
            examples,
            index: 0,
            shown: 0,
            phase: Phase::Stopped,
            scheduler: Scheduler::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase != Phase::Stopped
    }

    /// The characters of the current example typed so far.
    pub fn text(&self) -> &str {
        let example = self.current();
        match example.char_indices().nth(self.shown) {
            Some((end, _)) => &example[..end],
            None => example,
        }
    }

    fn current(&self) -> &str {
        self.examples
            .get(self.index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    fn current_len(&self) -> usize {
        self.current().chars().count()
    }

    /// Starts typing the current example from scratch.
    pub fn start(&mut self) -> Option<Tick> {
        if self.examples.is_empty() {
            return None;
        }

        self.phase = Phase::Typing;
        self.shown = 0;

        Some(self.scheduler.tick(TYPE_EVERY))
    }

    /// Stops the animation and clears its text. Outstanding ticks go stale.
    pub fn stop(&mut self) {
        self.scheduler.cancel();
        self.phase = Phase::Stopped;
        self.shown = 0;
    }

    /// Reacts to the purpose box changing. Any content stops the animation;
    /// an empty box restarts it if it was stopped.
    pub fn on_input(&mut self, value: &str) -> Option<Tick> {
        if !value.is_empty() {
            self.stop();
            return None;
        }

        if self.phase == Phase::Stopped {
            return self.start();
        }

        None
    }

    /// Runs the step `tick` was scheduled for and returns the next one.
    /// Stale ticks do nothing.
    pub fn advance(&mut self, tick: Tick) -> Option<Tick> {
        if !self.scheduler.is_current(tick.token) {
            return None;
        }

        let after = match self.phase {
            Phase::Stopped => return None,
            Phase::Typing => {
                self.shown += 1;
                if self.shown >= self.current_len() {
                    self.phase = Phase::Holding;
                    HOLD_FOR
                } else {
                    TYPE_EVERY
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                DELETE_EVERY
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = Phase::Pausing;
                    PAUSE_FOR
                } else {
                    DELETE_EVERY
                }
            }
            Phase::Pausing => {
                self.index = (self.index + 1) % self.examples.len();
                self.phase = Phase::Typing;
                TYPE_EVERY
            }
        };

        Some(self.scheduler.tick(after))
    }
}

/// Runs `placeholder` on the tokio clock and yields its text every time it
/// changes. Dropping the stream cancels the pending step.
pub fn frames(mut placeholder: Placeholder) -> impl Stream<Item = String> {
    let tick = placeholder.start();
    let last = placeholder.text().to_owned();

    futures::stream::unfold(
        (placeholder, tick, last),
        |(mut placeholder, mut tick, last)| async move {
            loop {
                let current = tick?;
                tokio::time::sleep(current.after).await;
                tick = placeholder.advance(current);

                let text = placeholder.text();
                if text != last {
                    let text = text.to_owned();
                    return Some((text.clone(), (placeholder, tick, text)));
                }
            }
        },
    )
}
