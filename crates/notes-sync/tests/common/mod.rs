//! Scripted transport and recording sleeper for synchronizer tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use notes_git::{Transport, TransportResult, WorkItem};
use notes_sync::{CancellationToken, Sleeper};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Stage(Vec<String>),
    Commit(String),
    Push,
}

/// Transport that records every call and fails on demand.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    pub calls: Vec<Call>,
    /// 1-based stage calls that fail
    pub failing_stages: HashSet<usize>,
    /// 1-based commit calls that fail
    pub failing_commits: HashSet<usize>,
    /// Results handed out by successive pushes; `Ok` once drained
    pub push_script: VecDeque<TransportResult>,
    /// Every push fails
    pub push_always_fails: bool,
    /// Cancel this token on the given 1-based push call
    pub cancel_on_push: Option<(usize, CancellationToken)>,
    stage_calls: usize,
    commit_calls: usize,
    push_calls: usize,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_stage(mut self, call: usize) -> Self {
        self.failing_stages.insert(call);
        self
    }

    pub fn fail_commit(mut self, call: usize) -> Self {
        self.failing_commits.insert(call);
        self
    }

    pub fn push_results(mut self, results: impl IntoIterator<Item = TransportResult>) -> Self {
        self.push_script.extend(results);
        self
    }

    pub fn pushes_always_fail(mut self) -> Self {
        self.push_always_fails = true;
        self
    }

    pub fn staged_batches(&self) -> Vec<Vec<String>> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Stage(paths) => Some(paths.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn commit_messages(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Commit(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn push_count(&self) -> usize {
        self.push_calls
    }
}

impl Transport for ScriptedTransport {
    fn stage(&mut self, items: &[WorkItem]) -> TransportResult {
        self.stage_calls += 1;
        self.calls.push(Call::Stage(
            items.iter().map(|i| i.as_str().to_string()).collect(),
        ));
        if self.failing_stages.contains(&self.stage_calls) {
            TransportResult::Failed("fatal: index.lock exists".into())
        } else {
            TransportResult::Ok(String::new())
        }
    }

    fn commit(&mut self, message: &str) -> TransportResult {
        self.commit_calls += 1;
        self.calls.push(Call::Commit(message.to_string()));
        if self.failing_commits.contains(&self.commit_calls) {
            TransportResult::Failed("error: unable to write tree".into())
        } else {
            TransportResult::Ok(format!("[main abc1234] {message}"))
        }
    }

    fn push(&mut self) -> TransportResult {
        self.push_calls += 1;
        self.calls.push(Call::Push);
        if let Some((call, token)) = &self.cancel_on_push
            && *call == self.push_calls
        {
            token.cancel();
        }
        if self.push_always_fails {
            return TransportResult::Failed("remote: rate limited".into());
        }
        self.push_script
            .pop_front()
            .unwrap_or_else(|| TransportResult::Ok("main -> main".into()))
    }
}

/// Sleeper that records requested pauses instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    pub slept: RefCell<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.slept.borrow().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.slept.borrow_mut().push(duration);
    }
}

/// `n` work items under `data/notes`.
pub fn items(n: usize) -> Vec<WorkItem> {
    (0..n)
        .map(|i| WorkItem::new(format!("data/notes/{i:04}.json")))
        .collect()
}

pub fn failed(diagnostic: &str) -> TransportResult {
    TransportResult::Failed(diagnostic.to_string())
}

pub fn ok() -> TransportResult {
    TransportResult::Ok("main -> main".to_string())
}
