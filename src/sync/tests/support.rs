//! Shared fixtures for sync tests.

use crate::agent::domain::{AgentDescriptor, AgentOverrides, FunctionDef, capture};
use crate::project::domain::{ProjectId, ProjectRoot};
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that advances one second on every reading.
#[derive(Debug)]
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            start: Utc
                .with_ymd_and_hms(2026, 1, 1, 12, 0, 0)
                .single()
                .expect("valid start time"),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + TimeDelta::seconds(tick)
    }
}

#[fixture]
pub fn clock() -> SteppingClock {
    SteppingClock::new()
}

#[fixture]
pub fn project_id() -> ProjectId {
    ProjectId::for_root(&ProjectRoot::new("/srv/sample").expect("valid root"))
}

pub fn descriptor(module: &str, identifier: &str, doc: &str) -> AgentDescriptor {
    let def = FunctionDef::new(module, identifier)
        .expect("valid definition")
        .with_doc(doc);
    capture(&def).expect("capture succeeds")
}

pub fn tagged_descriptor(identifier: &str, tags: &[&str]) -> AgentDescriptor {
    let def = FunctionDef::new("agents/tagged", identifier).expect("valid definition");
    AgentOverrides::new()
        .tags(tags.iter().copied())
        .apply(&def)
        .expect("declaration applies")
}
