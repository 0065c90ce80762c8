use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use super::prelude::*;
use crate::gateways::normalization::*;
use ols_entities::builders::*;

pub const REGION: &str = "Toscana";

type Answer = std::result::Result<RawAnswer, RemoteError>;

#[derive(Default)]
struct Script {
    answers: VecDeque<Answer>,
    requests: Vec<NormalizationRequest>,
    // Raised once a request has been answered.
    cancel_after_request: Option<Arc<AtomicBool>>,
}

/// A normalization service that replays scripted answers
/// and records all requests.
pub struct MockService {
    script: Rc<RefCell<Script>>,
    bind_count: Cell<usize>,
    fail_to_bind: bool,
}

pub struct MockBinding {
    script: Rc<RefCell<Script>>,
}

impl MockService {
    pub fn new(answers: Vec<Answer>) -> Self {
        let script = Script {
            answers: answers.into(),
            ..Default::default()
        };
        Self {
            script: Rc::new(RefCell::new(script)),
            bind_count: Cell::new(0),
            fail_to_bind: false,
        }
    }

    pub fn failing_to_bind() -> Self {
        Self {
            fail_to_bind: true,
            ..Self::new(vec![])
        }
    }

    pub fn cancel_after_request(self, flag: Arc<AtomicBool>) -> Self {
        self.script.borrow_mut().cancel_after_request = Some(flag);
        self
    }

    pub fn remaining_answers(&self) -> usize {
        self.script.borrow().answers.len()
    }

    pub fn bind_count(&self) -> usize {
        self.bind_count.get()
    }

    pub fn requests(&self) -> Vec<NormalizationRequest> {
        self.script.borrow().requests.clone()
    }
}

impl NormalizationService for MockService {
    type Binding = MockBinding;
    fn bind(&self) -> std::result::Result<Self::Binding, BindingError> {
        self.bind_count.set(self.bind_count.get() + 1);
        if self.fail_to_bind {
            return Err(BindingError(anyhow::anyhow!("service unavailable")));
        }
        Ok(MockBinding {
            script: Rc::clone(&self.script),
        })
    }
}

impl NormalizationBinding for MockBinding {
    fn request(&self, req: &NormalizationRequest) -> Answer {
        let mut script = self.script.borrow_mut();
        script.requests.push(req.clone());
        let answer = script
            .answers
            .pop_front()
            .unwrap_or_else(|| Err(RemoteError::Transport(anyhow::anyhow!("no more answers"))));
        if let Some(flag) = &script.cancel_after_request {
            flag.store(true, Ordering::Release);
        }
        answer
    }
}

pub fn answer_with_code(code: &str) -> RawAnswer {
    RawAnswer::build().response_code(code).finish()
}

pub fn firenze_via_roma_answer() -> RawAnswer {
    RawAnswer::build()
        .response_code("0")
        .recognized(
            Coordinates::from_lng_lat(11.25, 43.77),
            NormalizedStreetData {
                locality: "Firenze".into(),
                province: "FI".into(),
                postal_code: Some("50100".into()),
                house_number: Some("0".into()),
                street_type: "Via".into(),
                street_name: "Roma".into(),
            },
        )
        .finish()
}

pub fn ambiguous_answer(count: usize) -> RawAnswer {
    (0..count)
        .fold(RawAnswer::build().response_code("7"), |build, i| {
            let nr = (i + 1).to_string();
            build.ambiguous_item(
                Coordinates::from_lng_lat(11.0 + i as f64, 43.0),
                "Via Roma",
                Some(nr.as_str()),
            )
        })
        .finish()
}
