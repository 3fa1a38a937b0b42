#![allow(dead_code)]

use async_trait::async_trait;
use grader::error::TransportError;
use grader::traits::grading_client::GradingClient;
use grader::traits::pacing::Pacing;
use grader::types::AnswerItem;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

/// One scripted reply of a [`ScriptedClient`].
pub enum Reply {
    Text(String),
    Fail(u16),
}

impl Reply {
    pub fn verdict(score: f64) -> Self {
        Reply::Text(format!(
            r#"{{"score": {score}, "strengths": "Buen uso de **conceptos**.", "improvements": "Faltó la **cuantía**.", "feedback": "Debía explicar la **competencia**."}}"#
        ))
    }

    pub fn raw(text: &str) -> Self {
        Reply::Text(text.to_string())
    }
}

/// Grading client that answers from a script, in call order, and records prompts.
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Reply>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedClient {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GradingClient for ScriptedClient {
    async fn grade(
        &self,
        _system_prompt: &str,
        task_prompt: &str,
    ) -> Result<String, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(task_prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Fail(status)) => Err(TransportError::Status {
                status,
                body: "scripted failure".to_string(),
            }),
            None => Err(TransportError::Network("script exhausted".to_string())),
        }
    }
}

/// Pacing policy that only records when it was consulted. Clones share the log.
#[derive(Clone, Default)]
pub struct RecordingPacing {
    pauses: Arc<Mutex<Vec<usize>>>,
}

impl RecordingPacing {
    pub fn pauses(&self) -> Vec<usize> {
        self.pauses.lock().unwrap().clone()
    }
}

#[async_trait]
impl Pacing for RecordingPacing {
    async fn pause(&self, calls_made: usize) {
        self.pauses.lock().unwrap().push(calls_made);
    }
}

pub fn answered(id: i64, answer: &str) -> AnswerItem {
    AnswerItem::new(
        id,
        format!("Pregunta {id}: ¿Qué es la competencia objetiva?"),
        answer,
        format!("Respuesta modelo {id}: criterio por materia y cuantía."),
    )
}

pub fn blank(id: i64) -> AnswerItem {
    answered(id, "")
}
