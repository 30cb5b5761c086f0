//! Shared test utilities: canned lookups that record their queries

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use sagx::assistant::Assistant;
use sagx::config::Config;
use sagx::lookup::{
    AnswerLookup, JokeLookup, LookupError, Lookups, WeatherLookup, WeatherReport,
};

/// Canned lookup responses plus a log of every request
#[derive(Default)]
pub struct Canned {
    pub answer: Mutex<Option<String>>,
    pub answer_fails: Mutex<bool>,
    pub joke: Mutex<Option<String>>,
    pub requests: Mutex<Vec<String>>,
}

impl Canned {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_answer(&self, answer: &str) {
        *self.answer.lock().unwrap() = Some(answer.to_string());
    }

    pub fn fail_answers(&self) {
        *self.answer_fails.lock().unwrap() = true;
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: String) {
        self.requests.lock().unwrap().push(request);
    }
}

#[async_trait]
impl WeatherLookup for Canned {
    async fn current(&self, location: &str) -> Result<WeatherReport, LookupError> {
        self.record(format!("weather {}", location));
        Ok(WeatherReport {
            place: location.to_string(),
            temperature: 20.5,
            description: "few clouds".to_string(),
        })
    }
}

#[async_trait]
impl JokeLookup for Canned {
    async fn joke(&self) -> Result<Option<String>, LookupError> {
        self.record("joke".to_string());
        Ok(self.joke.lock().unwrap().clone())
    }
}

#[async_trait]
impl AnswerLookup for Canned {
    async fn answer(&self, query: &str) -> Result<String, LookupError> {
        self.record(format!("answer {}", query));
        if *self.answer_fails.lock().unwrap() {
            return Err(LookupError::Transport {
                service: "answer",
                message: "connection refused".to_string(),
            });
        }
        Ok(self.answer.lock().unwrap().clone().unwrap_or_default())
    }
}

/// An assistant with default config whose lookups all go to `canned`
pub fn assistant(canned: &Arc<Canned>) -> Assistant {
    assistant_with_config(canned, &Config::default())
}

pub fn assistant_with_config(canned: &Arc<Canned>, config: &Config) -> Assistant {
    let lookups = Lookups {
        weather: canned.clone(),
        joke: canned.clone(),
        answer: canned.clone(),
    };
    Assistant::new(config, lookups)
}
