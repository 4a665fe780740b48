#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use schemaform::{FormOptions, HttpReply, RequestError, Transport};
use serde_json::{Value, json};
use url::Url;

pub const TARGET: &str = "contact-target";
pub const FORM_ID: &str = "contact";

/// What the scripted service does with the next request.
#[derive(Debug, Clone)]
pub enum Scripted {
    Reply(HttpReply),
    Fail(RequestError),
    /// Never answers; the caller's timeout has to fire.
    Hang,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
}

/// Transport that answers from a queue and records every request.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<Recorded>>,
}

impl ScriptedTransport {
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into_iter().collect()),
            requests: Mutex::default(),
        })
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn posts(&self) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|request| request.method == "POST")
            .collect()
    }

    async fn answer(&self, request: Recorded) -> Result<HttpReply, RequestError> {
        self.requests.lock().unwrap().push(request);
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Reply(reply)) => Ok(reply),
            Some(Scripted::Fail(err)) => Err(err),
            Some(Scripted::Hang) => std::future::pending().await,
            None => panic!("unexpected request: script exhausted"),
        }
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &Url) -> Result<HttpReply, RequestError> {
        self.answer(Recorded {
            method: "GET",
            url: url.to_string(),
            body: None,
        })
        .await
    }

    async fn post_json(&self, url: &Url, body: &Value) -> Result<HttpReply, RequestError> {
        self.answer(Recorded {
            method: "POST",
            url: url.to_string(),
            body: Some(body.clone()),
        })
        .await
    }
}

pub fn reply(status: u16, body: Value) -> Scripted {
    Scripted::Reply(HttpReply::new(status, body.to_string()))
}

pub fn options() -> FormOptions {
    FormOptions::parse("https://forms.example.com").expect("base url")
}

/// Enveloped schema with a required email field and an optional checkbox.
pub fn contact_schema() -> Value {
    json!({
        "success": true,
        "data": [{
            "id": FORM_ID,
            "name": "Contact",
            "description": "We reply within a day.",
            "fields": [
                {
                    "name": "email",
                    "fieldType": "email",
                    "label": "Email",
                    "required": true,
                    "regex": "^[^@\\s]+@[^@\\s]+$"
                },
                {
                    "name": "agree",
                    "fieldType": "checkbox",
                    "label": "Keep me posted"
                }
            ]
        }]
    })
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Bare schema with a single required email field.
pub fn email_only_schema() -> Value {
    json!({
        "fields": [
            {"name": "email", "fieldType": "email", "label": "Email", "required": true}
        ]
    })
}
