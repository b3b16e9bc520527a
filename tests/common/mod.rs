#![allow(dead_code)]

use std::{cell::RefCell, collections::VecDeque, fs, path::PathBuf};

use anyhow::{Result, anyhow};
use asc_translate::{
    AppStoreConnectClient, Credentials, DeeplClient, Prompter, config::TextSettings,
};
use httpmock::MockServer;
use reqwest::Url;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Answers prompts from a fixed script and records what was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    selections: RefCell<VecDeque<usize>>,
    confirmations: RefCell<VecDeque<bool>>,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(selections: &[usize], confirmations: &[bool]) -> Self {
        Self {
            selections: RefCell::new(selections.iter().copied().collect()),
            confirmations: RefCell::new(confirmations.iter().copied().collect()),
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, prompt: &str, _items: &[String]) -> Result<usize> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.selections
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("unexpected selection prompt: {}", prompt))
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.confirmations
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("unexpected confirmation prompt: {}", prompt))
    }
}

pub fn asc_client(server: &MockServer) -> AppStoreConnectClient {
    let credentials = Credentials {
        issuer_id: "ignored".into(),
        key_id: "ignored".into(),
        p8_private_key_pem: "ignored".into(),
    };
    AppStoreConnectClient::new(credentials)
        .unwrap()
        .with_static_token("test")
        .with_base_url(Url::parse(&server.base_url()).unwrap())
}

pub fn deepl_client(server: &MockServer) -> DeeplClient {
    DeeplClient::new("test-key")
        .unwrap()
        .with_base_url(Url::parse(&server.base_url()).unwrap())
}

/// A source text file inside its own temp dir; keep the dir alive for the test.
pub fn text_settings(contents: &str, language: &str) -> (TempDir, TextSettings) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("source.txt");
    fs::write(&path, contents).unwrap();
    (
        dir,
        TextSettings {
            path,
            language: language.to_string(),
        },
    )
}

pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

pub fn app(id: &str, name: &str) -> Value {
    json!({"type": "apps", "id": id, "attributes": {"name": name}})
}

pub fn version(id: &str, version_string: &str, platform: &str) -> Value {
    json!({
        "type": "appStoreVersions",
        "id": id,
        "attributes": {"versionString": version_string, "platform": platform}
    })
}

pub fn localization(id: &str, locale: &str) -> Value {
    json!({
        "type": "appStoreVersionLocalizations",
        "id": id,
        "attributes": {"locale": locale}
    })
}

pub fn deepl_reply(text: &str) -> Value {
    json!({"translations": [{"detected_source_language": "EN", "text": text}]})
}
