//! Shared fakes and fixtures for HTTP tests

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response},
};
use docscan::{
    config::{DocscanConfig, OcrConfig},
    error::{Error, Result},
    ingestion::OcrEngine,
    providers::LlmProvider,
    types::ChatMessage,
    AppState,
};
use http_body_util::BodyExt;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const BOUNDARY: &str = "docscan-test-boundary";

/// OCR engine that records the image path it was given
pub struct FakeOcr {
    result: std::result::Result<Vec<String>, String>,
    seen: Mutex<Vec<(PathBuf, bool)>>,
}

impl FakeOcr {
    pub fn returning(fragments: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(fragments.iter().map(|s| s.to_string()).collect()),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(message.to_string()),
            seen: Mutex::new(Vec::new()),
        })
    }

    /// Paths handed to the engine, with whether each existed during recognition
    pub fn seen(&self) -> Vec<(PathBuf, bool)> {
        self.seen.lock().unwrap().clone()
    }
}

impl OcrEngine for FakeOcr {
    fn name(&self) -> &str {
        "fake-ocr"
    }

    fn recognize(&self, image: &Path) -> Result<Vec<String>> {
        self.seen
            .lock()
            .unwrap()
            .push((image.to_path_buf(), image.exists()));
        self.result.clone().map_err(Error::ocr)
    }
}

/// Model that records prompts and returns a canned answer
pub struct FakeLlm {
    answer: std::result::Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeLlm {
    pub fn answering(answer: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: Ok(answer.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for FakeLlm {
    async fn complete(&self, messages: &[ChatMessage], _max_tokens: u32) -> Result<String> {
        let prompt = messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        self.prompts.lock().unwrap().push(prompt);
        self.answer.clone().map_err(Error::llm)
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "fake-llm"
    }

    fn model(&self) -> &str {
        "fake-model"
    }
}

/// App state backed by fakes, with temp files confined to `temp_dir`
pub fn state(temp_dir: &Path, ocr: Arc<FakeOcr>, llm: Arc<FakeLlm>) -> AppState {
    AppState::with_providers(config(temp_dir), ocr, llm)
}

/// Same as [`state`] with a custom upload size limit
pub fn state_with_limit(
    temp_dir: &Path,
    max_upload_size: usize,
    ocr: Arc<FakeOcr>,
    llm: Arc<FakeLlm>,
) -> AppState {
    let mut config = config(temp_dir);
    config.server.max_upload_size = max_upload_size;
    AppState::with_providers(config, ocr, llm)
}

fn config(temp_dir: &Path) -> DocscanConfig {
    DocscanConfig {
        ocr: OcrConfig {
            temp_dir: Some(temp_dir.to_path_buf()),
            ..OcrConfig::default()
        },
        ..DocscanConfig::default()
    }
}

/// One multipart part: (field name, optional filename, bytes)
pub type Part<'a> = (&'a str, Option<&'a str>, &'a [u8]);

/// A file part
pub fn file<'a>(name: &'a str, filename: &'a str, data: &'a [u8]) -> Part<'a> {
    (name, Some(filename), data)
}

/// A plain text part
pub fn field<'a>(name: &'a str, value: &'a str) -> Part<'a> {
    (name, None, value.as_bytes())
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, filename, data) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                    name, filename
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
            ),
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn upload_request(parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(parts)))
        .expect("request builder should not fail")
}

/// Send a request through a freshly built router
pub async fn send(state: AppState, request: Request<Body>) -> Response<Body> {
    docscan::build_router(state)
        .expect("router should build")
        .oneshot(request)
        .await
        .expect("router should respond")
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("response body must be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("response must be valid JSON")
}

/// Build a PDF with one line of text per page
pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).unwrap();
    out
}
