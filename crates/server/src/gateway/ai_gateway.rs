use async_trait::async_trait;
use futures::TryStreamExt;
use portfolio_shared::{ChatMessage, ChatRole};
use serde::Serialize;

use super::{ChatGateway, CompletionOutcome};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Persona context prepended as the system message of every conversation.
pub const PERSONA_CONTEXT: &str = r#"You are Roksana Akter's AI assistant on her portfolio website. You help visitors learn about Roksana's experience, skills, and projects.

## About Roksana Akter:
- Full Name: ROKSANA AKTER
- Email: roksana.tech.2000@gmail.com
- Role: AI Engineer & Flutter Developer
- Currently working as Software Engineer at BETOPIA GROUP
- Education: BSc in Computer Science from BSMRSTU (Bangabandhu Sheikh Mujibur Rahman Science and Technology University)

## Technical Skills:
**AI & Machine Learning:**
- TensorFlow, Keras, PyTorch, Scikit-learn, XGBoost
- CNNs, RNNs, Transformers
- Computer Vision, NLP, Deep Learning, Generative AI

**Mobile Development:**
- Flutter, React, HTML, CSS

**Programming Languages:**
- Python, Dart, JavaScript, Java, C++, SQL

**Data & Databases:**
- Pandas, NumPy, PostgreSQL, MongoDB, MySQL
- Vector DBs, FAISS, Data Analysis

**Tools & Frameworks:**
- Git, Docker, FastAPI, Streamlit, VS Code, Postman
- OpenCV, Hugging Face

**Cloud & DevOps:**
- GitHub Actions, CI/CD

## Experience:
- Software Engineer at BETOPIA GROUP
- Specializes in machine learning, computer vision, NLP, and cross-platform mobile development
- Has worked on multi-agent orchestration systems
- Built AI-powered mobile apps published on Play Store

## Key Strengths:
- Building intelligent systems with cutting-edge AI technology
- Creating beautiful mobile applications with Flutter
- Full-stack innovation with seamless API integrations
- Solving real-world problems with technology

## Response Guidelines:
- Be friendly, professional, and helpful
- Speak about Roksana in third person when describing her work
- If asked about hiring or contact, provide her email
- Keep responses concise but informative
- If you don't know something specific, say so politely
- Use Bengali if the user writes in Bengali"#;

#[derive(Serialize)]
struct CompletionRequest<'a> {
  model: &'a str,
  messages: Vec<ChatMessage>,
  stream: bool,
}

/// HTTP transport to the hosted completion gateway.
///
/// The relay never buffers or inspects the reply: a 2xx body is handed back
/// as the raw byte stream, so the caller sees the upstream's own SSE chunking
/// and termination.
pub struct AiGateway {
  client: reqwest::Client,
  api_key: String,
  model: String,
  url: String,
}

impl AiGateway {
  pub fn new(
    api_key: impl Into<String>,
    model: impl Into<String>,
    base_url: impl Into<String>,
  ) -> Self {
    let base: String = base_url.into();
    let url = format!("{}{COMPLETIONS_PATH}", base.trim_end_matches('/'));
    Self {
      client: reqwest::Client::new(),
      api_key: api_key.into(),
      model: model.into(),
      url,
    }
  }
}

#[async_trait]
impl ChatGateway for AiGateway {
  async fn stream_completion(
    &self,
    messages: Vec<ChatMessage>,
  ) -> anyhow::Result<CompletionOutcome> {
    let mut outbound = Vec::with_capacity(messages.len() + 1);
    outbound.push(ChatMessage {
      role: ChatRole::System,
      content: PERSONA_CONTEXT.to_owned(),
    });
    outbound.extend(messages);

    let request = CompletionRequest {
      model: &self.model,
      messages: outbound,
      stream: true,
    };

    let response = self
      .client
      .post(&self.url)
      .bearer_auth(&self.api_key)
      .json(&request)
      .send()
      .await?;

    let status = response.status();
    if status.is_success() {
      let stream = response
        .bytes_stream()
        .map_err(|err| Box::new(err) as Box<dyn std::error::Error + Send + Sync>);
      return Ok(CompletionOutcome::Stream(Box::pin(stream)));
    }

    Ok(match status.as_u16() {
      429 => CompletionOutcome::RateLimited,
      402 => CompletionOutcome::PaymentRequired,
      _ => CompletionOutcome::Failed {
        status: status.as_u16(),
        body: response.text().await.unwrap_or_default(),
      },
    })
  }
}
