use gloo::net::http::Request;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

const LOG_ENDPOINT: &str = "http://localhost:3000/api/logs";

#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Serialize)]
struct LogRequest {
    level: String,
    message: String,
    component: Option<String>,
}

/// Ships frontend log lines to the backend so they land in the audit log.
pub struct Logger;

impl Logger {
    pub fn debug(component: &str, message: &str) {
        Self::ship(LogLevel::Debug, component, message);
    }

    pub fn info(component: &str, message: &str) {
        Self::ship(LogLevel::Info, component, message);
    }

    pub fn warn(component: &str, message: &str) {
        Self::ship(LogLevel::Warn, component, message);
    }

    pub fn error(component: &str, message: &str) {
        Self::ship(LogLevel::Error, component, message);
    }

    fn ship(level: LogLevel, component: &str, message: &str) {
        let request = LogRequest {
            level: level.as_str().to_string(),
            message: message.to_string(),
            component: Some(component.to_string()),
        };

        // Fire and forget; never block the UI on logging
        spawn_local(async move {
            if let Ok(request) = Request::post(LOG_ENDPOINT).json(&request) {
                let _ = request.send().await;
            }
        });
    }
}
