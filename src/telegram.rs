//! Minimal Telegram Bot API client: long-polled `getUpdates` and
//! `sendMessage` with Markdown rendering.

use hyper::Uri;
use serde_derive::Deserialize;

use crate::constants::TELEGRAM_API_AUTHORITY;
use crate::fetch::{get_json, FetchError, HttpsClient};

#[derive(Debug, Deserialize)]
pub(crate) struct UpdatesResponse {
    pub(crate) ok: bool,
    #[serde(default)]
    pub(crate) result: Vec<Update>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Update {
    pub(crate) update_id: i64,
    pub(crate) message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Message {
    pub(crate) chat: Chat,
    pub(crate) text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Chat {
    pub(crate) id: i64,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    ok: bool,
}

pub(crate) struct Bot {
    client: HttpsClient,
    token: String,
}

impl Bot {
    pub(crate) fn new(client: HttpsClient, token: String) -> Self {
        Self { client, token }
    }

    pub(crate) async fn get_updates(
        &self,
        offset: i64,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, FetchError> {
        let uri = self.method_uri(
            "getUpdates",
            &format!("?offset={offset}&timeout={timeout_secs}"),
        )?;
        let response: UpdatesResponse = get_json(&self.client, uri).await?;
        if !response.ok {
            return Err(FetchError::Rejected);
        }
        Ok(response.result)
    }

    /// Replies are monospace tables, so Markdown is always on and the
    /// website link preview is suppressed.
    pub(crate) async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), FetchError> {
        let query = format!(
            "?chat_id={chat_id}&parse_mode=Markdown&disable_web_page_preview=true&text={}",
            urlencoding::encode(text)
        );
        let uri = self.method_uri("sendMessage", &query)?;
        let response: SendResponse = get_json(&self.client, uri).await?;
        if !response.ok {
            return Err(FetchError::Rejected);
        }
        Ok(())
    }

    fn method_uri(&self, method: &str, query: &str) -> Result<Uri, hyper::http::Error> {
        Uri::builder()
            .scheme("https")
            .authority(TELEGRAM_API_AUTHORITY)
            .path_and_query(format!("/bot{}/{method}{query}", self.token))
            .build()
    }
}
