//! HTTP binding of [`StudyApi`] against the study service's JSON API.

use crate::config::model::ApiConfig;
use crate::study::api::{ApiError, StudyApi, SubmitResponse, Topic, Translation};
use crate::token::RedemptionRequest;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct TextBody<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateBody<'a> {
    text: &'a str,
    topic_title: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EndStudyBody<'a> {
    topic_id: &'a str,
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

pub struct HttpStudyApi {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl HttpStudyApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let resp = self.authorize(self.client.get(self.url(path))).send().await?;
        decode(check(resp).await?).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let resp = self
            .authorize(self.client.post(self.url(path)).json(body))
            .send()
            .await?;
        decode(check(resp).await?).await
    }
}

async fn check(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Server {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl StudyApi for HttpStudyApi {
    async fn get_topic(&self) -> Result<Topic, ApiError> {
        self.get("/study/topic").await
    }

    async fn send_japanese(&self, text: &str) -> Result<SubmitResponse, ApiError> {
        self.post("/study/japanese", &TextBody { text }).await
    }

    async fn send_english(&self, text: &str) -> Result<SubmitResponse, ApiError> {
        self.post("/study/english", &TextBody { text }).await
    }

    async fn translate(
        &self,
        source_text: &str,
        topic_title: &str,
    ) -> Result<Translation, ApiError> {
        let body = TranslateBody {
            text: source_text,
            topic_title,
        };
        self.post("/study/translate", &body).await
    }

    async fn end_study(&self, topic_id: &str) -> Result<(), ApiError> {
        debug!(path = "/study/end", topic_id, "POST");
        let resp = self
            .authorize(
                self.client
                    .post(self.url("/study/end"))
                    .json(&EndStudyBody { topic_id }),
            )
            .send()
            .await?;
        // Body is ignored; the server may answer with nothing at all.
        check(resp).await?;
        Ok(())
    }

    async fn token_requests(&self) -> Result<Vec<RedemptionRequest>, ApiError> {
        self.get("/token/requests").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn api_for(server: &MockServer, auth_token: Option<&str>) -> HttpStudyApi {
        let config = ApiConfig {
            base_url: format!("{}/", server.base_url()),
            timeout_secs: 5,
            auth_token: auth_token.map(String::from),
        };
        HttpStudyApi::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_get_topic() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/study/topic")
                    .header("authorization", "Bearer secret");
                then.status(200).json_body(json!({
                    "topicId": "t1",
                    "topicTitle": "Remote work",
                    "topicDescription": "Is remote work good?"
                }));
            })
            .await;

        let topic = api_for(&server, Some("secret")).get_topic().await.unwrap();
        mock.assert_async().await;
        assert_eq!(topic.topic_id, "t1");
        assert_eq!(topic.topic_title, "Remote work");
    }

    #[tokio::test]
    async fn test_send_japanese_rejection_is_not_an_error() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/study/japanese")
                    .json_body(json!({ "text": "こんにちは" }));
                then.status(200)
                    .json_body(json!({ "success": false, "message": "too short" }));
            })
            .await;

        let res = api_for(&server, None)
            .send_japanese("こんにちは")
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(res, SubmitResponse::rejected("too short"));
    }

    #[tokio::test]
    async fn test_translate_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/study/translate")
                    .json_body(json!({ "text": "猫が好き", "topicTitle": "Pets" }));
                then.status(200).json_body(json!({ "translation": "I like cats." }));
            })
            .await;

        let res = api_for(&server, None)
            .translate("猫が好き", "Pets")
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(res.translation, "I like cats.");
    }

    #[tokio::test]
    async fn test_end_study_accepts_empty_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/study/end")
                    .json_body(json!({ "topicId": "t1" }));
                then.status(204);
            })
            .await;

        api_for(&server, None).end_study("t1").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/study/topic");
                then.status(503).body("maintenance");
            })
            .await;

        let err = api_for(&server, None).get_topic().await.unwrap_err();
        match err {
            ApiError::Server { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/study/english");
                then.status(200).body("not json");
            })
            .await;

        let err = api_for(&server, None).send_english("Hi").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_token_requests() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/token/requests");
                then.status(200).json_body(json!([{
                    "userId": "u1",
                    "token": 100,
                    "tokenRate": 5,
                    "price": 450,
                    "createdAt": 1700000000000i64,
                    "status": "Issued",
                    "amazonGiftCode": "AQ-1234"
                }]));
            })
            .await;

        let requests = api_for(&server, None).token_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].gift_code.as_deref(), Some("AQ-1234"));
    }

    #[tokio::test]
    async fn test_network_error() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:1".into(),
            timeout_secs: 2,
            auth_token: None,
        };
        let err = HttpStudyApi::new(&config)
            .unwrap()
            .get_topic()
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
