#![cfg(test)]

//! Tests against local HTTP servers standing in for the Practicum API and the
//! Telegram Bot API.

use homework_bot::{
    base::{
        config::{Config, ConfigInner},
        error::BotError,
        types::Cursor,
    },
    interaction::poll::run_cycle,
    service::{
        homework::{GenericHomeworkClient, HomeworkClient, practicum::PracticumClient},
        notify::{GenericNotifier, Notifier, telegram::parse_recipient},
    },
};
use mockito::Matcher;
use serde_json::json;
use teloxide::types::{ChatId, Recipient};

const STATUS_PATH: &str = "/api/user_api/homework_statuses/";
const TEST_BOT_TOKEN: &str = "123456:test_bot_token";

const SEND_MESSAGE_OK: &str = r#"{
    "ok": true,
    "result": {
        "message_id": 1,
        "date": 1700000000,
        "chat": {"id": 123, "type": "private", "first_name": "Student"},
        "from": {"id": 123456, "is_bot": true, "first_name": "HomeworkBot", "username": "homework_bot"},
        "text": "ok"
    }
}"#;

/// Helper that points both services at a mock server.
fn config_for(server_url: &str) -> Config {
    Config::from(ConfigInner {
        practicum_token: "practicum-test".to_string(),
        telegram_token: TEST_BOT_TOKEN.to_string(),
        telegram_chat_id: "123".to_string(),
        practicum_endpoint: format!("{server_url}{STATUS_PATH}"),
        retry_time: 600,
        telegram_api_url: Some(server_url.to_string()),
    })
}

#[tokio::test]
async fn test_practicum_request_shape() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", STATUS_PATH)
        .match_header("authorization", "OAuth practicum-test")
        .match_query(Matcher::UrlEncoded("from_date".into(), "1699999000".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"homeworks": [], "current_date": 1700000000}"#)
        .create_async()
        .await;

    let client = PracticumClient::new(&config_for(&server.url()));
    let body = client.homework_statuses(1_699_999_000).await.unwrap();

    assert_eq!(body, json!({"homeworks": [], "current_date": 1700000000}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_practicum_non_200_is_wrong_answer() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server.mock("GET", STATUS_PATH).match_query(Matcher::Any).with_status(500).create_async().await;

    let config = config_for(&server.url());
    let client = PracticumClient::new(&config);
    let err = client.homework_statuses(0).await.unwrap_err();

    assert!(matches!(&err, BotError::WrongApiAnswer { status, .. } if status.as_u16() == 500));
    let text = err.to_string();
    assert!(text.contains(&config.practicum_endpoint));
    assert!(text.contains("500"));
}

#[tokio::test]
async fn test_practicum_invalid_json() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server.mock("GET", STATUS_PATH).match_query(Matcher::Any).with_status(200).with_body("<html>maintenance</html>").create_async().await;

    let client = PracticumClient::new(&config_for(&server.url()));
    let err = client.homework_statuses(0).await.unwrap_err();

    assert!(matches!(err, BotError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_practicum_unreachable() {
    let config = Config::from(ConfigInner {
        practicum_endpoint: format!("http://127.0.0.1:1{STATUS_PATH}"),
        ..(*config_for("http://127.0.0.1:1")).clone()
    });

    let err = PracticumClient::new(&config).homework_statuses(0).await.unwrap_err();

    assert!(matches!(&err, BotError::ApiConnection { from_date: 0, .. }));
    assert!(err.to_string().contains(&config.practicum_endpoint));
}

#[tokio::test]
async fn test_telegram_send_message() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("/bot{TEST_BOT_TOKEN}/SendMessage").as_str())
        .match_body(Matcher::PartialJson(json!({"chat_id": 123, "text": "Работа взята на проверку ревьюером."})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SEND_MESSAGE_OK)
        .create_async()
        .await;

    let notifier = Notifier::telegram(&config_for(&server.url())).unwrap();
    notifier.send_message("Работа взята на проверку ревьюером.").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_telegram_failure_is_send_message_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("/bot{TEST_BOT_TOKEN}/SendMessage").as_str())
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#)
        .create_async()
        .await;

    let notifier = Notifier::telegram(&config_for(&server.url())).unwrap();
    let err = notifier.send_message("hello").await.unwrap_err();

    assert!(matches!(&err, BotError::SendMessage(reason) if reason.contains("chat not found")));
    mock.assert_async().await;
}

#[test]
fn test_blank_telegram_api_url_uses_default() {
    for blank in ["", "   "] {
        let config = Config::from(ConfigInner {
            telegram_api_url: Some(blank.to_string()),
            ..(*config_for("http://127.0.0.1:1")).clone()
        });

        assert!(Notifier::telegram(&config).is_ok());
    }

    let config = Config::from(ConfigInner {
        telegram_api_url: Some("not a url".to_string()),
        ..(*config_for("http://127.0.0.1:1")).clone()
    });
    assert!(Notifier::telegram(&config).is_err());
}

#[tokio::test]
async fn test_server_error_notice_names_endpoint_and_status() {
    let mut server = mockito::Server::new_async().await;
    let config = config_for(&server.url());

    let _status = server.mock("GET", STATUS_PATH).match_query(Matcher::Any).with_status(500).create_async().await;
    let notice = server
        .mock("POST", format!("/bot{TEST_BOT_TOKEN}/SendMessage").as_str())
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("Сбой в работе программы".to_string()),
            Matcher::Regex(config.practicum_endpoint.clone()),
            Matcher::Regex("500".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SEND_MESSAGE_OK)
        .expect(1)
        .create_async()
        .await;

    let homework = HomeworkClient::practicum(&config);
    let notifier = Notifier::telegram(&config).unwrap();

    let mut cursor = Cursor::new(1700000000);
    let result = run_cycle(&mut cursor, &homework, &notifier).await;

    assert!(matches!(result, Err(BotError::WrongApiAnswer { .. })));
    assert_eq!(cursor.value(), 1700000000);
    notice.assert_async().await;
}

#[test]
fn test_parse_recipient() {
    assert_eq!(parse_recipient("123"), Recipient::Id(ChatId(123)));
    assert_eq!(parse_recipient("-100200300"), Recipient::Id(ChatId(-100200300)));
    assert_eq!(parse_recipient("@homework_channel"), Recipient::ChannelUsername("@homework_channel".to_string()));
}
