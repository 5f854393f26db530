//! Integration tests for the /connect, /nickname, /join handshake.

mod common;

use common::TestServer;

const NEED_CONNECT: &str = "Please enter the /connect command to establish the connection.";
const NEED_NICKNAME: &str = "Please enter the /nickname command to register.";
const NEED_JOIN: &str = "Please join a channel with /join <channel>.";

#[tokio::test]
async fn test_out_of_order_commands_get_guidance() {
    let server = TestServer::spawn(17101)
        .await
        .expect("Failed to spawn test server");
    let mut client = server.connect().await.expect("Failed to connect");

    client.expect_reply("/join lobby", NEED_CONNECT).await.unwrap();
    client.expect_reply("hello?", NEED_CONNECT).await.unwrap();
    client.expect_reply("/nickname Alice", NEED_CONNECT).await.unwrap();
    client.expect_reply("/whois Bob", NEED_CONNECT).await.unwrap();

    client
        .expect_reply(
            "/connect",
            "Connected to the server. You can now register choosing a nickname with /nickname.",
        )
        .await
        .unwrap();
    client
        .expect_reply("/connect", "You are already connected.")
        .await
        .unwrap();
    client.expect_reply("/join lobby", NEED_NICKNAME).await.unwrap();
    client.expect_reply("hello?", NEED_NICKNAME).await.unwrap();

    client
        .expect_reply(
            "/nickname Alice Smith",
            "Your nickname is now Alice Smith. You can now join a channel with /join.",
        )
        .await
        .unwrap();
    client.expect_reply("hello?", NEED_JOIN).await.unwrap();
    client.expect_reply("/kick Bob", NEED_JOIN).await.unwrap();

    let reply = client.join("lobby").await.unwrap();
    assert_eq!(reply, "Channel lobby created");
}

#[tokio::test]
async fn test_ping_answered_in_every_stage() {
    let server = TestServer::spawn(17102)
        .await
        .expect("Failed to spawn test server");
    let mut client = server.connect().await.expect("Failed to connect");

    client.sync().await.unwrap();
    client.handshake("Alice").await.unwrap();
    client.sync().await.unwrap();
    client.join("lobby").await.unwrap();
    client.sync().await.unwrap();
}

#[tokio::test]
async fn test_empty_arguments_are_rejected() {
    let server = TestServer::spawn(17103)
        .await
        .expect("Failed to spawn test server");
    let mut client = server.connect().await.expect("Failed to connect");
    client.send("/connect").await.unwrap();
    client.recv().await.unwrap();

    client
        .expect_reply("/nickname   ", "Nickname cannot be empty.")
        .await
        .unwrap();
    // Still unnamed.
    client.expect_reply("/join lobby", NEED_NICKNAME).await.unwrap();

    client
        .expect_reply(
            "/nickname Alice",
            "Your nickname is now Alice. You can now join a channel with /join.",
        )
        .await
        .unwrap();
    client
        .expect_reply("/join", "Channel name cannot be empty.")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unique_nickname_policy() {
    let options = common::ServerOptions {
        unique_nicknames: true,
        ..Default::default()
    };
    let server = TestServer::spawn_with(17104, options)
        .await
        .expect("Failed to spawn test server");

    let _alice = server.named("Alice").await.expect("Alice handshake");
    let mut other = server.connect().await.expect("Failed to connect");
    other.send("/connect").await.unwrap();
    other.recv().await.unwrap();
    other
        .expect_reply("/nickname Alice", "Nickname Alice is already in use.")
        .await
        .unwrap();
}
