//! Client gateway against a scripted coffee server.

mod common;

use std::time::Duration;

use coffee_lpu237::protocol::{ActionCode, DataFieldType, ParsedSystemEvent};
use coffee_lpu237::{Callbacks, DataField, DeviceIndex, Error};
use common::{MockServer, Outgoing, reply, reply_list, send};
use tokio::sync::mpsc;

/// Script that never answers.
fn silent(_: &coffee_lpu237::Packet) -> Vec<Outgoing> {
    Vec::new()
}

// ============================================================================
// Session
// ============================================================================

#[tokio::test]
async fn test_connect_reports_session() -> anyhow::Result<()> {
    common::init_tracing();
    let server = MockServer::start(7, silent).await;
    let client = server.client();

    let session = client.connect().await?;
    assert_eq!(session.to_string(), "7");
    assert!(client.is_connected());

    let again = client.connect().await?;
    assert_eq!(again, session);

    let closed = client.disconnect().await?;
    assert_eq!(closed, Some(session));
    assert!(!client.is_connected());
    assert_eq!(client.disconnect().await?, None);
    Ok(())
}

#[tokio::test]
async fn test_requests_need_session() {
    let client = coffee_lpu237::Client::builder()
        .port(1)
        .build()
        .expect("client");
    let err = client
        .device_send(DeviceIndex::new(5), 1, "ff00")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotConnected));
}

// ============================================================================
// Manager requests
// ============================================================================

#[tokio::test]
async fn test_echo_hex_round_trip() -> anyhow::Result<()> {
    let mut server = MockServer::start(3, |request| {
        let field = request.data_field.clone().unwrap_or(DataField::Text(String::new()));
        vec![send(reply(request, field))]
    })
    .await;
    let client = server.client();
    client.connect().await?;

    assert_eq!(client.echo_hex("a1b2").await?, "a1b2");

    let request = server.next_request(ActionCode::Echo).await;
    assert_eq!(request.data_field_type, DataFieldType::Hex);

    let err = client.echo_hex("a1b").await.unwrap_err();
    assert!(err.is_validation_error());
    Ok(())
}

#[tokio::test]
async fn test_device_list_with_filter() -> anyhow::Result<()> {
    let mut server = MockServer::start(3, |request| {
        vec![send(reply_list(
            request,
            &["\\\\?\\hid#vid_134b&pid_0206#1", "\\\\?\\hid#vid_134b&pid_0206#2"],
        ))]
    })
    .await;
    let client = server.client();
    client.connect().await?;

    let devices = client.device_list(Some("hid#vid_134b")).await?;
    assert_eq!(devices.len(), 2);

    let request = server.next_request(ActionCode::DeviceList).await;
    assert_eq!(request.data_field, Some(DataField::from("hid#vid_134b")));
    Ok(())
}

#[tokio::test]
async fn test_file_size_parsed() -> anyhow::Result<()> {
    let mut server =
        MockServer::start(3, |request| vec![send(reply_list(request, &["success", "42"]))]).await;
    let client = server.client();
    client.connect().await?;

    assert_eq!(client.file_get_size().await?, 42);

    let request = server.next_request(ActionCode::FileOperation).await;
    assert_eq!(request.device_index, DeviceIndex::MANAGER);
    Ok(())
}

#[tokio::test]
async fn test_kernel_error_status_rejected() -> anyhow::Result<()> {
    let server =
        MockServer::start(3, |request| vec![send(reply_list(request, &["error", "busy"]))]).await;
    let client = server.client();
    client.connect().await?;

    let err = client.kernel_load("lpu237").await.unwrap_err();
    assert!(matches!(err, Error::ServerRejected { .. }));
    Ok(())
}

// ============================================================================
// Device requests
// ============================================================================

#[tokio::test]
async fn test_device_send_resolves_success() -> anyhow::Result<()> {
    let mut server =
        MockServer::start(7, |request| vec![send(reply_list(request, &["success"]))]).await;
    let client = server.client();
    client.connect().await?;

    let field = client.device_send(DeviceIndex::new(5), 1, "ff00").await?;
    assert_eq!(field.first(), Some("success"));

    let request = server.next_request(ActionCode::DeviceSend).await;
    assert_eq!(request.device_index, DeviceIndex::new(5));
    assert_eq!(request.out_id, 1);
    assert_eq!(request.data_field, Some(DataField::from("ff00")));
    assert!(client.is_queue_empty(DeviceIndex::new(5)));
    Ok(())
}

#[tokio::test]
async fn test_device_open_refused_returns_undefined() -> anyhow::Result<()> {
    let server = MockServer::start(7, |request| vec![send(reply_list(request, &["error"]))]).await;
    let client = server.client();
    client.connect().await?;

    let index = client.device_open("\\\\?\\hid#vid_134b", false).await?;
    assert!(index.is_undefined());
    Ok(())
}

#[tokio::test]
async fn test_shared_open_marks_request() -> anyhow::Result<()> {
    let mut server =
        MockServer::start(7, |request| vec![send(common::open_reply(request, 4))]).await;
    let client = server.client();
    client.connect().await?;

    let index = client.device_open("hid::mi_01", true).await?;
    assert_eq!(index, DeviceIndex::new(4));

    let request = server.next_request(ActionCode::DeviceOpen).await;
    assert_eq!(request.data_field, Some(DataField::list(["hid:mi_01", "share"])));
    assert!(client.is_queue_empty(DeviceIndex::MANAGER));
    Ok(())
}

#[tokio::test]
async fn test_replies_resolve_in_fifo_order() -> anyhow::Result<()> {
    let mut server = MockServer::start(7, silent).await;
    let client = server.client();
    client.connect().await?;
    let device = DeviceIndex::new(2);

    let first = tokio::spawn({
        let client = client.clone();
        async move { client.device_receive(device, 0).await }
    });
    let request = server.next_request(ActionCode::DeviceReceive).await;

    let second = tokio::spawn({
        let client = client.clone();
        async move { client.device_receive(device, 0).await }
    });
    server.next_request(ActionCode::DeviceReceive).await;

    server.push(send(reply(&request, "aa")));
    server.push(send(reply(&request, "bb")));

    assert_eq!(first.await??.first(), Some("aa"));
    assert_eq!(second.await??.first(), Some("bb"));
    Ok(())
}

#[tokio::test]
async fn test_system_event_leaves_pending_record() -> anyhow::Result<()> {
    let mut server = MockServer::start(7, silent).await;
    let client = server.client();
    let (events_tx, mut events) = mpsc::unbounded_channel();
    client.set_system_event_handler(move |event| {
        let _ = events_tx.send(event.parse());
    });
    client.connect().await?;

    let pending = tokio::spawn({
        let client = client.clone();
        async move { client.device_receive(DeviceIndex::new(3), 0).await }
    });
    let request = server.next_request(ActionCode::DeviceReceive).await;

    server.push(send(common::system_event(
        7,
        ActionCode::DevicePlugIn,
        &["P", "\\\\?\\hid#vid_134b&pid_0206#9"],
    )));
    let event = tokio::time::timeout(Duration::from_secs(5), events.recv())
        .await?
        .expect("event");
    assert!(matches!(event, ParsedSystemEvent::DevicePlugIn { plugged_in: true, .. }));
    assert!(!client.is_queue_empty(DeviceIndex::new(3)));

    server.push(send(reply(&request, "c0ffee")));
    assert_eq!(pending.await??.first(), Some("c0ffee"));
    Ok(())
}

#[tokio::test]
async fn test_event_handler_can_clear_itself() -> anyhow::Result<()> {
    let server = MockServer::start(7, |request| {
        let field = request.data_field.clone().unwrap_or(DataField::Text(String::new()));
        vec![send(reply(request, field))]
    })
    .await;
    let client = server.client();
    let (events_tx, mut events) = mpsc::unbounded_channel();
    let handle = client.clone();
    client.set_system_event_handler(move |event| {
        let _ = events_tx.send(event.action);
        handle.clear_system_event_handler();
    });
    client.connect().await?;

    server.push(send(common::system_event(
        7,
        ActionCode::DevicePlugIn,
        &["P", "\\\\?\\hid#vid_134b&pid_0206#9"],
    )));
    let action = tokio::time::timeout(Duration::from_secs(5), events.recv())
        .await?
        .expect("event");
    assert_eq!(action, ActionCode::DevicePlugIn);

    let echoed = tokio::time::timeout(Duration::from_secs(5), client.echo_string("hi")).await??;
    assert_eq!(echoed.as_text(), Some("hi"));
    Ok(())
}

#[tokio::test]
async fn test_unexpected_close_fails_pending() -> anyhow::Result<()> {
    let mut server = MockServer::start(7, silent).await;
    let client = server.client();
    client.connect().await?;

    let pending = tokio::spawn({
        let client = client.clone();
        async move { client.device_receive(DeviceIndex::new(3), 0).await }
    });
    server.next_request(ActionCode::DeviceReceive).await;
    server.push(Outgoing::Close);

    let err = pending.await?.unwrap_err();
    assert!(err.is_connection_error());

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!client.is_connected());
    Ok(())
}

#[tokio::test]
async fn test_timeout_keeps_connection() -> anyhow::Result<()> {
    let server = MockServer::start(7, silent).await;
    let client = server.client_with_timeout(Duration::from_millis(50));
    client.connect().await?;

    let err = client
        .device_receive(DeviceIndex::new(3), 0)
        .await
        .unwrap_err();
    assert!(err.is_timeout());
    assert!(client.is_connected());
    Ok(())
}

#[tokio::test]
async fn test_callback_form_delivers_data() -> anyhow::Result<()> {
    let server =
        MockServer::start(7, |request| vec![send(reply_list(request, &["success"]))]).await;
    let client = server.client();
    client.connect().await?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let error_tx = tx.clone();
    let callbacks = Callbacks::new(
        Box::new(move |index, field| {
            let _ = tx.send(Ok((index, field)));
        }),
        Box::new(move |_, error| {
            let _ = error_tx.send(Err(error));
        }),
    );
    assert!(client.device_send_with_callback(DeviceIndex::new(6), 0, "00", callbacks));

    let (index, field) = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await?
        .expect("callback")?;
    assert_eq!(index, DeviceIndex::new(6));
    assert_eq!(field.first(), Some("success"));

    let refused = Callbacks::new(Box::new(|_, _| {}), Box::new(|_, _| {}));
    assert!(!client.device_send_with_callback(DeviceIndex::new(6), 300, "00", refused));
    Ok(())
}

// ============================================================================
// Firmware update
// ============================================================================

#[derive(Debug, PartialEq)]
enum UpdateEvent {
    Progress(usize, usize),
    Complete,
    Failed,
}

#[tokio::test]
async fn test_update_record_rearms_until_last_stage() -> anyhow::Result<()> {
    let mut server = MockServer::start(7, silent).await;
    let client = server.client();
    client.connect().await?;
    let device = DeviceIndex::new(4);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let (progress_tx, error_tx) = (tx.clone(), tx.clone());
    let started = client.device_update_start_with_callback(
        device,
        Box::new(move |_, _| {
            let _ = tx.send(UpdateEvent::Complete);
        }),
        Some(Box::new(move |_, current, total| {
            let _ = progress_tx.send(UpdateEvent::Progress(current, total));
        })),
        Box::new(move |_, _| {
            let _ = error_tx.send(UpdateEvent::Failed);
        }),
    );
    assert!(started);

    let request = server.next_request(ActionCode::IndependentBootloader).await;
    assert_eq!(request.data_field, Some(DataField::list(["start", "4"])));

    for stage in ["0", "1", "2"] {
        server.push(send(reply_list(&request, &["success", stage, "3"])));
    }

    let mut seen = Vec::new();
    while seen.last() != Some(&UpdateEvent::Complete) {
        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await?
            .expect("update event");
        seen.push(event);
    }
    assert_eq!(
        seen,
        [
            UpdateEvent::Progress(0, 3),
            UpdateEvent::Progress(1, 3),
            UpdateEvent::Complete,
        ]
    );
    assert!(client.is_queue_empty(device));
    Ok(())
}
