use dineline::clients::{actor_client::ActorClient, OrderClient};
use dineline::framework::{mock::MockClient, FrameworkError};
use dineline::model::{Order, OrderCreate, OrderId};
use dineline::order_actor::OrderError;

/// Real Order actor spawned by hand, the way `OrderSystem` does it.
#[tokio::test]
async fn test_real_order_actor() {
    let (order_actor, order_client) = dineline::order_actor::new();
    let actor_handle = tokio::spawn(order_actor.run(()));

    let params = OrderCreate {
        id: OrderId::from("device-1"),
        items: vec!["Nasi Lemak".to_string(), "Teh Tarik".to_string()],
    };
    let queue_number = order_client.place_order(params).await.unwrap();
    assert_eq!(queue_number, 1);

    let order = order_client
        .get(OrderId::from("device-1"))
        .await
        .unwrap()
        .expect("Order not found");
    assert_eq!(order, Order::new("device-1", vec!["Nasi Lemak".into(), "Teh Tarik".into()], 1));

    // Unknown ids read as absent, not as an error
    assert_eq!(order_client.get(OrderId::from("nobody")).await.unwrap(), None);

    // Cleanup
    drop(order_client);
    actor_handle.await.unwrap();
}

/// Client-only tests: the actor is mocked so every framework error can be provoked.
#[tokio::test]
async fn test_order_client_maps_framework_errors() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_enqueue()
        .return_err(FrameworkError::Duplicate("device-1".into()));
    mock.expect_position(OrderId::from("device-2"))
        .return_err(FrameworkError::NotFound("device-2".into()));
    mock.expect_cancel(OrderId::from("device-3"))
        .return_err(FrameworkError::ActorClosed);
    mock.expect_count().return_err(FrameworkError::ActorDropped);

    let client = OrderClient::new(mock.client());

    let params = OrderCreate {
        id: OrderId::from("device-1"),
        items: vec![],
    };
    assert_eq!(
        client.place_order(params).await.unwrap_err(),
        OrderError::DuplicateOrder(OrderId::from("device-1"))
    );
    assert_eq!(
        client.queue_number(OrderId::from("device-2")).await.unwrap_err(),
        OrderError::OrderNotFound(OrderId::from("device-2"))
    );
    assert!(matches!(
        client.cancel_order(OrderId::from("device-3")).await.unwrap_err(),
        OrderError::ActorCommunicationError(_)
    ));
    assert!(matches!(
        client.count().await.unwrap_err(),
        OrderError::ActorCommunicationError(_)
    ));

    mock.verify();
}

/// Entity errors raised by hooks come back as the same `OrderError`.
#[tokio::test]
async fn test_order_client_unwraps_entity_errors() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_cancel(OrderId::from("device-1"))
        .return_err(FrameworkError::EntityError(Box::new(
            OrderError::OrderNotFound(OrderId::from("device-1")),
        )));

    let client = OrderClient::new(mock.client());
    assert_eq!(
        client.cancel_order(OrderId::from("device-1")).await.unwrap_err(),
        OrderError::OrderNotFound(OrderId::from("device-1"))
    );

    mock.verify();
}

#[tokio::test]
async fn test_order_client_success_paths() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_enqueue().return_ok(7);
    mock.expect_position(OrderId::from("device-1")).return_ok(3);
    mock.expect_cancel(OrderId::from("device-1")).return_ok(());
    mock.expect_snapshot().return_ok(vec![Order::new("device-2", vec![], 1)]);

    let client = OrderClient::new(mock.client());
    let params = OrderCreate {
        id: OrderId::from("device-1"),
        items: vec!["Kopi".into()],
    };
    assert_eq!(client.place_order(params).await.unwrap(), 7);
    assert_eq!(client.queue_number(OrderId::from("device-1")).await.unwrap(), 3);
    client.cancel_order(OrderId::from("device-1")).await.unwrap();
    let queue = client.snapshot().await.unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].id, OrderId::from("device-2"));

    mock.verify();
}
