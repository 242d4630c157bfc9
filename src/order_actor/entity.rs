//! QueueEntity trait implementation for the Order domain type.
//!
//! This module contains the [`QueueEntity`] trait implementation
//! that enables [`Order`] to be managed by the generic [`crate::framework::QueueActor`].

use crate::framework::QueueEntity;
use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;

impl QueueEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Context = ();
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn create_id(params: &OrderCreate) -> &OrderId {
        &params.id
    }

    fn position(&self) -> usize {
        self.queue_number
    }

    fn set_position(&mut self, position: usize) {
        self.queue_number = position;
    }

    /// Orders are accepted as sent; items are never inspected.
    fn from_create_params(params: OrderCreate, position: usize) -> Result<Self, OrderError> {
        Ok(Self::new(params.id, params.items, position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_keeps_payload_and_position() {
        let params = OrderCreate {
            id: OrderId::from("abc123"),
            items: vec!["Nasi Lemak".to_string(), "Teh Tarik".to_string()],
        };
        assert_eq!(Order::create_id(&params), &OrderId::from("abc123"));

        let mut order = Order::from_create_params(params, 3).unwrap();
        assert_eq!(order.id(), &OrderId::from("abc123"));
        assert_eq!(order.items, vec!["Nasi Lemak", "Teh Tarik"]);
        assert_eq!(order.position(), 3);

        order.set_position(2);
        assert_eq!(order.queue_number, 2);
    }
}
