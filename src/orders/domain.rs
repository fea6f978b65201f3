use crate::listings::domain::lenient_datetime;
use crate::listings::ListingUnit;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Negotiation state of an order. Transitions happen server-side; this layer
/// only reads the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    New,
    Pending,
    Accepted,
    Rejected,
    Completed,
    Negotiating,
}

impl OrderStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "Новый",
            Self::Pending => "В ожидании",
            Self::Accepted => "Принят",
            Self::Rejected => "Отклонён",
            Self::Completed => "Завершён",
            Self::Negotiating => "Торг",
        }
    }

    pub const fn is_open(self) -> bool {
        matches!(self, Self::New | Self::Pending | Self::Negotiating)
    }
}

/// A coherent counter-proposal: price, total, author, and timestamp always
/// travel together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterOffer {
    pub price_per_unit: f64,
    pub total_amount: f64,
    pub message: Option<String>,
    pub offered_at: DateTime<Utc>,
    pub offered_by: String,
    pub buyer_accepted: Option<bool>,
}

/// An order placed against a listing. The `offer_*` fields are denormalized
/// display copies; the referenced listing is not owned by this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "OrderWire", into = "OrderWire")]
pub struct Order {
    pub id: String,
    pub offer_id: String,
    pub offer_title: Option<String>,
    pub offer_image: Option<String>,
    pub offer_category: Option<String>,
    pub offer_transport_service_type: Option<String>,
    pub is_request: bool,
    pub buyer_id: String,
    pub buyer_name: Option<String>,
    pub buyer_phone: Option<String>,
    pub seller_id: String,
    pub seller_name: Option<String>,
    pub seller_phone: Option<String>,
    pub quantity: f64,
    pub unit: Option<ListingUnit>,
    pub price_per_unit: f64,
    pub total_amount: f64,
    pub counter_offer: Option<CounterOffer>,
    pub delivery_address: Option<String>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub delivery_comment: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Flat backend representation. The counter-offer arrives as six optional
/// sibling fields; folding happens in the `From` conversions so `Order`
/// itself can hold the all-or-none invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderWire {
    id: String,
    offer_id: String,
    #[serde(default)]
    offer_title: Option<String>,
    #[serde(default)]
    offer_image: Option<String>,
    #[serde(default)]
    offer_category: Option<String>,
    #[serde(default)]
    offer_transport_service_type: Option<String>,
    #[serde(default)]
    is_request: bool,
    buyer_id: String,
    #[serde(default)]
    buyer_name: Option<String>,
    #[serde(default)]
    buyer_phone: Option<String>,
    seller_id: String,
    #[serde(default)]
    seller_name: Option<String>,
    #[serde(default)]
    seller_phone: Option<String>,
    quantity: f64,
    #[serde(default)]
    unit: Option<ListingUnit>,
    price_per_unit: f64,
    total_amount: f64,
    #[serde(default)]
    counter_price_per_unit: Option<f64>,
    #[serde(default)]
    counter_total_amount: Option<f64>,
    #[serde(default)]
    counter_offer_message: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    counter_offered_at: Option<DateTime<Utc>>,
    #[serde(default)]
    counter_offered_by: Option<String>,
    #[serde(default)]
    buyer_accepted_counter: Option<bool>,
    #[serde(default)]
    delivery_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    delivery_date: Option<DateTime<Utc>>,
    #[serde(default)]
    delivery_comment: Option<String>,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl From<OrderWire> for Order {
    fn from(wire: OrderWire) -> Self {
        // A counter-offer is only real when price, total, author, and
        // timestamp all arrived; stray partial fields are dropped.
        let counter_offer = match (
            wire.counter_price_per_unit,
            wire.counter_total_amount,
            wire.counter_offered_at,
            wire.counter_offered_by,
        ) {
            (Some(price_per_unit), Some(total_amount), Some(offered_at), Some(offered_by)) => {
                Some(CounterOffer {
                    price_per_unit,
                    total_amount,
                    message: wire.counter_offer_message,
                    offered_at,
                    offered_by,
                    buyer_accepted: wire.buyer_accepted_counter,
                })
            }
            _ => None,
        };

        Self {
            id: wire.id,
            offer_id: wire.offer_id,
            offer_title: wire.offer_title,
            offer_image: wire.offer_image,
            offer_category: wire.offer_category,
            offer_transport_service_type: wire.offer_transport_service_type,
            is_request: wire.is_request,
            buyer_id: wire.buyer_id,
            buyer_name: wire.buyer_name,
            buyer_phone: wire.buyer_phone,
            seller_id: wire.seller_id,
            seller_name: wire.seller_name,
            seller_phone: wire.seller_phone,
            quantity: wire.quantity,
            unit: wire.unit,
            price_per_unit: wire.price_per_unit,
            total_amount: wire.total_amount,
            counter_offer,
            delivery_address: wire.delivery_address,
            delivery_date: wire.delivery_date,
            delivery_comment: wire.delivery_comment,
            status: wire.status,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
        }
    }
}

impl From<Order> for OrderWire {
    fn from(order: Order) -> Self {
        let (
            counter_price_per_unit,
            counter_total_amount,
            counter_offer_message,
            counter_offered_at,
            counter_offered_by,
            buyer_accepted_counter,
        ) = match order.counter_offer {
            Some(counter) => (
                Some(counter.price_per_unit),
                Some(counter.total_amount),
                counter.message,
                Some(counter.offered_at),
                Some(counter.offered_by),
                counter.buyer_accepted,
            ),
            None => (None, None, None, None, None, None),
        };

        Self {
            id: order.id,
            offer_id: order.offer_id,
            offer_title: order.offer_title,
            offer_image: order.offer_image,
            offer_category: order.offer_category,
            offer_transport_service_type: order.offer_transport_service_type,
            is_request: order.is_request,
            buyer_id: order.buyer_id,
            buyer_name: order.buyer_name,
            buyer_phone: order.buyer_phone,
            seller_id: order.seller_id,
            seller_name: order.seller_name,
            seller_phone: order.seller_phone,
            quantity: order.quantity,
            unit: order.unit,
            price_per_unit: order.price_per_unit,
            total_amount: order.total_amount,
            counter_price_per_unit,
            counter_total_amount,
            counter_offer_message,
            counter_offered_at,
            counter_offered_by,
            buyer_accepted_counter,
            delivery_address: order.delivery_address,
            delivery_date: order.delivery_date,
            delivery_comment: order.delivery_comment,
            status: order.status,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}
