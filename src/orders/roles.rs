use super::domain::Order;
use serde::Serialize;

/// Localized display labels for the two parties to a deal. The nominative
/// forms head the contact cards; the genitive forms appear mid-sentence
/// ("ожидает ответа покупателя").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleLabels {
    pub buyer: &'static str,
    pub seller: &'static str,
    pub buyer_genitive: &'static str,
    pub seller_genitive: &'static str,
}

/// Fixed vocabulary of role pairs, keyed off the order's marketplace flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RolePair {
    RequestDeal,
    PassengerTransport,
    FreightTransport,
    Rental,
    Delivery,
    TransportService,
    Trade,
}

impl RolePair {
    /// Classify an order. First match wins: the request flag beats the
    /// category, and within transport the service type is matched by
    /// case-insensitive substring.
    pub fn resolve(is_request: bool, category: Option<&str>, service_type: Option<&str>) -> Self {
        if is_request {
            return Self::RequestDeal;
        }

        let is_transport = category
            .map(|value| value.trim().eq_ignore_ascii_case("transport"))
            .unwrap_or(false);
        if !is_transport {
            return Self::Trade;
        }

        let service = service_type.map(str::to_lowercase).unwrap_or_default();
        if service.contains("пассажир") {
            Self::PassengerTransport
        } else if service.contains("груз") {
            Self::FreightTransport
        } else if service.contains("аренд") {
            Self::Rental
        } else if service.contains("доставк") {
            Self::Delivery
        } else {
            Self::TransportService
        }
    }

    pub const fn labels(self) -> RoleLabels {
        match self {
            Self::RequestDeal => RoleLabels {
                buyer: "Заказчик",
                seller: "Исполнитель",
                buyer_genitive: "заказчика",
                seller_genitive: "исполнителя",
            },
            Self::PassengerTransport => RoleLabels {
                buyer: "Пассажир",
                seller: "Перевозчик",
                buyer_genitive: "пассажира",
                seller_genitive: "перевозчика",
            },
            Self::FreightTransport => RoleLabels {
                buyer: "Грузоотправитель",
                seller: "Перевозчик",
                buyer_genitive: "грузоотправителя",
                seller_genitive: "перевозчика",
            },
            Self::Rental => RoleLabels {
                buyer: "Арендатор",
                seller: "Арендодатель",
                buyer_genitive: "арендатора",
                seller_genitive: "арендодателя",
            },
            Self::Delivery => RoleLabels {
                buyer: "Отправитель",
                seller: "Курьер",
                buyer_genitive: "отправителя",
                seller_genitive: "курьера",
            },
            Self::TransportService => RoleLabels {
                buyer: "Клиент",
                seller: "Исполнитель",
                buyer_genitive: "клиента",
                seller_genitive: "исполнителя",
            },
            Self::Trade => RoleLabels {
                buyer: "Покупатель",
                seller: "Продавец",
                buyer_genitive: "покупателя",
                seller_genitive: "продавца",
            },
        }
    }
}

impl Order {
    pub fn role_pair(&self) -> RolePair {
        RolePair::resolve(
            self.is_request,
            self.offer_category.as_deref(),
            self.offer_transport_service_type.as_deref(),
        )
    }

    pub fn role_labels(&self) -> RoleLabels {
        self.role_pair().labels()
    }
}
