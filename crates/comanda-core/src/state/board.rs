use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::health::ServiceStatus;
use crate::registry::ServiceKind;

/// Connectivity shown on a card before and after the first probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Connectivity {
    Checking,
    Online,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCard {
    pub kind: ServiceKind,
    pub connectivity: Connectivity,
    pub headline: String,
    pub detail: String,
    pub last_checked: Option<DateTime<Utc>>,
}

impl ServiceCard {
    fn new(kind: ServiceKind) -> Self {
        Self {
            kind,
            connectivity: Connectivity::Checking,
            headline: "Checking...".to_string(),
            detail: String::new(),
            last_checked: None,
        }
    }
}

/// Per-service status cards, one for each collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct StatusBoard {
    cards: Vec<ServiceCard>,
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self {
            cards: ServiceKind::ALL.into_iter().map(ServiceCard::new).collect(),
        }
    }
}

impl StatusBoard {
    pub fn cards(&self) -> &[ServiceCard] {
        &self.cards
    }

    pub fn card(&self, kind: ServiceKind) -> Option<&ServiceCard> {
        self.cards.iter().find(|c| c.kind == kind)
    }

    fn card_mut(&mut self, kind: ServiceKind) -> Option<&mut ServiceCard> {
        self.cards.iter_mut().find(|c| c.kind == kind)
    }

    /// Overwrite a card with a fresh health result.
    pub fn apply_status(&mut self, status: &ServiceStatus) {
        let Some(card) = self.card_mut(status.kind) else {
            return;
        };
        card.last_checked = Some(status.checked_at);

        if status.online {
            card.connectivity = Connectivity::Online;
            if let Some(detail) = status.online_detail() {
                card.headline = "Online".to_string();
                card.detail = detail;
            }
        } else {
            card.connectivity = Connectivity::Offline;
            card.headline = "Offline".to_string();
            card.detail = "Service unavailable".to_string();
        }
    }

    /// Loader summary text; connectivity is left untouched.
    pub fn set_summary(
        &mut self,
        kind: ServiceKind,
        headline: impl Into<String>,
        detail: impl Into<String>,
    ) {
        if let Some(card) = self.card_mut(kind) {
            card.headline = headline.into();
            card.detail = detail.into();
        }
    }

    pub fn online_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| c.connectivity == Connectivity::Online)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HealthPayload;

    #[test]
    fn test_offline_status_overwrites_card() {
        let mut board = StatusBoard::default();
        board.set_summary(ServiceKind::Staff, "3 employees registered", "");
        board.apply_status(&ServiceStatus::offline(
            ServiceKind::Staff,
            "connection refused".to_string(),
            Utc::now(),
        ));

        let card = board.card(ServiceKind::Staff).unwrap();
        assert_eq!(card.connectivity, Connectivity::Offline);
        assert_eq!(card.headline, "Offline");
        assert_eq!(card.detail, "Service unavailable");
    }

    #[test]
    fn test_payload_without_status_keeps_summary() {
        let mut board = StatusBoard::default();
        board.set_summary(ServiceKind::Inventory, "2 items in stock", "1 items available");
        board.apply_status(&ServiceStatus::online(
            ServiceKind::Inventory,
            HealthPayload::default(),
            Utc::now(),
        ));

        let card = board.card(ServiceKind::Inventory).unwrap();
        assert_eq!(card.connectivity, Connectivity::Online);
        assert_eq!(card.headline, "2 items in stock");
        assert_eq!(board.online_count(), 1);
    }

    #[test]
    fn test_board_starts_checking() {
        let board = StatusBoard::default();
        assert_eq!(board.cards().len(), 5);
        assert!(
            board
                .cards()
                .iter()
                .all(|c| c.connectivity == Connectivity::Checking)
        );
    }
}
