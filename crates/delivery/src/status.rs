use core::str::FromStr;

use serde::{Deserialize, Serialize};

use parcelflow_core::DomainError;

/// Delivery status lifecycle.
///
/// Every status has at most one legal predecessor, so the lifecycle is a strict
/// chain: `DRAFT -> WAITING_FOR_COURIER -> IN_TRANSIT -> DELIVERED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Draft,
    WaitingForCourier,
    InTransit,
    Delivered,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 4] = [
        DeliveryStatus::Draft,
        DeliveryStatus::WaitingForCourier,
        DeliveryStatus::InTransit,
        DeliveryStatus::Delivered,
    ];

    /// The only status this one may be entered from. `None` for the initial status.
    pub const fn previous(self) -> Option<DeliveryStatus> {
        match self {
            DeliveryStatus::Draft => None,
            DeliveryStatus::WaitingForCourier => Some(DeliveryStatus::Draft),
            DeliveryStatus::InTransit => Some(DeliveryStatus::WaitingForCourier),
            DeliveryStatus::Delivered => Some(DeliveryStatus::InTransit),
        }
    }

    pub fn can_change_to(self, target: DeliveryStatus) -> bool {
        target.previous() == Some(self)
    }

    pub fn can_not_change_to(self, target: DeliveryStatus) -> bool {
        !self.can_change_to(target)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, DeliveryStatus::Delivered)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryStatus::Draft => "DRAFT",
            DeliveryStatus::WaitingForCourier => "WAITING_FOR_COURIER",
            DeliveryStatus::InTransit => "IN_TRANSIT",
            DeliveryStatus::Delivered => "DELIVERED",
        }
    }
}

impl core::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeliveryStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown delivery status: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use DeliveryStatus::*;

    #[test]
    fn only_forward_single_steps_are_allowed() {
        let allowed = [
            (Draft, WaitingForCourier),
            (WaitingForCourier, InTransit),
            (InTransit, Delivered),
        ];

        for from in DeliveryStatus::ALL {
            for to in DeliveryStatus::ALL {
                let expected = allowed.contains(&(from, to));
                assert_eq!(
                    from.can_change_to(to),
                    expected,
                    "{from} -> {to} should be {}",
                    if expected { "allowed" } else { "rejected" }
                );
                assert_eq!(from.can_not_change_to(to), !expected);
            }
        }
    }

    #[test]
    fn draft_cannot_skip_to_in_transit() {
        assert!(Draft.can_not_change_to(InTransit));
        assert!(Draft.can_not_change_to(Delivered));
    }

    #[test]
    fn nothing_leads_back_to_draft() {
        assert_eq!(Draft.previous(), None);
        assert!(DeliveryStatus::ALL.iter().all(|s| s.can_not_change_to(Draft)));
    }

    #[test]
    fn delivered_is_terminal() {
        assert!(Delivered.is_terminal());
        assert!(DeliveryStatus::ALL.iter().all(|s| Delivered.can_not_change_to(*s)));
    }

    #[test]
    fn display_parse_and_serde_share_names() {
        for status in DeliveryStatus::ALL {
            let parsed: DeliveryStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);

            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
        assert!("SHIPPED".parse::<DeliveryStatus>().is_err());
    }
}
