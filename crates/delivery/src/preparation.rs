use chrono::Duration;

use parcelflow_core::{DomainError, DomainResult, Money};

use crate::contact_point::ContactPoint;

/// Everything needed to prepare a draft delivery for placement.
///
/// Applying details is a pure overwrite, so a missing sender or recipient here
/// clears the one already on the delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparationDetails {
    pub sender: Option<ContactPoint>,
    pub recipient: Option<ContactPoint>,
    pub distance_fee: Money,
    pub courier_payout: Money,
    /// Added to the current time to compute the expected delivery instant.
    pub expected_delivery_time: Duration,
}

impl PreparationDetails {
    pub fn builder() -> PreparationDetailsBuilder {
        PreparationDetailsBuilder::default()
    }
}

/// Step-by-step construction of [`PreparationDetails`].
///
/// Fees default to zero and contact points to absent; the expected delivery
/// time is required.
#[derive(Debug, Clone, Default)]
pub struct PreparationDetailsBuilder {
    sender: Option<ContactPoint>,
    recipient: Option<ContactPoint>,
    distance_fee: Money,
    courier_payout: Money,
    expected_delivery_time: Option<Duration>,
}

impl PreparationDetailsBuilder {
    pub fn sender(mut self, sender: ContactPoint) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn recipient(mut self, recipient: ContactPoint) -> Self {
        self.recipient = Some(recipient);
        self
    }

    pub fn distance_fee(mut self, fee: Money) -> Self {
        self.distance_fee = fee;
        self
    }

    pub fn courier_payout(mut self, payout: Money) -> Self {
        self.courier_payout = payout;
        self
    }

    pub fn expected_delivery_time(mut self, duration: Duration) -> Self {
        self.expected_delivery_time = Some(duration);
        self
    }

    pub fn build(self) -> DomainResult<PreparationDetails> {
        let expected_delivery_time = self
            .expected_delivery_time
            .ok_or_else(|| DomainError::validation("expected delivery time is required"))?;

        Ok(PreparationDetails {
            sender: self.sender,
            recipient: self.recipient,
            distance_fee: self.distance_fee,
            courier_payout: self.courier_payout,
            expected_delivery_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(name: &str) -> ContactPoint {
        ContactPoint::new("00000-000", "Main St", "1", "", name, "555-0000")
    }

    #[test]
    fn builder_defaults_fees_to_zero() {
        let details = PreparationDetails::builder()
            .sender(point("Alice"))
            .recipient(point("Bob"))
            .expected_delivery_time(Duration::hours(2))
            .build()
            .unwrap();

        assert_eq!(details.sender, Some(point("Alice")));
        assert_eq!(details.recipient, Some(point("Bob")));
        assert_eq!(details.distance_fee, Money::ZERO);
        assert_eq!(details.courier_payout, Money::ZERO);
        assert_eq!(details.expected_delivery_time, Duration::hours(2));
    }

    #[test]
    fn builder_requires_expected_delivery_time() {
        let err = PreparationDetails::builder()
            .sender(point("Alice"))
            .recipient(point("Bob"))
            .build()
            .unwrap_err();
        assert_eq!(err, DomainError::validation("expected delivery time is required"));
    }
}
