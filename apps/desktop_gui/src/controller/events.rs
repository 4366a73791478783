//! Events flowing back from the backend worker to the UI.

use shared::domain::Address;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    AddressForwarded { address: Address },
    ForwardFailed { reason: String },
}

/// Status line text for an event.
pub fn describe(event: &UiEvent) -> String {
    match event {
        UiEvent::AddressForwarded { address } => {
            format!("Server acknowledged {}, {}", address.street, address.city)
        }
        UiEvent::ForwardFailed { reason } => classify_forward_failure(reason),
    }
}

fn classify_forward_failure(reason: &str) -> String {
    let lower = reason.to_ascii_lowercase();
    if lower.contains("backend worker startup failure") {
        "Backend worker failed to start; submissions stay local.".to_string()
    } else if lower.contains("error sending request")
        || lower.contains("connection refused")
        || lower.contains("dns")
        || lower.contains("timed out")
    {
        "Intake server unreachable; address kept locally.".to_string()
    } else {
        format!("Intake error: {reason}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_server_gets_friendly_status() {
        let status = describe(&UiEvent::ForwardFailed {
            reason: "intake request failed: error sending request for url".to_string(),
        });
        assert_eq!(status, "Intake server unreachable; address kept locally.");
    }

    #[test]
    fn rejection_keeps_reason() {
        let status = describe(&UiEvent::ForwardFailed {
            reason: "intake endpoint rejected address with status 500".to_string(),
        });
        assert_eq!(
            status,
            "Intake error: intake endpoint rejected address with status 500"
        );
    }

    #[test]
    fn forwarded_names_the_address() {
        let status = describe(&UiEvent::AddressForwarded {
            address: Address::new("1 Main St", "Springfield", "IL", "62701"),
        });
        assert_eq!(status, "Server acknowledged 1 Main St, Springfield");
    }
}
