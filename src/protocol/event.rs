//! System event types.
//!
//! System events are packets with `request_type = "S"`. They are unsolicited
//! and never matched against a pending request.
//!
//! | Action | Meaning |
//! |--------|---------|
//! | `P` | Device plugged in (`["P", path]`) or out (`["U", path]`) |
//! | `C` | Server is shutting down |

// ============================================================================
// Imports
// ============================================================================

use super::{ActionCode, DataField, Packet};

// ============================================================================
// SystemEvent
// ============================================================================

/// An unsolicited notification from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemEvent {
    /// Event action code.
    pub action: ActionCode,
    /// Event payload as strings.
    pub data: Vec<String>,
}

impl SystemEvent {
    /// Builds an event from a system packet.
    #[must_use]
    pub fn from_packet(packet: Packet) -> Self {
        Self {
            action: packet.action_code,
            data: packet
                .data_field
                .map(DataField::into_strings)
                .unwrap_or_default(),
        }
    }

    /// Parses the event into a typed variant.
    #[must_use]
    pub fn parse(&self) -> ParsedSystemEvent {
        match self.action {
            ActionCode::DevicePlugIn => {
                let plugged_in = match self.data.first().map(String::as_str) {
                    Some("P") => Some(true),
                    Some("U") => Some(false),
                    _ => None,
                };
                match (plugged_in, self.data.get(1)) {
                    (Some(plugged_in), Some(path)) => ParsedSystemEvent::DevicePlugIn {
                        plugged_in,
                        path: path.clone(),
                    },
                    _ => ParsedSystemEvent::Other(self.clone()),
                }
            }
            ActionCode::ServerClose => ParsedSystemEvent::ServerClose,
            _ => ParsedSystemEvent::Other(self.clone()),
        }
    }
}

// ============================================================================
// ParsedSystemEvent
// ============================================================================

/// Typed view of a [`SystemEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedSystemEvent {
    /// A device was plugged in or removed.
    DevicePlugIn {
        /// `true` on plug-in, `false` on removal.
        plugged_in: bool,
        /// Device path.
        path: String,
    },
    /// The server is closing.
    ServerClose,
    /// Any other event, unparsed.
    Other(SystemEvent),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn event(action: ActionCode, data: &[&str]) -> SystemEvent {
        SystemEvent {
            action,
            data: data.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_plug_in() {
        let parsed = event(ActionCode::DevicePlugIn, &["P", "hid#vid_134b"]).parse();
        assert_eq!(
            parsed,
            ParsedSystemEvent::DevicePlugIn {
                plugged_in: true,
                path: "hid#vid_134b".into()
            }
        );
    }

    #[test]
    fn test_plug_out() {
        let parsed = event(ActionCode::DevicePlugIn, &["U", "hid#vid_134b"]).parse();
        assert!(matches!(
            parsed,
            ParsedSystemEvent::DevicePlugIn {
                plugged_in: false,
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_plug_event_is_other() {
        let parsed = event(ActionCode::DevicePlugIn, &["P"]).parse();
        assert!(matches!(parsed, ParsedSystemEvent::Other(_)));
    }

    #[test]
    fn test_from_packet() {
        let json = r#"{"request_type":"S","action_code":"C","data_field":"bye"}"#;
        let packet = Packet::from_json(json).expect("parse");
        let event = SystemEvent::from_packet(packet);
        assert_eq!(event.data, ["bye"]);
        assert_eq!(event.parse(), ParsedSystemEvent::ServerClose);
    }
}
