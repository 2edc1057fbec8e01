//! Coffee packet format.
//!
//! Every WebSocket text frame carries exactly one JSON packet.
//!
//! # Format
//!
//! ```json
//! {
//!   "request_type": "T",
//!   "session_number": 7,
//!   "packet_owner": "D",
//!   "device_index": 3,
//!   "action_code": "s",
//!   "in_id": 0,
//!   "out_id": 0,
//!   "data_field_type": "H",
//!   "data_field": "ff00"
//! }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::identifiers::{DeviceIndex, SessionNumber};

// ============================================================================
// RequestType
// ============================================================================

/// Direction/kind of a packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestType {
    /// Client to server.
    #[serde(rename = "T")]
    #[default]
    Transmit,
    /// Server to client reply.
    #[serde(rename = "R")]
    Response,
    /// Unsolicited system event.
    #[serde(rename = "S")]
    System,
}

// ============================================================================
// PacketOwner
// ============================================================================

/// Whether a packet concerns the manager or a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PacketOwner {
    /// Manager-scoped packet.
    #[serde(rename = "M")]
    #[default]
    Manager,
    /// Device-scoped packet.
    #[serde(rename = "D")]
    Device,
}

// ============================================================================
// DataFieldType
// ============================================================================

/// Encoding of the `data_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DataFieldType {
    /// One hex-digit-pair string without separators.
    #[serde(rename = "H")]
    Hex,
    /// A string or an array of strings.
    #[serde(rename = "S")]
    #[default]
    String,
}

// ============================================================================
// ActionCode
// ============================================================================

/// Single-character action tag of a packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActionCode {
    /// No action.
    #[default]
    None,
    /// Echo the data field back.
    Echo,
    /// List connected devices.
    DeviceList,
    /// Show or hide the server control window.
    ControlShow,
    /// File operation (`data_field` is a command array).
    FileOperation,
    /// Device plug-in/plug-out notification.
    DevicePlugIn,
    /// Session naming and inter-session messaging.
    AdvanceOperation,
    /// Server shutdown notice.
    ServerClose,
    /// Kernel (server plug-in) operation.
    KernelOperation,
    /// Firmware update handled by the server.
    IndependentBootloader,
    /// Open a device.
    DeviceOpen,
    /// Close a device.
    DeviceClose,
    /// Write to a device.
    DeviceSend,
    /// Read from a device.
    DeviceReceive,
    /// Write then read.
    DeviceTransmit,
    /// Cancel a pending device read.
    DeviceCancel,
    /// Switch a device to its bootloader.
    DeviceBootloader,
    /// Unrecognized code.
    Unknown,
}

impl ActionCode {
    /// All codes with a wire representation.
    pub const ALL: [Self; 18] = [
        Self::None,
        Self::Echo,
        Self::DeviceList,
        Self::ControlShow,
        Self::FileOperation,
        Self::DevicePlugIn,
        Self::AdvanceOperation,
        Self::ServerClose,
        Self::KernelOperation,
        Self::IndependentBootloader,
        Self::DeviceOpen,
        Self::DeviceClose,
        Self::DeviceSend,
        Self::DeviceReceive,
        Self::DeviceTransmit,
        Self::DeviceCancel,
        Self::DeviceBootloader,
        Self::Unknown,
    ];

    /// Returns the wire character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::None => 'N',
            Self::Echo => 'E',
            Self::DeviceList => 'L',
            Self::ControlShow => 'H',
            Self::FileOperation => 'F',
            Self::DevicePlugIn => 'P',
            Self::AdvanceOperation => 'A',
            Self::ServerClose => 'C',
            Self::KernelOperation => 'K',
            Self::IndependentBootloader => 'B',
            Self::DeviceOpen => 'o',
            Self::DeviceClose => 'c',
            Self::DeviceSend => 's',
            Self::DeviceReceive => 'r',
            Self::DeviceTransmit => 't',
            Self::DeviceCancel => 'x',
            Self::DeviceBootloader => 'b',
            Self::Unknown => 'U',
        }
    }

    /// Parses a wire character; unrecognized characters map to [`ActionCode::Unknown`].
    #[must_use]
    pub fn from_char(c: char) -> Self {
        Self::ALL
            .into_iter()
            .find(|code| code.as_char() == c)
            .unwrap_or(Self::Unknown)
    }

    /// Returns `true` for the device-scoped codes.
    #[inline]
    #[must_use]
    pub const fn is_device_action(self) -> bool {
        matches!(
            self,
            Self::DeviceOpen
                | Self::DeviceClose
                | Self::DeviceSend
                | Self::DeviceReceive
                | Self::DeviceTransmit
                | Self::DeviceCancel
                | Self::DeviceBootloader
        )
    }
}

impl fmt::Display for ActionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for ActionCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut buf = [0u8; 4];
        serializer.serialize_str(self.as_char().encode_utf8(&mut buf))
    }
}

impl<'de> Deserialize<'de> for ActionCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ActionCodeVisitor;

        impl Visitor<'_> for ActionCodeVisitor {
            type Value = ActionCode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a single-character action code")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<ActionCode, E> {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(ActionCode::from_char(c)),
                    _ => Ok(ActionCode::Unknown),
                }
            }
        }

        deserializer.deserialize_str(ActionCodeVisitor)
    }
}

// ============================================================================
// DataField
// ============================================================================

/// Status conventionally carried by the first element of a string data field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataStatus {
    /// `"success"`.
    Success,
    /// `"error"`.
    Error,
    /// `"cancel"`.
    Cancel,
    /// Anything else, including hex payloads.
    Other,
}

impl DataStatus {
    fn parse(value: &str) -> Self {
        match value {
            "success" => Self::Success,
            "error" => Self::Error,
            "cancel" => Self::Cancel,
            _ => Self::Other,
        }
    }
}

/// Payload of a packet: a single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataField {
    /// Single string (also used for hex payloads).
    Text(String),
    /// Array of strings, first element usually a status or verb.
    List(Vec<String>),
}

impl DataField {
    /// Builds a list data field.
    #[must_use]
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Returns the first string, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::List(items) => items.first().map(String::as_str),
        }
    }

    /// Returns the number of string elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Text(_) => 1,
            Self::List(items) => items.len(),
        }
    }

    /// Returns `true` for an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::List(items) if items.is_empty())
    }

    /// Returns the status encoded in the first element.
    #[must_use]
    pub fn status(&self) -> DataStatus {
        self.first().map_or(DataStatus::Other, DataStatus::parse)
    }

    /// Returns the single string, or the first element of a list.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.first()
    }

    /// Returns the element at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&str> {
        match self {
            Self::Text(text) if position == 0 => Some(text.as_str()),
            Self::Text(_) => None,
            Self::List(items) => items.get(position).map(String::as_str),
        }
    }

    /// Converts into a list of strings.
    #[must_use]
    pub fn into_strings(self) -> Vec<String> {
        match self {
            Self::Text(text) => vec![text],
            Self::List(items) => items,
        }
    }
}

impl From<&str> for DataField {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DataField {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for DataField {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

// ============================================================================
// Packet
// ============================================================================

/// One coffee protocol message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    /// Direction/kind.
    pub request_type: RequestType,

    /// Session the packet belongs to.
    #[serde(default)]
    pub session_number: SessionNumber,

    /// Manager or device scope.
    #[serde(default)]
    pub packet_owner: PacketOwner,

    /// Channel id (0 for manager packets).
    #[serde(default)]
    pub device_index: DeviceIndex,

    /// Operation tag.
    pub action_code: ActionCode,

    /// Input report id.
    #[serde(default)]
    pub in_id: u8,

    /// Output report id.
    #[serde(default)]
    pub out_id: u8,

    /// Encoding of `data_field`.
    #[serde(default)]
    pub data_field_type: DataFieldType,

    /// Payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_field: Option<DataField>,
}

impl Packet {
    /// Creates a manager-scoped request.
    #[must_use]
    pub fn manager(session_number: SessionNumber, action_code: ActionCode) -> Self {
        Self {
            request_type: RequestType::Transmit,
            session_number,
            packet_owner: PacketOwner::Manager,
            device_index: DeviceIndex::MANAGER,
            action_code,
            in_id: 0,
            out_id: 0,
            data_field_type: DataFieldType::String,
            data_field: None,
        }
    }

    /// Creates a device-scoped request.
    #[must_use]
    pub fn device(
        session_number: SessionNumber,
        device_index: DeviceIndex,
        action_code: ActionCode,
    ) -> Self {
        Self {
            packet_owner: PacketOwner::Device,
            device_index,
            ..Self::manager(session_number, action_code)
        }
    }

    /// Sets the report ids.
    #[must_use]
    pub fn with_ids(mut self, in_id: u8, out_id: u8) -> Self {
        self.in_id = in_id;
        self.out_id = out_id;
        self
    }

    /// Sets a hex payload.
    #[must_use]
    pub fn with_hex(mut self, hex: impl Into<String>) -> Self {
        self.data_field_type = DataFieldType::Hex;
        self.data_field = Some(DataField::Text(hex.into()));
        self
    }

    /// Sets a string payload.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.data_field_type = DataFieldType::String;
        self.data_field = Some(DataField::Text(text.into()));
        self
    }

    /// Sets a string-array payload.
    #[must_use]
    pub fn with_strings<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data_field_type = DataFieldType::String;
        self.data_field = Some(DataField::list(items));
        self
    }

    /// Sets an arbitrary payload.
    #[must_use]
    pub fn with_data_field(mut self, data_field_type: DataFieldType, field: DataField) -> Self {
        self.data_field_type = data_field_type;
        self.data_field = Some(field);
        self
    }

    /// Returns `true` for unsolicited system events.
    #[inline]
    #[must_use]
    pub fn is_system_event(&self) -> bool {
        self.request_type == RequestType::System
    }

    /// Serializes to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the text is not a valid packet.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(Error::from)
    }
}

// ============================================================================
// Hex validation
// ============================================================================

/// Validates a hex-digit-pair payload.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `data` is not an even-length hex string.
pub fn validate_hex(data: &str) -> Result<()> {
    hex::decode(data)
        .map(|_| ())
        .map_err(|e| Error::invalid_argument(format!("invalid hex payload: {e}")))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_code_chars_unique() {
        for (i, a) in ActionCode::ALL.iter().enumerate() {
            for b in &ActionCode::ALL[i + 1..] {
                assert_ne!(a.as_char(), b.as_char());
            }
        }
    }

    #[test]
    fn test_action_code_from_unknown_char() {
        assert_eq!(ActionCode::from_char('z'), ActionCode::Unknown);
        assert_eq!(ActionCode::from_char('s'), ActionCode::DeviceSend);
    }

    #[test]
    fn test_device_packet_serialization() {
        let packet = Packet::device(
            SessionNumber::new(7),
            DeviceIndex::new(5),
            ActionCode::DeviceSend,
        )
        .with_ids(1, 2)
        .with_hex("ff00");

        let value: serde_json::Value =
            serde_json::from_str(&packet.to_json().expect("serialize")).expect("json");
        assert_eq!(value["request_type"], "T");
        assert_eq!(value["session_number"], 7);
        assert_eq!(value["packet_owner"], "D");
        assert_eq!(value["device_index"], 5);
        assert_eq!(value["action_code"], "s");
        assert_eq!(value["in_id"], 1);
        assert_eq!(value["out_id"], 2);
        assert_eq!(value["data_field_type"], "H");
        assert_eq!(value["data_field"], "ff00");
    }

    #[test]
    fn test_manager_packet_omits_empty_data_field() {
        let packet = Packet::manager(SessionNumber::new(1), ActionCode::DeviceList);
        let json = packet.to_json().expect("serialize");
        assert!(!json.contains("data_field\""));
        assert!(json.contains("\"packet_owner\":\"M\""));
    }

    #[test]
    fn test_parse_reply_with_list() {
        let json = r#"{
            "request_type": "R",
            "session_number": 7,
            "packet_owner": "M",
            "device_index": 0,
            "action_code": "K",
            "in_id": 0,
            "out_id": 0,
            "data_field_type": "S",
            "data_field": ["success", "a", "b"]
        }"#;
        let packet = Packet::from_json(json).expect("parse");
        assert_eq!(packet.request_type, RequestType::Response);
        assert_eq!(packet.action_code, ActionCode::KernelOperation);
        let field = packet.data_field.expect("data field");
        assert_eq!(field.status(), DataStatus::Success);
        assert_eq!(field.len(), 3);
        assert_eq!(field.get(2), Some("b"));
    }

    #[test]
    fn test_parse_minimal_reply_uses_defaults() {
        let json = r#"{"request_type":"R","action_code":"s","data_field":"success"}"#;
        let packet = Packet::from_json(json).expect("parse");
        assert_eq!(packet.device_index, DeviceIndex::MANAGER);
        assert_eq!(packet.data_field_type, DataFieldType::String);
        assert_eq!(packet.data_field, Some(DataField::from("success")));
    }

    #[test]
    fn test_unknown_action_string() {
        let json = r#"{"request_type":"R","action_code":"??"}"#;
        let packet = Packet::from_json(json).expect("parse");
        assert_eq!(packet.action_code, ActionCode::Unknown);
    }

    #[test]
    fn test_data_status() {
        assert_eq!(DataField::from("cancel").status(), DataStatus::Cancel);
        assert_eq!(DataField::list(["error", "x"]).status(), DataStatus::Error);
        assert_eq!(DataField::from("a1b2").status(), DataStatus::Other);
        assert_eq!(DataField::List(Vec::new()).status(), DataStatus::Other);
        assert!(DataField::List(Vec::new()).is_empty());
    }

    #[test]
    fn test_validate_hex() {
        assert!(validate_hex("a1b2").is_ok());
        assert!(validate_hex("").is_ok());
        assert!(validate_hex("abc").is_err());
        assert!(validate_hex("zz").is_err());
    }
}
