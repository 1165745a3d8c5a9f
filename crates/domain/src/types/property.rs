//! Event property table
//!
//! Each property has an internal (snake_case) field name and the name the
//! Enforcement API expects on the wire. The mapping is spelled out per
//! property instead of being derived from the field name, so names made of
//! three or more words cannot collide.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named property of an [`Event`](super::Event)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventProperty {
    DeviceId,
    DeviceVersion,
    EventTime,
    AlertTime,
    DstDomain,
    DstUrl,
    ProtocolVersion,
    ProviderName,
    DstIp,
    EventSeverity,
    EventType,
    EventDescription,
    EventHash,
    FileName,
    FileHash,
    ExternalUrl,
    Src,
    DisableSafeguards,
}

/// How a property's value is normalized before it goes on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Passed through as-is
    Text,
    /// Text or an integer, emitted as given
    Scalar,
    /// Parsed and rendered as an ISO-8601 UTC timestamp
    Timestamp,
    /// Checked against hostname syntax
    Domain,
    /// Always replaced by a fixed protocol constant
    Constant,
    /// Emitted only when explicitly `true`
    Flag,
}

impl EventProperty {
    /// Properties the API rejects an event without
    pub const REQUIRED: &'static [Self] = &[
        Self::DeviceId,
        Self::DeviceVersion,
        Self::EventTime,
        Self::AlertTime,
        Self::DstDomain,
        Self::DstUrl,
        Self::ProtocolVersion,
        Self::ProviderName,
    ];

    /// Properties that may be left unset
    pub const OPTIONAL: &'static [Self] = &[
        Self::DstIp,
        Self::EventSeverity,
        Self::EventType,
        Self::EventDescription,
        Self::EventHash,
        Self::FileName,
        Self::FileHash,
        Self::ExternalUrl,
        Self::Src,
        Self::DisableSafeguards,
    ];

    /// Internal field name, as used on [`Event`](super::Event)
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::DeviceId => "device_id",
            Self::DeviceVersion => "device_version",
            Self::EventTime => "event_time",
            Self::AlertTime => "alert_time",
            Self::DstDomain => "dst_domain",
            Self::DstUrl => "dst_url",
            Self::ProtocolVersion => "protocol_version",
            Self::ProviderName => "provider_name",
            Self::DstIp => "dst_ip",
            Self::EventSeverity => "event_severity",
            Self::EventType => "event_type",
            Self::EventDescription => "event_description",
            Self::EventHash => "event_hash",
            Self::FileName => "file_name",
            Self::FileHash => "file_hash",
            Self::ExternalUrl => "external_url",
            Self::Src => "src",
            Self::DisableSafeguards => "disable_safeguards",
        }
    }

    /// Field name in the API's event schema
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::DeviceId => "deviceId",
            Self::DeviceVersion => "deviceVersion",
            Self::EventTime => "eventTime",
            Self::AlertTime => "alertTime",
            Self::DstDomain => "dstDomain",
            Self::DstUrl => "dstUrl",
            Self::ProtocolVersion => "protocolVersion",
            Self::ProviderName => "providerName",
            Self::DstIp => "dstIp",
            Self::EventSeverity => "eventSeverity",
            Self::EventType => "eventType",
            Self::EventDescription => "eventDescription",
            Self::EventHash => "eventHash",
            Self::FileName => "fileName",
            Self::FileHash => "fileHash",
            Self::ExternalUrl => "externalUrl",
            Self::Src => "src",
            Self::DisableSafeguards => "disableDstSafeguards",
        }
    }

    pub const fn kind(self) -> PropertyKind {
        match self {
            Self::EventTime | Self::AlertTime => PropertyKind::Timestamp,
            Self::DstDomain => PropertyKind::Domain,
            Self::ProtocolVersion | Self::ProviderName => PropertyKind::Constant,
            Self::DisableSafeguards => PropertyKind::Flag,
            Self::DeviceId | Self::EventSeverity => PropertyKind::Scalar,
            _ => PropertyKind::Text,
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// All properties, required first, in wire order
    pub fn all() -> impl Iterator<Item = Self> {
        Self::REQUIRED.iter().chain(Self::OPTIONAL).copied()
    }

    /// Look a property up by its internal field name
    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::all().find(|p| p.field_name() == name)
    }
}

impl fmt::Display for EventProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}
