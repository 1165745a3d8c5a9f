//! Security event model
//!
//! An [`Event`] is a mutable value object: callers create an empty event,
//! assign fields, and convert it to its wire form once per submission.
//! Completeness is only enforced at conversion time.

use serde_json::{Map, Value};

use super::property::EventProperty;
use super::scalar::Scalar;
use super::timestamp::Timestamp;
use super::wire::WireEvent;
use crate::constants;
use crate::errors::{EnforcementError, Result};
use crate::utils::domain_name::DomainCheck;

/// A single security detection record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    pub device_id: Option<Scalar>,
    pub device_version: Option<String>,
    pub event_time: Option<Timestamp>,
    pub alert_time: Option<Timestamp>,
    pub dst_domain: Option<String>,
    pub dst_url: Option<String>,
    pub dst_ip: Option<String>,
    pub event_severity: Option<Scalar>,
    pub event_type: Option<String>,
    pub event_description: Option<String>,
    pub event_hash: Option<String>,
    pub file_name: Option<String>,
    pub file_hash: Option<String>,
    pub external_url: Option<String>,
    pub src: Option<String>,
    pub disable_safeguards: Option<bool>,
}

/// Borrowed view of one property's current value
#[derive(Debug, Clone, Copy)]
enum FieldValue<'a> {
    Text(Option<&'a str>),
    Scalar(Option<&'a Scalar>),
    Domain(Option<&'a str>),
    Time(Option<&'a Timestamp>),
    Constant(&'static str),
    Flag(Option<bool>),
}

impl FieldValue<'_> {
    fn is_present(self) -> bool {
        match self {
            Self::Text(value) | Self::Domain(value) => {
                value.is_some_and(|text| !text.trim().is_empty())
            }
            Self::Scalar(value) => value.is_some_and(|scalar| !scalar.is_blank()),
            Self::Time(value) => value.is_some_and(|time| !time.is_blank()),
            Self::Constant(_) => true,
            Self::Flag(value) => value.is_some(),
        }
    }

    fn to_wire(self, domain_check: DomainCheck) -> Option<Value> {
        match self {
            Self::Text(value) => value.filter(|text| !text.trim().is_empty()).map(Value::from),
            Self::Domain(value) => {
                value.and_then(|domain| domain_check.apply(domain)).map(Value::from)
            }
            Self::Scalar(value) => value.and_then(Scalar::to_wire),
            Self::Time(value) => value.and_then(Timestamp::to_wire).map(Value::from),
            Self::Constant(value) => Some(Value::from(value)),
            Self::Flag(value) => (value == Some(true)).then_some(Value::Bool(true)),
        }
    }
}

macro_rules! text_setters {
    ($($setter:ident => $field:ident),+ $(,)?) => {
        $(
            #[must_use]
            pub fn $setter(mut self, value: impl Into<String>) -> Self {
                self.$field = Some(value.into());
                self
            }
        )+
    };
}

impl Event {
    /// Protocol version sent with every event
    pub const PROTOCOL_VERSION: &'static str = constants::PROTOCOL_VERSION;
    /// Provider name sent with every event
    pub const PROVIDER_NAME: &'static str = constants::PROVIDER_NAME;

    /// Create an empty event.
    pub fn new() -> Self {
        Self::default()
    }

    text_setters! {
        with_device_version => device_version,
        with_dst_domain => dst_domain,
        with_dst_url => dst_url,
        with_dst_ip => dst_ip,
        with_event_type => event_type,
        with_event_description => event_description,
        with_event_hash => event_hash,
        with_file_name => file_name,
        with_file_hash => file_hash,
        with_external_url => external_url,
        with_src => src,
    }

    /// Device identifier, as text or a number.
    #[must_use]
    pub fn with_device_id(mut self, value: impl Into<Scalar>) -> Self {
        self.device_id = Some(value.into());
        self
    }

    /// Severity, as a label or a numeric level.
    #[must_use]
    pub fn with_event_severity(mut self, value: impl Into<Scalar>) -> Self {
        self.event_severity = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_event_time(mut self, value: impl Into<Timestamp>) -> Self {
        self.event_time = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_alert_time(mut self, value: impl Into<Timestamp>) -> Self {
        self.alert_time = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_disable_safeguards(mut self, value: bool) -> Self {
        self.disable_safeguards = Some(value);
        self
    }

    /// Properties an event must carry to be accepted by the API
    pub fn required_properties() -> &'static [EventProperty] {
        EventProperty::REQUIRED
    }

    pub fn optional_properties() -> &'static [EventProperty] {
        EventProperty::OPTIONAL
    }

    /// `true` when every required property holds a non-blank value.
    pub fn is_valid(&self) -> bool {
        Self::required_properties().iter().all(|&property| self.value_of(property).is_present())
    }

    /// Required properties that are currently unset or blank.
    pub fn get_missing_properties(&self) -> Vec<EventProperty> {
        Self::required_properties()
            .iter()
            .copied()
            .filter(|&property| !self.value_of(property).is_present())
            .collect()
    }

    /// Convert to the API schema, dropping destination domains that are not
    /// valid hostnames.
    ///
    /// # Errors
    /// Returns `EnforcementError::IncompleteEvent` listing the missing
    /// required properties.
    pub fn to_wire_form(&self) -> Result<WireEvent> {
        self.to_wire_form_with(DomainCheck::Strict)
    }

    /// Convert to the API schema using an explicit domain check policy.
    ///
    /// Timestamps that cannot be parsed and domains rejected by
    /// `domain_check` are omitted rather than reported.
    ///
    /// # Errors
    /// Returns `EnforcementError::IncompleteEvent` listing the missing
    /// required properties.
    pub fn to_wire_form_with(&self, domain_check: DomainCheck) -> Result<WireEvent> {
        let missing = self.get_missing_properties();
        if !missing.is_empty() {
            return Err(EnforcementError::IncompleteEvent { missing });
        }

        let mut fields = Map::new();
        for property in EventProperty::all() {
            if let Some(value) = self.value_of(property).to_wire(domain_check) {
                fields.insert(property.wire_name().to_string(), value);
            }
        }

        Ok(WireEvent::from_fields(fields))
    }

    fn value_of(&self, property: EventProperty) -> FieldValue<'_> {
        use EventProperty as P;

        match property {
            P::DeviceId => FieldValue::Scalar(self.device_id.as_ref()),
            P::DeviceVersion => FieldValue::Text(self.device_version.as_deref()),
            P::EventTime => FieldValue::Time(self.event_time.as_ref()),
            P::AlertTime => FieldValue::Time(self.alert_time.as_ref()),
            P::DstDomain => FieldValue::Domain(self.dst_domain.as_deref()),
            P::DstUrl => FieldValue::Text(self.dst_url.as_deref()),
            P::ProtocolVersion => FieldValue::Constant(Self::PROTOCOL_VERSION),
            P::ProviderName => FieldValue::Constant(Self::PROVIDER_NAME),
            P::DstIp => FieldValue::Text(self.dst_ip.as_deref()),
            P::EventSeverity => FieldValue::Scalar(self.event_severity.as_ref()),
            P::EventType => FieldValue::Text(self.event_type.as_deref()),
            P::EventDescription => FieldValue::Text(self.event_description.as_deref()),
            P::EventHash => FieldValue::Text(self.event_hash.as_deref()),
            P::FileName => FieldValue::Text(self.file_name.as_deref()),
            P::FileHash => FieldValue::Text(self.file_hash.as_deref()),
            P::ExternalUrl => FieldValue::Text(self.external_url.as_deref()),
            P::Src => FieldValue::Text(self.src.as_deref()),
            P::DisableSafeguards => FieldValue::Flag(self.disable_safeguards),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_event() -> Event {
        Event::new()
            .with_device_id("ba6a59f4-e692-4724-ba36-c28132c761de")
            .with_device_version("13.7a")
            .with_event_time("2013-02-08T09:30:26Z")
            .with_alert_time("2013-02-08T09:31:00Z")
            .with_dst_domain("internetbadguys.com")
            .with_dst_url("http://internetbadguys.com/a-bad-url")
    }

    #[test]
    fn empty_event_is_missing_every_caller_supplied_property() {
        let event = Event::new();

        assert!(!event.is_valid());
        assert_eq!(
            event.get_missing_properties(),
            vec![
                EventProperty::DeviceId,
                EventProperty::DeviceVersion,
                EventProperty::EventTime,
                EventProperty::AlertTime,
                EventProperty::DstDomain,
                EventProperty::DstUrl,
            ]
        );
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let mut event = complete_event();
        event.dst_url = Some("   ".into());
        event.event_time = Some(Timestamp::from("\t"));

        assert_eq!(
            event.get_missing_properties(),
            vec![EventProperty::EventTime, EventProperty::DstUrl]
        );
    }

    #[test]
    fn completeness_is_rechecked_after_mutation() {
        let mut event = complete_event();
        assert!(event.is_valid());

        event.device_id = None;
        assert!(!event.is_valid());
        assert!(matches!(
            event.to_wire_form(),
            Err(EnforcementError::IncompleteEvent { missing }) if missing == vec![EventProperty::DeviceId]
        ));
    }

    #[test]
    fn wire_form_uses_api_field_names() {
        let wire = complete_event().with_file_name("dropper.exe").to_wire_form().unwrap();

        assert_eq!(wire.get_str("deviceId"), Some("ba6a59f4-e692-4724-ba36-c28132c761de"));
        assert_eq!(wire.get_str("deviceVersion"), Some("13.7a"));
        assert_eq!(wire.get_str("eventTime"), Some("2013-02-08T09:30:26.000000Z"));
        assert_eq!(wire.get_str("alertTime"), Some("2013-02-08T09:31:00.000000Z"));
        assert_eq!(wire.get_str("dstDomain"), Some("internetbadguys.com"));
        assert_eq!(wire.get_str("dstUrl"), Some("http://internetbadguys.com/a-bad-url"));
        assert_eq!(wire.get_str("fileName"), Some("dropper.exe"));
        assert!(!wire.contains("file_name"));
    }

    #[test]
    fn constants_are_always_emitted() {
        let wire = complete_event().to_wire_form().unwrap();

        assert_eq!(wire.get_str("protocolVersion"), Some("1.0a"));
        assert_eq!(wire.get_str("providerName"), Some("Security Platform"));
    }

    #[test]
    fn unset_optional_fields_are_omitted() {
        let wire = complete_event().with_src("   ").to_wire_form().unwrap();

        assert_eq!(wire.len(), 8);
        for property in EventProperty::OPTIONAL {
            assert!(!wire.contains(property.wire_name()), "{property} should be omitted");
        }
        assert!(!wire.to_json().unwrap().contains("null"));
    }

    #[test]
    fn safeguards_flag_only_emitted_when_true() {
        let enabled = complete_event().with_disable_safeguards(true).to_wire_form().unwrap();
        assert_eq!(enabled.get("disableDstSafeguards"), Some(&Value::Bool(true)));

        let disabled = complete_event().with_disable_safeguards(false).to_wire_form().unwrap();
        assert!(!disabled.contains("disableDstSafeguards"));

        let unset = complete_event().to_wire_form().unwrap();
        assert!(!unset.contains("disableDstSafeguards"));
    }

    #[test]
    fn unparseable_timestamps_are_dropped() {
        let wire = complete_event().with_alert_time("around lunch").to_wire_form().unwrap();

        assert!(!wire.contains("alertTime"));
        assert!(wire.contains("eventTime"));
    }

    #[test]
    fn invalid_domains_depend_on_the_check() {
        let event = complete_event().with_dst_domain("not a domain");

        let strict = event.to_wire_form().unwrap();
        assert!(!strict.contains("dstDomain"));

        let lenient = event.to_wire_form_with(DomainCheck::PassThrough).unwrap();
        assert_eq!(lenient.get_str("dstDomain"), Some("not a domain"));
    }

    #[test]
    fn numeric_identifiers_and_severity_are_emitted_as_numbers() {
        let wire = complete_event().with_device_id(4021).with_event_severity(3).to_wire_form().unwrap();

        assert_eq!(wire.get("deviceId"), Some(&Value::from(4021)));
        assert_eq!(wire.get("eventSeverity"), Some(&Value::from(3)));

        let mut blank = complete_event();
        blank.device_id = Some(Scalar::from(" "));
        assert_eq!(blank.get_missing_properties(), vec![EventProperty::DeviceId]);
    }

    #[test]
    fn fields_are_emitted_in_table_order() {
        let wire = complete_event().with_src("10.1.1.1").to_wire_form().unwrap();
        let keys: Vec<_> = wire.keys().collect();

        assert_eq!(
            keys,
            vec![
                "deviceId",
                "deviceVersion",
                "eventTime",
                "alertTime",
                "dstDomain",
                "dstUrl",
                "protocolVersion",
                "providerName",
                "src",
            ]
        );
    }
}
