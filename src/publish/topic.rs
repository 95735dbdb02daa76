//! Attribute topic naming.
//!
//! Every attribute owns a pair of topics under a configurable root:
//!
//! `<root>/<device>/<endpoint>/<cluster>/Attributes/<attribute>/Desired`
//! `<root>/<device>/<endpoint>/<cluster>/Attributes/<attribute>/Reported`

use std::fmt;

use crate::constants::{TOPIC_ATTRIBUTES_SEGMENT, TOPIC_DESIRED_SUFFIX, TOPIC_REPORTED_SUFFIX};
use crate::data_model::BridgedEndpoint;

/// Which half of an attribute's topic pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicKind {
    /// Requested state, published by the bridge.
    Desired,
    /// Actual state, published by the device side.
    Reported,
}

impl TopicKind {
    fn parse(segment: &str) -> Option<Self> {
        match segment {
            TOPIC_DESIRED_SUFFIX => Some(TopicKind::Desired),
            TOPIC_REPORTED_SUFFIX => Some(TopicKind::Reported),
            _ => None,
        }
    }
}

impl fmt::Display for TopicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TopicKind::Desired => TOPIC_DESIRED_SUFFIX,
            TopicKind::Reported => TOPIC_REPORTED_SUFFIX,
        })
    }
}

/// A fully addressed attribute topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeTopic {
    pub device: String,
    pub endpoint: String,
    pub cluster: String,
    pub attribute: String,
    pub kind: TopicKind,
}

impl AttributeTopic {
    pub fn desired(endpoint: &BridgedEndpoint, cluster: &str, attribute: &str) -> Self {
        Self::addressed(endpoint, cluster, attribute, TopicKind::Desired)
    }

    pub fn reported(endpoint: &BridgedEndpoint, cluster: &str, attribute: &str) -> Self {
        Self::addressed(endpoint, cluster, attribute, TopicKind::Reported)
    }

    fn addressed(
        endpoint: &BridgedEndpoint,
        cluster: &str,
        attribute: &str,
        kind: TopicKind,
    ) -> Self {
        Self {
            device: endpoint.device.clone(),
            endpoint: endpoint.endpoint.clone(),
            cluster: cluster.to_owned(),
            attribute: attribute.to_owned(),
            kind,
        }
    }

    pub fn format(&self, root: &str) -> String {
        format!(
            "{root}/{}/{}/{}/{TOPIC_ATTRIBUTES_SEGMENT}/{}/{}",
            self.device, self.endpoint, self.cluster, self.attribute, self.kind
        )
    }

    /// Splits a topic under `root` into its address. `None` for anything
    /// that is not an attribute topic; such traffic is routing noise, not
    /// an error.
    pub fn parse(root: &str, topic: &str) -> Option<Self> {
        let rest = topic.strip_prefix(root)?.strip_prefix('/')?;
        let segments: Vec<&str> = rest.split('/').collect();
        let [device, endpoint, cluster, marker, attribute, kind] = segments[..] else {
            return None;
        };
        if marker != TOPIC_ATTRIBUTES_SEGMENT {
            return None;
        }
        if [device, endpoint, cluster, attribute].iter().any(|s| s.is_empty()) {
            return None;
        }
        Some(Self {
            device: device.to_owned(),
            endpoint: endpoint.to_owned(),
            cluster: cluster.to_owned(),
            attribute: attribute.to_owned(),
            kind: TopicKind::parse(kind)?,
        })
    }
}
