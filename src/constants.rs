//! All the constants used by the bridge.
//! Topic segments are fixed by the external naming convention; the root
//! is configurable per deployment.

/// Default first segment(s) of every attribute topic.
pub const DEFAULT_TOPIC_ROOT: &str = "bridge/by-node";

/// Fixed segment between the cluster name and the attribute name.
pub const TOPIC_ATTRIBUTES_SEGMENT: &str = "Attributes";

/// Final topic segment for a desired-value publication.
pub const TOPIC_DESIRED_SUFFIX: &str = "Desired";

/// Final topic segment for a reported-value publication.
pub const TOPIC_REPORTED_SUFFIX: &str = "Reported";

/// Default capacity of the attribute-update notification channel.
pub const DEFAULT_UPDATE_QUEUE_DEPTH: usize = 64;
