//! Static channel registry — the closed set of publishing platforms and the
//! fixed promotional constraints each one carries.
//!
//! The registry is deliberately not runtime-extensible: channel-specific
//! branches in the rule resolver and composers rely on exhaustive matching
//! over this enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::settings::PostLength;

/// A target publishing platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Channel {
    Reddit,
    Quora,
    #[serde(rename = "Dev.to")]
    DevTo,
    Hashnode,
    LinkedIn,
    Medium,
}

/// Fixed publishing constraints for one channel.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelPolicy {
    pub name: &'static str,
    pub allow_thumbnail: bool,
    pub allow_affiliate: bool,
    pub allow_blog_link: bool,
    pub suggested_length: PostLength,
    pub style_rules: &'static str,
}

const REDDIT: ChannelPolicy = ChannelPolicy {
    name: "Reddit",
    allow_thumbnail: false,
    allow_affiliate: false,
    allow_blog_link: false,
    suggested_length: PostLength::Short,
    style_rules:
        "Value-first, community-friendly, no marketing, no heavy CTA. Encourage discussion.",
};

const QUORA: ChannelPolicy = ChannelPolicy {
    name: "Quora",
    allow_thumbnail: false,
    allow_affiliate: false,
    allow_blog_link: false,
    suggested_length: PostLength::Standard,
    style_rules: "Q&A format with a suggested question, authoritative and practical steps.",
};

const DEV_TO: ChannelPolicy = ChannelPolicy {
    name: "Dev.to",
    allow_thumbnail: true,
    allow_affiliate: true,
    allow_blog_link: true,
    suggested_length: PostLength::Standard,
    style_rules:
        "Technical editorial, helpful, structured headings, adapted-from footer with blog link.",
};

const HASHNODE: ChannelPolicy = ChannelPolicy {
    name: "Hashnode",
    allow_thumbnail: true,
    allow_affiliate: true,
    allow_blog_link: true,
    suggested_length: PostLength::Standard,
    style_rules:
        "Similar to Dev.to, short structured sections, adapted-from footer with blog link.",
};

const LINKEDIN: ChannelPolicy = ChannelPolicy {
    name: "LinkedIn",
    allow_thumbnail: true,
    allow_affiliate: false,
    allow_blog_link: true,
    suggested_length: PostLength::Long,
    style_rules: "Hook + skimmable structure + credibility. Must generate first comment.",
};

const MEDIUM: ChannelPolicy = ChannelPolicy {
    name: "Medium",
    allow_thumbnail: true,
    allow_affiliate: true,
    allow_blog_link: true,
    suggested_length: PostLength::Long,
    style_rules: "Editorial tone, no marketing, blog link discreet at end.",
};

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::Reddit,
        Channel::Quora,
        Channel::DevTo,
        Channel::Hashnode,
        Channel::LinkedIn,
        Channel::Medium,
    ];

    /// Static publishing policy for this channel.
    pub fn policy(self) -> &'static ChannelPolicy {
        match self {
            Channel::Reddit => &REDDIT,
            Channel::Quora => &QUORA,
            Channel::DevTo => &DEV_TO,
            Channel::Hashnode => &HASHNODE,
            Channel::LinkedIn => &LINKEDIN,
            Channel::Medium => &MEDIUM,
        }
    }

    /// Registry display name ("Dev.to", "LinkedIn", ...).
    pub fn name(self) -> &'static str {
        self.policy().name
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| AppError::UnknownChannel(s.to_string()))
    }
}
