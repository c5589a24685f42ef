//! Link & affiliate rule resolver.
//!
//! Decides, per (channel, global settings) pair, whether the composed prompt
//! may embed a blog link and/or an affiliate link. The steps below override
//! each other in order, so their sequence must not be rearranged.

use crate::distribution::channels::{Channel, ChannelPolicy};
use crate::models::settings::{GlobalSettings, LinkPolicy, LinkedInCtaPolicy};

/// Resolved link permissions for one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkRules {
    pub allow_blog_link: bool,
    pub allow_affiliate_link: bool,
}

/// Resolves link permissions for a channel under the global link policy.
pub fn resolve_link_rules(
    global: &GlobalSettings,
    channel: Channel,
    policy: &ChannelPolicy,
) -> LinkRules {
    let community = matches!(channel, Channel::Reddit | Channel::Quora);

    // 1. Baseline: the channel must allow blog links and the operator must
    //    not have switched links off globally.
    let mut allow_blog_link = policy.allow_blog_link && global.link_policy != LinkPolicy::None;

    // 2. Reddit/Quora ban blog links at the policy level, but the operator's
    //    link policy may still permit one.
    if community && global.link_policy != LinkPolicy::None {
        allow_blog_link = true;
    }

    // 3. Affiliate links need both the channel's consent and the widest
    //    link policy.
    let mut allow_affiliate_link =
        policy.allow_affiliate && global.link_policy == LinkPolicy::BlogPlusOptionalAffiliate;

    // 4. On Reddit/Quora, affiliate links stay off unless explicitly overridden.
    if community && !global.allow_affiliate_override {
        allow_affiliate_link = false;
    }

    // 5. A LinkedIn CTA policy of "none" kills the blog link there.
    if channel == Channel::LinkedIn && global.linkedin_cta_policy == LinkedInCtaPolicy::None {
        allow_blog_link = false;
    }

    LinkRules {
        allow_blog_link,
        allow_affiliate_link,
    }
}
