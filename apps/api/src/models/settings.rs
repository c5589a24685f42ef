//! Global distribution settings — the operator-chosen knobs shared by every
//! channel and locale in one generation run.
//!
//! All enums here are closed sets: unknown wire values fail deserialization,
//! which is the upstream validation boundary the engine relies on. The
//! `Display` labels are the operator-facing option strings and are embedded
//! verbatim inside composed prompts, so they must not drift.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::content::Locale;

/// Global link policy for one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkPolicy {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "blog-only")]
    BlogOnly,
    #[serde(rename = "blog-plus-optional-affiliate")]
    BlogPlusOptionalAffiliate,
}

impl fmt::Display for LinkPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LinkPolicy::None => "No links",
            LinkPolicy::BlogOnly => "Blog link only",
            LinkPolicy::BlogPlusOptionalAffiliate => {
                "Blog link + optional affiliate link (non-Reddit/Quora only)"
            }
        })
    }
}

/// What the generated posts should ultimately drive toward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MainCta {
    #[default]
    #[serde(rename = "reputation-only")]
    ReputationOnly,
    #[serde(rename = "soft-traffic")]
    SoftTraffic,
}

impl fmt::Display for MainCta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MainCta::ReputationOnly => "Reputation only (no selling)",
            MainCta::SoftTraffic => "Soft traffic to blog",
        })
    }
}

/// Requested post length. Channels may suggest a different one, which the
/// composer surfaces as a hint rather than an override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostLength {
    Short,
    #[default]
    Standard,
    Long,
}

impl fmt::Display for PostLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PostLength::Short => "short",
            PostLength::Standard => "standard",
            PostLength::Long => "long",
        })
    }
}

/// "separate": one social account per locale — every populated locale is
/// bundled into a single multi-locale prompt per channel.
/// "single": one account covering all locales — one prompt per locale (and
/// per variant) per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionMode {
    Separate,
    #[default]
    Single,
}

/// Where (if anywhere) the LinkedIn post may carry the blog link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkedInCtaPolicy {
    #[serde(rename = "none")]
    None,
    #[default]
    #[serde(rename = "comment-link")]
    CommentLink,
    #[serde(rename = "end-of-post-link")]
    EndOfPostLink,
}

impl fmt::Display for LinkedInCtaPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LinkedInCtaPolicy::None => "No links",
            LinkedInCtaPolicy::CommentLink => "Link in comments",
            LinkedInCtaPolicy::EndOfPostLink => "Link at end of post",
        })
    }
}

/// All operator-chosen settings for one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    pub translation_key: String,
    pub author: String,
    pub affiliate_disclosure: bool,
    pub blog_url: String,
    pub post_slug_en: String,
    pub post_slug_pt: String,
    pub post_slug_es: String,
    pub post_slug_it: String,
    pub main_call_to_action: MainCta,
    pub link_policy: LinkPolicy,
    pub tone: String,
    pub persona: String,
    pub length: PostLength,
    pub generate_variants: bool,
    pub include_comment_templates: bool,
    /// Applies only to Reddit/Quora, where affiliate links are otherwise banned.
    pub allow_affiliate_override: bool,
    pub distribution_mode: DistributionMode,
    pub linkedin_generate_comment: bool,
    pub linkedin_cta_policy: LinkedInCtaPolicy,
}

impl GlobalSettings {
    /// Slug for a locale, falling back to the English slug when the
    /// locale-specific one is empty.
    pub fn slug_for(&self, locale: Locale) -> &str {
        let slug = match locale {
            Locale::En => &self.post_slug_en,
            Locale::Pt => &self.post_slug_pt,
            Locale::Es => &self.post_slug_es,
            Locale::It => &self.post_slug_it,
        };
        if slug.is_empty() {
            &self.post_slug_en
        } else {
            slug
        }
    }

    /// Canonical blog post URL for a locale: `{blog_url}/{locale}/posts/{slug}`.
    pub fn blog_link_for(&self, locale: Locale) -> String {
        format!(
            "{}/{}/posts/{}",
            self.blog_url.trim_end_matches('/'),
            locale.code(),
            self.slug_for(locale)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_policy_wire_values() {
        assert_eq!(
            serde_json::from_str::<LinkPolicy>("\"blog-plus-optional-affiliate\"").unwrap(),
            LinkPolicy::BlogPlusOptionalAffiliate
        );
        assert_eq!(
            serde_json::to_string(&LinkPolicy::BlogOnly).unwrap(),
            "\"blog-only\""
        );
    }

    #[test]
    fn test_unknown_link_policy_rejected() {
        let result: Result<LinkPolicy, _> = serde_json::from_str("\"all-the-links\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_linkedin_cta_policy_wire_values() {
        assert_eq!(
            serde_json::from_str::<LinkedInCtaPolicy>("\"end-of-post-link\"").unwrap(),
            LinkedInCtaPolicy::EndOfPostLink
        );
        let result: Result<LinkedInCtaPolicy, _> = serde_json::from_str("\"banner\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_labels_match_operator_options() {
        assert_eq!(LinkPolicy::None.to_string(), "No links");
        assert_eq!(
            LinkPolicy::BlogPlusOptionalAffiliate.to_string(),
            "Blog link + optional affiliate link (non-Reddit/Quora only)"
        );
        assert_eq!(MainCta::ReputationOnly.to_string(), "Reputation only (no selling)");
        assert_eq!(LinkedInCtaPolicy::CommentLink.to_string(), "Link in comments");
    }

    #[test]
    fn test_slug_falls_back_to_english() {
        let settings = GlobalSettings {
            post_slug_en: "intro".to_string(),
            post_slug_pt: "introducao".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.slug_for(Locale::Pt), "introducao");
        assert_eq!(settings.slug_for(Locale::Es), "intro");
    }

    #[test]
    fn test_blog_link_strips_trailing_slash() {
        let settings = GlobalSettings {
            blog_url: "https://x.com/".to_string(),
            post_slug_en: "intro".to_string(),
            ..Default::default()
        };
        assert_eq!(
            settings.blog_link_for(Locale::En),
            "https://x.com/en/posts/intro"
        );
    }
}
