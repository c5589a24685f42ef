//! Bundle composer — one multi-locale instruction block per channel, used in
//! "separate accounts" distribution mode.
//!
//! Every populated locale contributes a parallel INPUT block and OUTPUT
//! placeholder block; the OUTPUT shape matches the per-locale composer's
//! output contract section for section.

use std::collections::HashMap;

use crate::distribution::channels::{Channel, ChannelPolicy};
use crate::distribution::composer::ANTI_SPAM_RULE;
use crate::distribution::link_rules::resolve_link_rules;
use crate::distribution::voice::VoiceKit;
use crate::models::content::{AffiliateLinks, Locale, LocaleContent};
use crate::models::settings::GlobalSettings;

const THUMBNAIL_GUIDELINES: &str =
    "If thumbnails are allowed, generate a Midjourney prompt: minimal, editorial, \
     modern tech/career aesthetic, abstract shapes or simple symbolic icons, \
     high readability, clean composition, no clutter, 16:9, \
     optional 3-6 words max (language matches locale). \
     LinkedIn: insight card. Others: blog cover.";

/// Composes the multi-locale bundle for one channel. Returns an empty string
/// when no locale has content.
pub fn compose_bundle(
    global: &GlobalSettings,
    locale_contents: &HashMap<Locale, LocaleContent>,
    affiliate_links: &AffiliateLinks,
    channel: Channel,
    policy: &ChannelPolicy,
    voice_kit: &VoiceKit,
) -> String {
    let mut input_blocks: Vec<String> = Vec::new();
    let mut output_blocks: Vec<String> = Vec::new();

    for locale in Locale::ALL {
        let Some(content) = locale_contents.get(&locale) else {
            continue;
        };
        if content.is_blank() {
            continue;
        }

        // Link rules are channel-level, but the link values differ per locale.
        let rules = resolve_link_rules(global, channel, policy);
        let blog_link = if rules.allow_blog_link {
            global.blog_link_for(locale)
        } else {
            String::new()
        };
        let affiliate_link = if rules.allow_affiliate_link {
            affiliate_links.for_locale(locale).to_string()
        } else {
            String::new()
        };

        let voice_text = voice_kit.voice_for(locale, channel);
        input_blocks.push(format!(
            "=== INPUT LOCALE: {tag} ===\n\
             Writer profile (do not repeat verbatim, use as voice reference): {voice_text}\n\
             Title: {title}\n\
             Description: {description}\n\
             Content: {body}\n\
             Blog link for this locale: {blog}\n\
             Affiliate link for this locale: {affiliate}",
            tag = locale.tag(),
            title = content.title,
            description = content.description,
            body = content.content,
            blog = if blog_link.is_empty() { "N/A" } else { blog_link.as_str() },
            affiliate = if affiliate_link.is_empty() { "N/A" } else { affiliate_link.as_str() },
        ));

        output_blocks.push(format!(
            "=== LOCALE: {tag} ===\n\
             POST_TEXT:\n\
             <final post text>\n\
             THUMBNAIL_PROMPT (MIDJOURNEY):\n\
             <N/A or prompt>\n\
             FIRST_COMMENT (LinkedIn only):\n\
             <N/A or comment>\n\
             HASHTAGS (if relevant):\n\
             <LinkedIn 3-8 hashtags, otherwise N/A>\n\
             COMMENTS_TEMPLATES (if enabled):\n\
             <5 short comments or N/A>",
            tag = locale.tag(),
        ));
    }

    if input_blocks.is_empty() {
        return String::new();
    }

    let mut link_guidance = format!("Link policy: {}.", global.link_policy);
    if channel == Channel::LinkedIn {
        link_guidance.push_str(&format!(
            " LinkedIn CTA policy: {}.",
            global.linkedin_cta_policy
        ));
    }

    format!(
        "You are an expert community writer. Generate channel-native content.\n\
         Channel: {channel}\n\
         You must produce one output per locale: EN, PT, ES, IT.\n\
         Tone: {tone}\n\
         Persona: {persona}\n\
         Length: {length}\n\
         Main CTA: {cta}\n\
         {link_guidance}\n\
         Affiliate disclosure: {disclosure}\n\
         {ANTI_SPAM_RULE}\n\
         Channel style rules: {style_rules}\n\
         LinkedIn first comment enabled: {first_comment}.\n\
         If LinkedIn first comment is disabled, return N/A for FIRST_COMMENT.\n\
         If thumbnails are not allowed for this channel, return N/A in THUMBNAIL_PROMPT.\n\
         If channel is not LinkedIn, FIRST_COMMENT must be N/A.\n\
         {THUMBNAIL_GUIDELINES}\n\
         \n\
         Inputs:\n\
         {inputs}\n\
         \n\
         Return exactly this structure and nothing else:\n\
         CHANNEL: {channel}\n\
         {outputs}",
        tone = global.tone,
        persona = global.persona,
        length = global.length,
        cta = global.main_call_to_action,
        disclosure = global.affiliate_disclosure,
        style_rules = policy.style_rules,
        first_comment = global.linkedin_generate_comment,
        inputs = input_blocks.join("\n\n"),
        outputs = output_blocks.join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::{LinkPolicy, LinkedInCtaPolicy};

    fn settings() -> GlobalSettings {
        GlobalSettings {
            blog_url: "https://x.com".to_string(),
            post_slug_en: "intro".to_string(),
            link_policy: LinkPolicy::BlogOnly,
            ..Default::default()
        }
    }

    fn content(title: &str, body: &str) -> LocaleContent {
        LocaleContent {
            title: title.to_string(),
            content: body.to_string(),
            ..Default::default()
        }
    }

    fn en_pt_contents() -> HashMap<Locale, LocaleContent> {
        HashMap::from([
            (Locale::En, content("Intro", "hello")),
            (Locale::Pt, content("Introdução", "olá")),
        ])
    }

    #[test]
    fn test_bundle_has_parallel_input_and_output_blocks_in_locale_order() {
        let bundle = compose_bundle(
            &settings(),
            &en_pt_contents(),
            &AffiliateLinks::default(),
            Channel::Medium,
            Channel::Medium.policy(),
            &VoiceKit::default(),
        );
        let en_input = bundle.find("=== INPUT LOCALE: EN ===").expect("EN input");
        let pt_input = bundle.find("=== INPUT LOCALE: PT ===").expect("PT input");
        let en_output = bundle.find("=== LOCALE: EN ===").expect("EN output");
        let pt_output = bundle.find("=== LOCALE: PT ===").expect("PT output");
        assert!(en_input < pt_input);
        assert!(pt_input < en_output, "inputs precede outputs");
        assert!(en_output < pt_output);
        assert!(bundle.contains("Return exactly this structure and nothing else:"));
        assert!(bundle.contains("CHANNEL: Medium"));
    }

    #[test]
    fn test_blank_locale_is_skipped_entirely() {
        let mut contents = en_pt_contents();
        contents.insert(Locale::Es, content("Hola", "   "));
        let bundle = compose_bundle(
            &settings(),
            &contents,
            &AffiliateLinks::default(),
            Channel::Medium,
            Channel::Medium.policy(),
            &VoiceKit::default(),
        );
        assert!(!bundle.contains("=== INPUT LOCALE: ES ==="));
        assert!(!bundle.contains("=== LOCALE: ES ==="));
    }

    #[test]
    fn test_empty_contents_yield_empty_bundle() {
        let bundle = compose_bundle(
            &settings(),
            &HashMap::new(),
            &AffiliateLinks::default(),
            Channel::Medium,
            Channel::Medium.policy(),
            &VoiceKit::default(),
        );
        assert!(bundle.is_empty());
    }

    #[test]
    fn test_per_locale_blog_links_and_na_fallbacks() {
        let global = GlobalSettings {
            post_slug_pt: "introducao".to_string(),
            ..settings()
        };
        let bundle = compose_bundle(
            &global,
            &en_pt_contents(),
            &AffiliateLinks::default(),
            Channel::Medium,
            Channel::Medium.policy(),
            &VoiceKit::default(),
        );
        assert!(bundle.contains("Blog link for this locale: https://x.com/en/posts/intro"));
        assert!(bundle.contains("Blog link for this locale: https://x.com/pt/posts/introducao"));
        // Blog-only policy: affiliate links stay out.
        assert!(bundle.contains("Affiliate link for this locale: N/A"));
    }

    #[test]
    fn test_linkedin_bundle_carries_cta_policy_line() {
        let global = GlobalSettings {
            linkedin_cta_policy: LinkedInCtaPolicy::EndOfPostLink,
            ..settings()
        };
        let bundle = compose_bundle(
            &global,
            &en_pt_contents(),
            &AffiliateLinks::default(),
            Channel::LinkedIn,
            Channel::LinkedIn.policy(),
            &VoiceKit::default(),
        );
        assert!(bundle.contains("Link policy: Blog link only. LinkedIn CTA policy: Link at end of post."));

        let bundle = compose_bundle(
            &global,
            &en_pt_contents(),
            &AffiliateLinks::default(),
            Channel::Medium,
            Channel::Medium.policy(),
            &VoiceKit::default(),
        );
        assert!(bundle.contains("Link policy: Blog link only.\n"));
        assert!(!bundle.contains("LinkedIn CTA policy:"));
    }
}
