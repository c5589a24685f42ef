//! Prompt text composer — builds the instruction document for one
//! (channel, locale, variant) combination.
//!
//! The document ends with a fixed output contract: the exact section
//! headings the downstream generator must return. The bundle composer emits
//! the same per-locale contract shape, so the two must change together.

use crate::distribution::channels::{Channel, ChannelPolicy};
use crate::distribution::generator::Variant;
use crate::models::content::{Locale, LocaleContent};
use crate::models::settings::{GlobalSettings, LinkPolicy};

/// Fixed anti-spam directive shared by both composers.
pub const ANTI_SPAM_RULE: &str = "Anti-spam: reputation first, avoid sales language.";

/// Image style guidance the thumbnail prompts are built from.
const THUMBNAIL_BASE: &str = "minimal, editorial, modern tech/career aesthetic, \
    abstract shapes or simple symbolic icons, high readability, clean composition, \
    no clutter, 16:9, no brand logos, optional 3-6 words max, language matches locale";

/// Generated thumbnail-image prompt: LinkedIn gets an insight card, every
/// other channel a blog cover.
pub fn thumbnail_prompt(theme_hint: &str, channel: Channel) -> String {
    let style = if channel == Channel::LinkedIn {
        "insight card"
    } else {
        "blog cover"
    };
    format!("{THUMBNAIL_BASE}, style: {style}, theme: {theme_hint}")
}

/// Composes the full instruction text for one (channel, locale, variant).
///
/// `variant` only tags the surrounding result row; both variants share the
/// same instruction text and differ downstream, at the generator.
#[allow(clippy::too_many_arguments)]
pub fn compose_prompt(
    global: &GlobalSettings,
    locale: Locale,
    content: &LocaleContent,
    channel: Channel,
    policy: &ChannelPolicy,
    blog_link: &str,
    affiliate_link: &str,
    _variant: Variant,
    voice_text: &str,
) -> String {
    let length_hint = if policy.suggested_length == global.length {
        global.length.to_string()
    } else {
        format!("{} (channel suggests {})", global.length, policy.suggested_length)
    };

    let comment_rule = if global.include_comment_templates {
        "Include 5 short comment templates in COMMENTS_TEMPLATES."
    } else {
        "Write N/A in COMMENTS_TEMPLATES."
    };

    let mut link_instruction = if blog_link.is_empty() {
        if global.link_policy == LinkPolicy::None {
            "No links.".to_string()
        } else {
            "Links allowed if relevant.".to_string()
        }
    } else {
        format!("Blog link (discreet): {blog_link}")
    };
    if channel == Channel::LinkedIn && !blog_link.is_empty() {
        link_instruction.push_str(&format!(
            " - {}.",
            global.linkedin_cta_policy.to_string().to_lowercase()
        ));
    }

    let affiliate_instruction = if affiliate_link.is_empty() {
        "No affiliate links.".to_string()
    } else {
        format!("Affiliate link (use only if contextually helpful): {affiliate_link}")
    };

    let thumb_rule = if policy.allow_thumbnail {
        let hint = [&content.title, &content.description]
            .into_iter()
            .find(|text| !text.is_empty())
            .map(String::as_str)
            .unwrap_or("tech career");
        format!("THUMBNAIL_PROMPT (MIDJOURNEY):\n{}", thumbnail_prompt(hint, channel))
    } else {
        "THUMBNAIL_PROMPT (MIDJOURNEY): N/A".to_string()
    };

    let mut channel_style = policy.style_rules.to_string();
    if channel == Channel::Medium {
        channel_style.push_str(" Add a note: editorial caution, no overt marketing.");
    }

    let first_comment_rule = if channel == Channel::LinkedIn && global.linkedin_generate_comment {
        "Generate a first comment that adds value, includes a question, \
         and optionally a link per policy."
    } else {
        "N/A"
    };

    let output_rules = format!(
        "Return exactly this structure and nothing else:\n\
         CHANNEL: {channel}\n\
         === LOCALE: {} ===\n\
         POST_TEXT:\n\
         <final post text>\n\n\
         {thumb_rule}\n\n\
         FIRST_COMMENT (LinkedIn only):\n\
         <comment or N/A>\n\n\
         HASHTAGS (if relevant):\n\
         <LinkedIn 3-8 hashtags, otherwise N/A>\n\n\
         COMMENTS_TEMPLATES (if enabled):\n\
         <5 short comments or N/A>",
        locale.tag()
    );

    format!(
        "You are a channel-native content editor. Produce a final post ready to publish.\n\
         Channel: {channel}\n\
         Locale: {locale}\n\
         Writer profile (do not repeat verbatim, use as voice reference): {voice_text}\n\
         Tone: {tone}\n\
         Persona: {persona}\n\
         Length: {length_hint}\n\
         Main CTA: {cta}\n\
         Link policy: {link_policy}. {link_instruction}\n\
         Affiliate disclosure: {disclosure}\n\
         Affiliate rule: {affiliate_instruction}\n\
         {ANTI_SPAM_RULE}\n\
         Channel style: {channel_style}\n\
         LinkedIn first comment: {first_comment_rule}\n\
         Title: {title}\n\
         Description: {description}\n\
         Content source:\n\
         {body}\n\n\
         {comment_rule}\n\n\
         {output_rules}",
        tone = global.tone,
        persona = global.persona,
        cta = global.main_call_to_action,
        link_policy = global.link_policy,
        disclosure = global.affiliate_disclosure,
        title = content.title,
        description = content.description,
        body = content.content,
    )
}
