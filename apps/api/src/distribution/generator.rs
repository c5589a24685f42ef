//! Generation orchestrator — iterates channels × locales × variants and
//! assembles the final channel→text map plus the flat result list.
//!
//! Iteration order (channels in caller order, then `Locale::ALL`, then
//! variants) defines output ordering; callers depend on it being stable.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distribution::bundle::compose_bundle;
use crate::distribution::channels::Channel;
use crate::distribution::composer::compose_prompt;
use crate::distribution::link_rules::resolve_link_rules;
use crate::distribution::voice::VoiceKit;
use crate::models::content::{AffiliateLinks, Locale, LocaleContent};
use crate::models::settings::{DistributionMode, GlobalSettings};

/// One of up to two alternative prompts for the same (channel, locale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    A,
    B,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::A => "A",
            Variant::B => "B",
        })
    }
}

/// One finalized prompt, addressable by (channel, locale, variant) for
/// selective re-display and copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptResult {
    pub channel: Channel,
    pub locale: Locale,
    pub variant: Variant,
    pub prompt_text: String,
}

/// Everything one generation run produces.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationOutput {
    pub bundles: BTreeMap<Channel, String>,
    pub results: Vec<PromptResult>,
}

impl GenerationOutput {
    /// True when no locale had content for any selected channel — the
    /// "nothing to generate" condition the caller surfaces to the user.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Runs one full generation pass. Pure: no I/O, no shared state, and
/// byte-identical output for identical input.
pub fn generate(
    global: &GlobalSettings,
    locale_contents: &HashMap<Locale, LocaleContent>,
    affiliate_links: &AffiliateLinks,
    channels: &[Channel],
    voice_kit: &VoiceKit,
) -> GenerationOutput {
    let mut output = GenerationOutput::default();

    for &channel in channels {
        let policy = channel.policy();

        if global.distribution_mode == DistributionMode::Separate {
            let bundle_text = compose_bundle(
                global,
                locale_contents,
                affiliate_links,
                channel,
                policy,
                voice_kit,
            );
            if bundle_text.is_empty() {
                debug!("No content for {channel}; skipping bundle");
                continue;
            }
            // The flat rows exist so callers know which locales the bundle
            // covers; they all share the bundle text.
            for locale in Locale::ALL {
                if populated(locale_contents, locale) {
                    output.results.push(PromptResult {
                        channel,
                        locale,
                        variant: Variant::A,
                        prompt_text: bundle_text.clone(),
                    });
                }
            }
            output.bundles.insert(channel, bundle_text);
            continue;
        }

        let variants: &[Variant] = if global.generate_variants {
            &[Variant::A, Variant::B]
        } else {
            &[Variant::A]
        };

        let mut channel_texts: Vec<String> = Vec::new();
        for locale in Locale::ALL {
            let Some(content) = locale_contents.get(&locale) else {
                continue;
            };
            if content.is_blank() {
                continue;
            }

            let rules = resolve_link_rules(global, channel, policy);
            let blog_link = if rules.allow_blog_link {
                global.blog_link_for(locale)
            } else {
                String::new()
            };
            let affiliate_link = if rules.allow_affiliate_link {
                affiliate_links.for_locale(locale)
            } else {
                ""
            };

            for &variant in variants {
                let prompt_text = compose_prompt(
                    global,
                    locale,
                    content,
                    channel,
                    policy,
                    &blog_link,
                    affiliate_link,
                    variant,
                    voice_kit.voice_for(locale, channel),
                );
                channel_texts.push(prompt_text.clone());
                output.results.push(PromptResult {
                    channel,
                    locale,
                    variant,
                    prompt_text,
                });
            }
        }

        // All of a channel's prompts joined into one copy-ready block, even
        // when variants double them up. Known quirk, kept for compatibility.
        if !channel_texts.is_empty() {
            output.bundles.insert(channel, channel_texts.join("\n\n"));
        }
    }

    output
}

fn populated(locale_contents: &HashMap<Locale, LocaleContent>, locale: Locale) -> bool {
    locale_contents
        .get(&locale)
        .map(|content| !content.is_blank())
        .unwrap_or(false)
}
