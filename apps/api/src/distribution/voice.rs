//! Writer-voice lookup — resolves a short biographical snippet per
//! (locale, channel) from the externally managed profile kit.
//!
//! Lookups never fail: a missing locale, channel or bio degrades to an empty
//! string so generation can proceed without voice material.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::distribution::channels::Channel;
use crate::models::content::Locale;

/// The profile kit stores LinkedIn material under its company-page name.
/// This alias is a historical naming split between the profile editor and
/// the channel registry; keep it rather than migrating the store format.
const LINKEDIN_STORE_KEY: &str = "LinkedIn Company Page";

/// One (locale, channel) profile entry. The engine reads only the three bio
/// lengths; the remaining fields belong to the profile editor's file format
/// and ride along untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceEntry {
    pub short_bio: String,
    pub medium_bio: String,
    pub long_bio: String,
    pub one_liner_tagline: String,
    pub pinned_post_template: String,
    pub link_policy_notes: String,
    pub dos_and_donts: String,
}

/// Locale → channel-key → profile entry, mirroring the profile kit's JSON
/// file shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoiceKit {
    pub profiles: HashMap<Locale, HashMap<String, VoiceEntry>>,
}

impl VoiceKit {
    /// Voice snippet for a (locale, channel) pair, preferring the medium bio,
    /// then short, then long. Empty string on any miss.
    pub fn voice_for(&self, locale: Locale, channel: Channel) -> &str {
        let key = match channel {
            Channel::LinkedIn => LINKEDIN_STORE_KEY,
            _ => channel.name(),
        };
        let Some(entry) = self.profiles.get(&locale).and_then(|channels| channels.get(key))
        else {
            return "";
        };
        [&entry.medium_bio, &entry.short_bio, &entry.long_bio]
            .into_iter()
            .find(|bio| !bio.is_empty())
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kit_with(locale: Locale, channel_key: &str, entry: VoiceEntry) -> VoiceKit {
        let mut kit = VoiceKit::default();
        kit.profiles
            .entry(locale)
            .or_default()
            .insert(channel_key.to_string(), entry);
        kit
    }

    #[test]
    fn test_medium_bio_preferred() {
        let kit = kit_with(
            Locale::En,
            "Reddit",
            VoiceEntry {
                short_bio: "short".to_string(),
                medium_bio: "medium".to_string(),
                long_bio: "long".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(kit.voice_for(Locale::En, Channel::Reddit), "medium");
    }

    #[test]
    fn test_fallback_order_short_then_long() {
        let kit = kit_with(
            Locale::En,
            "Reddit",
            VoiceEntry {
                short_bio: "short".to_string(),
                long_bio: "long".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(kit.voice_for(Locale::En, Channel::Reddit), "short");

        let kit = kit_with(
            Locale::En,
            "Reddit",
            VoiceEntry {
                long_bio: "long".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(kit.voice_for(Locale::En, Channel::Reddit), "long");
    }

    #[test]
    fn test_linkedin_aliases_to_company_page_key() {
        let kit = kit_with(
            Locale::Pt,
            LINKEDIN_STORE_KEY,
            VoiceEntry {
                medium_bio: "company voice".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(kit.voice_for(Locale::Pt, Channel::LinkedIn), "company voice");
        // A store entry under the display name "LinkedIn" is never consulted.
        let kit = kit_with(
            Locale::Pt,
            "LinkedIn",
            VoiceEntry {
                medium_bio: "wrong key".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(kit.voice_for(Locale::Pt, Channel::LinkedIn), "");
    }

    #[test]
    fn test_missing_locale_or_channel_degrades_to_empty() {
        let kit = VoiceKit::default();
        assert_eq!(kit.voice_for(Locale::Es, Channel::Medium), "");

        let kit = kit_with(Locale::En, "Medium", VoiceEntry::default());
        assert_eq!(kit.voice_for(Locale::En, Channel::Medium), "");
        assert_eq!(kit.voice_for(Locale::Es, Channel::Medium), "");
    }

    #[test]
    fn test_profile_kit_json_shape() {
        let json = r#"{
            "en": {
                "Dev.to": {"short_bio": "dev writer", "link_policy_notes": "footer only"}
            }
        }"#;
        let kit: VoiceKit = serde_json::from_str(json).unwrap();
        assert_eq!(kit.voice_for(Locale::En, Channel::DevTo), "dev writer");
    }
}
