// Distribution prompt generation engine.
// Pure and synchronous: validated settings + locale content in, channel-keyed
// prompt text out. The HTTP layer in handlers is the only caller.

pub mod bundle;
pub mod channels;
pub mod composer;
pub mod generator;
pub mod handlers;
pub mod link_rules;
pub mod voice;
